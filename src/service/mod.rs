pub mod booking_engine;
pub mod player_registry;

pub use booking_engine::{BookingEngine, CascadeMatch};
pub use player_registry::PlayerRegistry;

use crate::club_errors::ClubErr;
use crate::utils::sorting::{sort_rows, SortColumn, SortDirection, SortedRows, TableSorter};

/// Listing and column sorting shared by the player and game tables.
#[async_trait::async_trait]
pub trait ClubTable: Send + Sync {
    type Row: Send;
    type Column: SortColumn<Row = Self::Row>;

    async fn get_all(&self) -> Result<Vec<Self::Row>, ClubErr>;

    fn sorter(&self) -> &TableSorter<Self::Column>;

    /// Fresh snapshot of the table ordered by `column`. An unknown column
    /// returns the snapshot as read.
    async fn sort_tables_by(
        &self,
        column: &str,
        direction: SortDirection,
    ) -> Result<SortedRows<Self::Row>, ClubErr> {
        let mut rows = self.get_all().await?;
        let Some(column) = Self::Column::parse(column) else {
            return Ok(SortedRows {
                rows,
                direction: None,
            });
        };
        sort_rows(&mut rows, column, direction);
        Ok(SortedRows {
            rows,
            direction: Some(direction),
        })
    }

    /// Like `sort_tables_by`, with the direction flipping on every call.
    async fn sort_tables(&self, column: &str) -> Result<SortedRows<Self::Row>, ClubErr> {
        let direction = self.sorter().next_direction();
        self.sort_tables_by(column, direction).await
    }
}
