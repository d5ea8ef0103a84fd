use std::cmp::Ordering;
use std::marker::PhantomData;
use std::sync::atomic::{self, AtomicBool};

use crate::orm::model::{game, player};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// A column a table can be ordered by.
pub trait SortColumn: Copy + Send + Sync + 'static {
    type Row;

    /// Maps a column header to a column. Unknown headers give `None`.
    fn parse(name: &str) -> Option<Self>;

    fn compare(self, a: &Self::Row, b: &Self::Row) -> Ordering;
}

#[derive(Debug, Clone, PartialEq)]
pub struct SortedRows<T> {
    pub rows: Vec<T>,
    /// `None` when the column was not recognised and `rows` is unsorted.
    pub direction: Option<SortDirection>,
}

pub fn sort_rows<C: SortColumn>(rows: &mut [C::Row], column: C, direction: SortDirection) {
    match direction {
        SortDirection::Ascending => rows.sort_by(|a, b| column.compare(a, b)),
        SortDirection::Descending => rows.sort_by(|a, b| column.compare(b, a)),
    }
}

/// Flips between ascending and descending on every request, starting with
/// ascending. The flip happens whatever column is asked for.
#[derive(Debug)]
pub struct TableSorter<C> {
    ascending: AtomicBool,
    _column: PhantomData<fn() -> C>,
}

impl<C: SortColumn> TableSorter<C> {
    pub fn new() -> Self {
        Self {
            ascending: AtomicBool::new(false),
            _column: PhantomData,
        }
    }

    pub fn next_direction(&self) -> SortDirection {
        let was_ascending = self.ascending.fetch_xor(true, atomic::Ordering::SeqCst);
        if was_ascending {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerColumn {
    Id,
    Firstname,
    Surname,
    Email,
    Gender,
    Handicap,
}

impl SortColumn for PlayerColumn {
    type Row = player::Model;

    fn parse(name: &str) -> Option<Self> {
        match name {
            "Id" => Some(Self::Id),
            "Firstname" => Some(Self::Firstname),
            "Surname" => Some(Self::Surname),
            "Email" => Some(Self::Email),
            "Gender" => Some(Self::Gender),
            "Handicap" => Some(Self::Handicap),
            _ => None,
        }
    }

    fn compare(self, a: &player::Model, b: &player::Model) -> Ordering {
        match self {
            Self::Id => a.id.cmp(&b.id),
            Self::Firstname => a.firstname.cmp(&b.firstname),
            Self::Surname => a.surname.cmp(&b.surname),
            Self::Email => a.email.cmp(&b.email),
            Self::Gender => a.gender.cmp(&b.gender),
            Self::Handicap => a.handicap.total_cmp(&b.handicap),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameColumn {
    Id,
    GameTime,
    Captain,
    Player2,
    Player3,
    Player4,
}

impl SortColumn for GameColumn {
    type Row = game::Model;

    fn parse(name: &str) -> Option<Self> {
        match name {
            "Id" => Some(Self::Id),
            "Game Time" => Some(Self::GameTime),
            "Captain" => Some(Self::Captain),
            "Player2" => Some(Self::Player2),
            "Player3" => Some(Self::Player3),
            "Player4" => Some(Self::Player4),
            _ => None,
        }
    }

    fn compare(self, a: &game::Model, b: &game::Model) -> Ordering {
        match self {
            Self::Id => a.id.cmp(&b.id),
            Self::GameTime => a.game_time.cmp(&b.game_time),
            Self::Captain => a.captain.cmp(&b.captain),
            Self::Player2 => a.player2.cmp(&b.player2),
            Self::Player3 => a.player3.cmp(&b.player3),
            Self::Player4 => a.player4.cmp(&b.player4),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(id: i32, surname: &str, handicap: f64) -> player::Model {
        player::Model {
            id,
            firstname: "Al".to_string(),
            surname: surname.to_string(),
            email: format!("p{}@club.com", id),
            gender: "M".to_string(),
            handicap,
        }
    }

    #[test]
    fn sorter_alternates_from_ascending() {
        let sorter: TableSorter<PlayerColumn> = TableSorter::new();
        assert_eq!(sorter.next_direction(), SortDirection::Ascending);
        assert_eq!(sorter.next_direction(), SortDirection::Descending);
        assert_eq!(sorter.next_direction(), SortDirection::Ascending);
    }

    #[test]
    fn sorts_players_by_column() {
        let mut rows = vec![player(2, "Moss", 3.5), player(3, "Hart", 28.0), player(1, "Stone", 12.0)];

        sort_rows(&mut rows, PlayerColumn::Surname, SortDirection::Ascending);
        let surnames: Vec<&str> = rows.iter().map(|p| p.surname.as_str()).collect();
        assert_eq!(surnames, ["Hart", "Moss", "Stone"]);

        sort_rows(&mut rows, PlayerColumn::Handicap, SortDirection::Descending);
        let ids: Vec<i32> = rows.iter().map(|p| p.id).collect();
        assert_eq!(ids, [3, 1, 2]);
    }

    #[test]
    fn column_headers() {
        assert_eq!(GameColumn::parse("Game Time"), Some(GameColumn::GameTime));
        assert_eq!(GameColumn::parse("GameTime"), None);
        assert_eq!(PlayerColumn::parse("Handicap"), Some(PlayerColumn::Handicap));
        assert_eq!(PlayerColumn::parse("handicap"), None);
    }
}
