use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DbErr, EntityName, EntityTrait, PaginatorTrait,
    QuerySelect, SqlErr,
};
use tracing::debug;

use crate::club_errors::ClubErr;

pub fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}

/// MAX(id) + 1, or 1 for an empty table.
pub async fn next_id<E, C>(db: &C, id_column: E::Column) -> Result<i32, DbErr>
where
    E: EntityTrait,
    C: ConnectionTrait,
{
    let max_id: Option<Option<i32>> = E::find()
        .select_only()
        .column_as(Expr::col(id_column).max(), "max_id")
        .into_tuple()
        .one(db)
        .await?;
    Ok(max_id.flatten().map_or(1, |max| max + 1))
}

pub async fn count<E, C>(db: &C) -> Result<u64, DbErr>
where
    E: EntityTrait,
    E::Model: Sync,
    C: ConnectionTrait,
{
    E::find().count(db).await
}

/// Inserts the row built for the next free id. A concurrent insert that took
/// the same id trips the primary key, in which case the maximum is re-read
/// and the insert tried again, at most `attempts` times.
pub async fn insert_with_next_id<E, A, C, F>(
    db: &C,
    id_column: E::Column,
    attempts: u32,
    mut build: F,
) -> Result<i32, ClubErr>
where
    E: EntityTrait + Default,
    A: ActiveModelTrait<Entity = E>,
    C: ConnectionTrait,
    F: FnMut(i32) -> A,
{
    let table = E::default().table_name().to_string();
    for attempt in 1..=attempts.max(1) {
        let id = next_id::<E, C>(db, id_column).await?;
        match E::insert(build(id)).exec(db).await {
            Ok(_) => return Ok(id),
            Err(err) if is_unique_violation(&err) => {
                debug!(target: "store", "{} id {} taken (attempt {}/{}), retrying", table, id, attempt, attempts);
            }
            Err(err) => return Err(err.into()),
        }
    }
    Err(ClubErr::IdAllocationExhausted {
        table,
        attempts: attempts.max(1),
    })
}
