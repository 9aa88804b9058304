//! Queries shared by every ordered-list table.
//!
//! `table` is always a compile-time constant supplied by a repository,
//! never caller input, so it is safe to interpolate.

use folio_core::ordering::positions;
use folio_core::types::DbId;
use sqlx::PgPool;

/// Delete one row by id. Returns `true` if a row was removed.
pub(crate) async fn delete_row(
    pool: &PgPool,
    table: &'static str,
    id: DbId,
) -> Result<bool, sqlx::Error> {
    let query = format!("DELETE FROM {table} WHERE id = $1");
    let result = sqlx::query(&query).bind(id).execute(pool).await?;
    Ok(result.rows_affected() > 0)
}

/// Rewrite `order_index` for every id in one transaction.
///
/// All-or-nothing: if an id is unknown the transaction is rolled back and
/// that id is returned.
pub(crate) async fn reorder_rows(
    pool: &PgPool,
    table: &'static str,
    ids: &[DbId],
) -> Result<Option<DbId>, sqlx::Error> {
    let query = format!("UPDATE {table} SET order_index = $2 WHERE id = $1");
    let mut tx = pool.begin().await?;

    for (id, position) in positions(ids) {
        let result = sqlx::query(&query)
            .bind(id)
            .bind(position)
            .execute(&mut *tx)
            .await?;
        if result.rows_affected() == 0 {
            tracing::debug!(table, id, "Reorder aborted, unknown id");
            tx.rollback().await?;
            return Ok(Some(id));
        }
    }

    tx.commit().await?;
    Ok(None)
}
