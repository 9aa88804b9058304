//! Repository for the `services` table.

use folio_core::types::DbId;
use sqlx::PgPool;

use super::ordered;
use crate::models::service::{CreateService, Service, UpdateService};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "\
    id, title, icon_class, order_index, is_active, created_at, updated_at";

/// Provides CRUD and ordering operations for services.
pub struct ServiceRepo;

impl ServiceRepo {
    /// Insert a new row, returning it.
    ///
    /// Without an explicit `order_index` the row is appended after the
    /// current last entry.
    pub async fn create(pool: &PgPool, input: &CreateService) -> Result<Service, sqlx::Error> {
        let query = format!(
            "INSERT INTO services (
                 title, icon_class, order_index, is_active)
             VALUES (
                 $1, COALESCE($2, ''),
                 COALESCE($3, (SELECT COALESCE(MAX(order_index) + 1, 0) FROM services)),
                 COALESCE($4, true))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Service>(&query)
            .bind(&input.title)
            .bind(&input.icon_class)
            .bind(input.order_index)
            .bind(input.is_active)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Service>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM services WHERE id = $1");
        sqlx::query_as::<_, Service>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List active rows in display order.
    pub async fn list_active(pool: &PgPool) -> Result<Vec<Service>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM services WHERE is_active = true ORDER BY order_index, id"
        );
        sqlx::query_as::<_, Service>(&query).fetch_all(pool).await
    }

    /// List every row, including inactive ones, in display order.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Service>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM services ORDER BY order_index, id");
        sqlx::query_as::<_, Service>(&query).fetch_all(pool).await
    }

    /// Update a row. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateService,
    ) -> Result<Option<Service>, sqlx::Error> {
        let query = format!(
            "UPDATE services SET
                 title = COALESCE($2, title),
                 icon_class = COALESCE($3, icon_class),
                 order_index = COALESCE($4, order_index),
                 is_active = COALESCE($5, is_active)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Service>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.icon_class)
            .bind(input.order_index)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    /// Delete a row. Returns `true` if it existed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        ordered::delete_row(pool, "services", id).await
    }

    /// Assign `order_index` by position in `ids`.
    ///
    /// Returns the first unknown id, in which case nothing was written.
    pub async fn reorder(pool: &PgPool, ids: &[DbId]) -> Result<Option<DbId>, sqlx::Error> {
        ordered::reorder_rows(pool, "services", ids).await
    }
}
