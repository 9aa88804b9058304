//! Repository for the `experience` table.

use folio_core::types::DbId;
use sqlx::PgPool;

use super::ordered;
use crate::models::experience::{CreateExperience, Experience, UpdateExperience};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "\
    id, role, company, duration, description, order_index, is_active, \
    created_at, updated_at";

/// Provides CRUD and ordering operations for experience entries.
pub struct ExperienceRepo;

impl ExperienceRepo {
    /// Insert a new row, returning it.
    ///
    /// Without an explicit `order_index` the row is appended after the
    /// current last entry.
    pub async fn create(pool: &PgPool, input: &CreateExperience) -> Result<Experience, sqlx::Error> {
        let query = format!(
            "INSERT INTO experience (
                 role, company, duration, description, order_index, is_active)
             VALUES (
                 $1, COALESCE($2, ''), COALESCE($3, ''), COALESCE($4, ''),
                 COALESCE($5, (SELECT COALESCE(MAX(order_index) + 1, 0) FROM experience)),
                 COALESCE($6, true))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Experience>(&query)
            .bind(&input.role)
            .bind(&input.company)
            .bind(&input.duration)
            .bind(&input.description)
            .bind(input.order_index)
            .bind(input.is_active)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Experience>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM experience WHERE id = $1");
        sqlx::query_as::<_, Experience>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List active rows in display order.
    pub async fn list_active(pool: &PgPool) -> Result<Vec<Experience>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM experience WHERE is_active = true ORDER BY order_index, id"
        );
        sqlx::query_as::<_, Experience>(&query).fetch_all(pool).await
    }

    /// List every row, including inactive ones, in display order.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Experience>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM experience ORDER BY order_index, id");
        sqlx::query_as::<_, Experience>(&query).fetch_all(pool).await
    }

    /// Update a row. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateExperience,
    ) -> Result<Option<Experience>, sqlx::Error> {
        let query = format!(
            "UPDATE experience SET
                 role = COALESCE($2, role),
                 company = COALESCE($3, company),
                 duration = COALESCE($4, duration),
                 description = COALESCE($5, description),
                 order_index = COALESCE($6, order_index),
                 is_active = COALESCE($7, is_active)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Experience>(&query)
            .bind(id)
            .bind(&input.role)
            .bind(&input.company)
            .bind(&input.duration)
            .bind(&input.description)
            .bind(input.order_index)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    /// Delete a row. Returns `true` if it existed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        ordered::delete_row(pool, "experience", id).await
    }

    /// Assign `order_index` by position in `ids`.
    ///
    /// Returns the first unknown id, in which case nothing was written.
    pub async fn reorder(pool: &PgPool, ids: &[DbId]) -> Result<Option<DbId>, sqlx::Error> {
        ordered::reorder_rows(pool, "experience", ids).await
    }
}
