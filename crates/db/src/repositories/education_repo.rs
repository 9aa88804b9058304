//! Repository for the `education` table.

use folio_core::types::DbId;
use sqlx::PgPool;

use super::ordered;
use crate::models::education::{CreateEducation, Education, UpdateEducation};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "\
    id, degree, institution, duration, order_index, is_active, created_at, \
    updated_at";

/// Provides CRUD and ordering operations for education entries.
pub struct EducationRepo;

impl EducationRepo {
    /// Insert a new row, returning it.
    ///
    /// Without an explicit `order_index` the row is appended after the
    /// current last entry.
    pub async fn create(pool: &PgPool, input: &CreateEducation) -> Result<Education, sqlx::Error> {
        let query = format!(
            "INSERT INTO education (
                 degree, institution, duration, order_index, is_active)
             VALUES (
                 $1, COALESCE($2, ''), COALESCE($3, ''),
                 COALESCE($4, (SELECT COALESCE(MAX(order_index) + 1, 0) FROM education)),
                 COALESCE($5, true))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Education>(&query)
            .bind(&input.degree)
            .bind(&input.institution)
            .bind(&input.duration)
            .bind(input.order_index)
            .bind(input.is_active)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Education>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM education WHERE id = $1");
        sqlx::query_as::<_, Education>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List active rows in display order.
    pub async fn list_active(pool: &PgPool) -> Result<Vec<Education>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM education WHERE is_active = true ORDER BY order_index, id"
        );
        sqlx::query_as::<_, Education>(&query).fetch_all(pool).await
    }

    /// List every row, including inactive ones, in display order.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Education>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM education ORDER BY order_index, id");
        sqlx::query_as::<_, Education>(&query).fetch_all(pool).await
    }

    /// Update a row. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateEducation,
    ) -> Result<Option<Education>, sqlx::Error> {
        let query = format!(
            "UPDATE education SET
                 degree = COALESCE($2, degree),
                 institution = COALESCE($3, institution),
                 duration = COALESCE($4, duration),
                 order_index = COALESCE($5, order_index),
                 is_active = COALESCE($6, is_active)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Education>(&query)
            .bind(id)
            .bind(&input.degree)
            .bind(&input.institution)
            .bind(&input.duration)
            .bind(input.order_index)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    /// Delete a row. Returns `true` if it existed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        ordered::delete_row(pool, "education", id).await
    }

    /// Assign `order_index` by position in `ids`.
    ///
    /// Returns the first unknown id, in which case nothing was written.
    pub async fn reorder(pool: &PgPool, ids: &[DbId]) -> Result<Option<DbId>, sqlx::Error> {
        ordered::reorder_rows(pool, "education", ids).await
    }
}
