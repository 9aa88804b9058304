//! Repository for the `soft_skills` table.

use folio_core::types::DbId;
use sqlx::PgPool;

use super::ordered;
use crate::models::soft_skill::{CreateSoftSkill, SoftSkill, UpdateSoftSkill};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "\
    id, title, description, icon_class, order_index, is_active, created_at, \
    updated_at";

/// Provides CRUD and ordering operations for soft skills.
pub struct SoftSkillRepo;

impl SoftSkillRepo {
    /// Insert a new row, returning it.
    ///
    /// Without an explicit `order_index` the row is appended after the
    /// current last entry.
    pub async fn create(pool: &PgPool, input: &CreateSoftSkill) -> Result<SoftSkill, sqlx::Error> {
        let query = format!(
            "INSERT INTO soft_skills (
                 title, description, icon_class, order_index, is_active)
             VALUES (
                 $1, COALESCE($2, ''), COALESCE($3, ''),
                 COALESCE($4, (SELECT COALESCE(MAX(order_index) + 1, 0) FROM soft_skills)),
                 COALESCE($5, true))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SoftSkill>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.icon_class)
            .bind(input.order_index)
            .bind(input.is_active)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<SoftSkill>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM soft_skills WHERE id = $1");
        sqlx::query_as::<_, SoftSkill>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List active rows in display order.
    pub async fn list_active(pool: &PgPool) -> Result<Vec<SoftSkill>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM soft_skills WHERE is_active = true ORDER BY order_index, id"
        );
        sqlx::query_as::<_, SoftSkill>(&query).fetch_all(pool).await
    }

    /// List every row, including inactive ones, in display order.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<SoftSkill>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM soft_skills ORDER BY order_index, id");
        sqlx::query_as::<_, SoftSkill>(&query).fetch_all(pool).await
    }

    /// Update a row. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateSoftSkill,
    ) -> Result<Option<SoftSkill>, sqlx::Error> {
        let query = format!(
            "UPDATE soft_skills SET
                 title = COALESCE($2, title),
                 description = COALESCE($3, description),
                 icon_class = COALESCE($4, icon_class),
                 order_index = COALESCE($5, order_index),
                 is_active = COALESCE($6, is_active)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SoftSkill>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.icon_class)
            .bind(input.order_index)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    /// Delete a row. Returns `true` if it existed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        ordered::delete_row(pool, "soft_skills", id).await
    }

    /// Assign `order_index` by position in `ids`.
    ///
    /// Returns the first unknown id, in which case nothing was written.
    pub async fn reorder(pool: &PgPool, ids: &[DbId]) -> Result<Option<DbId>, sqlx::Error> {
        ordered::reorder_rows(pool, "soft_skills", ids).await
    }
}
