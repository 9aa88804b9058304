//! Repository for the `skills` table.

use folio_core::types::DbId;
use sqlx::PgPool;

use super::ordered;
use crate::models::skill::{CreateSkill, Skill, UpdateSkill};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "\
    id, name, items, order_index, is_active, created_at, updated_at";

/// Provides CRUD and ordering operations for skill categories.
pub struct SkillRepo;

impl SkillRepo {
    /// Insert a new row, returning it.
    ///
    /// Without an explicit `order_index` the row is appended after the
    /// current last entry.
    pub async fn create(pool: &PgPool, input: &CreateSkill) -> Result<Skill, sqlx::Error> {
        let query = format!(
            "INSERT INTO skills (
                 name, items, order_index, is_active)
             VALUES (
                 $1, COALESCE($2, '{{}}'),
                 COALESCE($3, (SELECT COALESCE(MAX(order_index) + 1, 0) FROM skills)),
                 COALESCE($4, true))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Skill>(&query)
            .bind(&input.name)
            .bind(&input.items)
            .bind(input.order_index)
            .bind(input.is_active)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Skill>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM skills WHERE id = $1");
        sqlx::query_as::<_, Skill>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List active rows in display order.
    pub async fn list_active(pool: &PgPool) -> Result<Vec<Skill>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM skills WHERE is_active = true ORDER BY order_index, id"
        );
        sqlx::query_as::<_, Skill>(&query).fetch_all(pool).await
    }

    /// List every row, including inactive ones, in display order.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Skill>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM skills ORDER BY order_index, id");
        sqlx::query_as::<_, Skill>(&query).fetch_all(pool).await
    }

    /// Update a row. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateSkill,
    ) -> Result<Option<Skill>, sqlx::Error> {
        let query = format!(
            "UPDATE skills SET
                 name = COALESCE($2, name),
                 items = COALESCE($3, items),
                 order_index = COALESCE($4, order_index),
                 is_active = COALESCE($5, is_active)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Skill>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.items)
            .bind(input.order_index)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    /// Delete a row. Returns `true` if it existed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        ordered::delete_row(pool, "skills", id).await
    }

    /// Assign `order_index` by position in `ids`.
    ///
    /// Returns the first unknown id, in which case nothing was written.
    pub async fn reorder(pool: &PgPool, ids: &[DbId]) -> Result<Option<DbId>, sqlx::Error> {
        ordered::reorder_rows(pool, "skills", ids).await
    }
}
