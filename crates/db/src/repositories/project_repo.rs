//! Repository for the `projects` table.

use folio_core::types::DbId;
use sqlx::PgPool;

use super::ordered;
use crate::models::project::{CreateProject, Project, UpdateProject};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "\
    id, title, category, description, image_url, live_url, github_url, \
    is_featured, order_index, is_active, created_at, updated_at";

/// Provides CRUD and ordering operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new row, returning it.
    ///
    /// Without an explicit `order_index` the row is appended after the
    /// current last entry.
    pub async fn create(pool: &PgPool, input: &CreateProject) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects (
                 title, category, description, image_url, live_url, github_url,
                 is_featured, order_index, is_active)
             VALUES (
                 $1, COALESCE($2, ''), COALESCE($3, ''), COALESCE($4, ''),
                 COALESCE($5, ''), NULLIF($6, ''), COALESCE($7, false),
                 COALESCE($8, (SELECT COALESCE(MAX(order_index) + 1, 0) FROM projects)),
                 COALESCE($9, true))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(&input.title)
            .bind(&input.category)
            .bind(&input.description)
            .bind(&input.image_url)
            .bind(&input.live_url)
            .bind(&input.github_url)
            .bind(input.is_featured)
            .bind(input.order_index)
            .bind(input.is_active)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List active rows in display order.
    pub async fn list_active(pool: &PgPool) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM projects WHERE is_active = true ORDER BY order_index, id"
        );
        sqlx::query_as::<_, Project>(&query).fetch_all(pool).await
    }

    /// List every row, including inactive ones, in display order.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects ORDER BY order_index, id");
        sqlx::query_as::<_, Project>(&query).fetch_all(pool).await
    }

    /// List active featured projects in display order.
    pub async fn list_featured(pool: &PgPool) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM projects \
             WHERE is_active = true AND is_featured = true \
             ORDER BY order_index, id"
        );
        sqlx::query_as::<_, Project>(&query).fetch_all(pool).await
    }

    /// Update a row. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProject,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET
                 title = COALESCE($2, title),
                 category = COALESCE($3, category),
                 description = COALESCE($4, description),
                 image_url = COALESCE($5, image_url),
                 live_url = COALESCE($6, live_url),
                 github_url = CASE WHEN $7::TEXT IS NULL THEN github_url ELSE NULLIF($7, '') END,
                 is_featured = COALESCE($8, is_featured),
                 order_index = COALESCE($9, order_index),
                 is_active = COALESCE($10, is_active)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.category)
            .bind(&input.description)
            .bind(&input.image_url)
            .bind(&input.live_url)
            .bind(&input.github_url)
            .bind(input.is_featured)
            .bind(input.order_index)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    /// Delete a row. Returns `true` if it existed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        ordered::delete_row(pool, "projects", id).await
    }

    /// Assign `order_index` by position in `ids`.
    ///
    /// Returns the first unknown id, in which case nothing was written.
    pub async fn reorder(pool: &PgPool, ids: &[DbId]) -> Result<Option<DbId>, sqlx::Error> {
        ordered::reorder_rows(pool, "projects", ids).await
    }
}
