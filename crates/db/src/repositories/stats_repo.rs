//! Repository for the `stats` singleton table.

use folio_core::types::SINGLETON_ID;
use sqlx::PgPool;

use crate::models::stats::{Stats, UpsertStats};

/// Column list for `stats` queries.
const COLUMNS: &str = "\
    id, months_experience, projects_completed, professionalism_percent, \
    video_thumbnail_url, created_at, updated_at";

/// Provides read and upsert access to the stats.
pub struct StatsRepo;

impl StatsRepo {
    /// Fetch the stats. Returns `None` if it has never been saved.
    pub async fn get(pool: &PgPool) -> Result<Option<Stats>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM stats WHERE id = $1");
        sqlx::query_as::<_, Stats>(&query)
            .bind(SINGLETON_ID)
            .fetch_optional(pool)
            .await
    }

    /// Insert or update the stats.
    ///
    /// The first save creates the row with defaults for omitted fields;
    /// later saves only overwrite the fields present in `dto`.
    pub async fn upsert(pool: &PgPool, dto: &UpsertStats) -> Result<Stats, sqlx::Error> {
        let query = format!(
            "INSERT INTO stats (
                 id, months_experience, projects_completed,
                 professionalism_percent, video_thumbnail_url)
             VALUES (
                 $5, COALESCE($1, 0), COALESCE($2, 0), COALESCE($3, 100),
                 COALESCE($4, ''))
             ON CONFLICT (id) DO UPDATE SET
                 months_experience = COALESCE($1, stats.months_experience),
                 projects_completed = COALESCE($2, stats.projects_completed),
                 professionalism_percent = COALESCE($3, stats.professionalism_percent),
                 video_thumbnail_url = COALESCE($4, stats.video_thumbnail_url)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Stats>(&query)
            .bind(dto.months_experience)
            .bind(dto.projects_completed)
            .bind(dto.professionalism_percent)
            .bind(&dto.video_thumbnail_url)
            .bind(SINGLETON_ID)
            .fetch_one(pool)
            .await
    }
}
