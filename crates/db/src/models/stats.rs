//! Headline stats model (singleton).

use folio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Stats {
    pub id: DbId,
    pub months_experience: i32,
    pub projects_completed: i32,
    /// Always within `0..=100` (checked by the schema).
    pub professionalism_percent: i32,
    pub video_thumbnail_url: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpsertStats {
    pub months_experience: Option<i32>,
    pub projects_completed: Option<i32>,
    pub professionalism_percent: Option<i32>,
    pub video_thumbnail_url: Option<String>,
}
