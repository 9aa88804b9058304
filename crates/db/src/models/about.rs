//! About section model (singleton).

use folio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// The single row of the `about_section` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AboutSection {
    pub id: DbId,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub phone: String,
    pub email: String,
    pub cv_url: String,
    pub image1_url: String,
    pub image2_url: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpsertAbout {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub description: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub cv_url: Option<String>,
    pub image1_url: Option<String>,
    pub image2_url: Option<String>,
}
