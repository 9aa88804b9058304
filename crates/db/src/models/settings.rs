//! Site-wide settings model (singleton): meta tags and analytics ids.

use folio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SiteSettings {
    pub id: DbId,
    pub meta_title: String,
    pub meta_description: String,
    pub og_image_url: String,
    pub favicon_url: String,
    pub logo_url: String,
    pub google_analytics_id: Option<String>,
    pub facebook_pixel_id: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Partial upsert for site settings.
///
/// For the analytics ids, an empty string clears the stored value (it is
/// persisted as `NULL`) while an omitted field leaves it unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpsertSettings {
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub og_image_url: Option<String>,
    pub favicon_url: Option<String>,
    pub logo_url: Option<String>,
    pub google_analytics_id: Option<String>,
    pub facebook_pixel_id: Option<String>,
}
