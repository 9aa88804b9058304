//! Profile model (singleton): the sidebar identity card of the public site.

use folio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Profile {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub location: String,
    pub bio: String,
    pub image_url: String,
    pub github_url: String,
    pub linkedin_url: String,
    pub facebook_url: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpsertProfile {
    pub name: Option<String>,
    pub email: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub image_url: Option<String>,
    pub github_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub facebook_url: Option<String>,
}
