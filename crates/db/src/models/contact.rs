//! Contact info model (singleton).

use folio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// The single row of the `contact_info` table, also used for the footer.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ContactInfo {
    pub id: DbId,
    pub email: String,
    pub linkedin_url: String,
    pub address_1: String,
    pub address_2: String,
    pub footer_name: String,
    pub copyright_text: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpsertContact {
    pub email: Option<String>,
    pub linkedin_url: Option<String>,
    pub address_1: Option<String>,
    pub address_2: Option<String>,
    pub footer_name: Option<String>,
    pub copyright_text: Option<String>,
}
