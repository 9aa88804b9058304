//! Hero section model (singleton).

use folio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// The single row of the `hero_section` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct HeroSection {
    pub id: DbId,
    pub greeting_text: String,
    pub name: String,
    pub description: String,
    pub cta_text: String,
    pub cta_link: String,
    pub hero_image_url: String,
    pub portfolio_link: String,
    pub linkedin_link: String,
    pub availability_text: String,
    pub education_text: String,
    pub institution: String,
    pub role_title: String,
    pub projects_count: String,
    pub role_description: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Partial upsert for the hero section. Omitted fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpsertHero {
    pub greeting_text: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub cta_text: Option<String>,
    pub cta_link: Option<String>,
    pub hero_image_url: Option<String>,
    pub portfolio_link: Option<String>,
    pub linkedin_link: Option<String>,
    pub availability_text: Option<String>,
    pub education_text: Option<String>,
    pub institution: Option<String>,
    pub role_title: Option<String>,
    pub projects_count: Option<String>,
    pub role_description: Option<String>,
}
