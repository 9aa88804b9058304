//! Work experience model and DTOs (ordered list, shown in the about section).

use folio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Experience {
    pub id: DbId,
    pub role: String,
    pub company: String,
    pub duration: String,
    pub description: String,
    pub order_index: i32,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateExperience {
    pub role: String,
    pub company: Option<String>,
    pub duration: Option<String>,
    pub description: Option<String>,
    pub order_index: Option<i32>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateExperience {
    pub role: Option<String>,
    pub company: Option<String>,
    pub duration: Option<String>,
    pub description: Option<String>,
    pub order_index: Option<i32>,
    pub is_active: Option<bool>,
}
