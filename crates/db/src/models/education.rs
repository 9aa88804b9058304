//! Education entry model and DTOs (ordered list, shown in the about section).

use folio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Education {
    pub id: DbId,
    pub degree: String,
    pub institution: String,
    /// Free-form period, e.g. `"2020 - 2024"`.
    pub duration: String,
    pub order_index: i32,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateEducation {
    pub degree: String,
    pub institution: Option<String>,
    pub duration: Option<String>,
    pub order_index: Option<i32>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateEducation {
    pub degree: Option<String>,
    pub institution: Option<String>,
    pub duration: Option<String>,
    pub order_index: Option<i32>,
    pub is_active: Option<bool>,
}
