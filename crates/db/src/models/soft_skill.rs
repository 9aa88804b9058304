//! Soft skill model and DTOs (ordered list).

use folio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SoftSkill {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub icon_class: String,
    pub order_index: i32,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateSoftSkill {
    pub title: String,
    pub description: Option<String>,
    pub icon_class: Option<String>,
    pub order_index: Option<i32>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateSoftSkill {
    pub title: Option<String>,
    pub description: Option<String>,
    pub icon_class: Option<String>,
    pub order_index: Option<i32>,
    pub is_active: Option<bool>,
}
