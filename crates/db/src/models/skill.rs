//! Skill category model and DTOs (ordered list).
//!
//! A row is one category (e.g. "Backend") with its list of item strings.

use folio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Skill {
    pub id: DbId,
    pub name: String,
    pub items: Vec<String>,
    pub order_index: i32,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateSkill {
    pub name: String,
    pub items: Option<Vec<String>>,
    pub order_index: Option<i32>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateSkill {
    pub name: Option<String>,
    /// Replaces the whole item list when present.
    pub items: Option<Vec<String>>,
    pub order_index: Option<i32>,
    pub is_active: Option<bool>,
}
