//! Project model and DTOs (ordered list).

use folio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub title: String,
    pub category: String,
    pub description: String,
    pub image_url: String,
    pub live_url: String,
    pub github_url: Option<String>,
    pub order_index: i32,
    pub is_featured: bool,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a project. A missing `order_index` appends to the end.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateProject {
    pub title: String,
    pub category: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub live_url: Option<String>,
    pub github_url: Option<String>,
    pub order_index: Option<i32>,
    pub is_featured: Option<bool>,
    pub is_active: Option<bool>,
}

/// DTO for updating a project. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProject {
    pub title: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub live_url: Option<String>,
    pub github_url: Option<String>,
    pub order_index: Option<i32>,
    pub is_featured: Option<bool>,
    pub is_active: Option<bool>,
}
