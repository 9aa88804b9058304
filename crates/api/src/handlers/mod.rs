pub mod about;
pub mod auth;
pub mod contact;
pub mod content;
pub mod education;
pub mod experience;
pub mod hero;
pub mod profile;
pub mod projects;
pub mod settings;
pub mod services;
pub mod skills;
pub mod soft_skills;
pub mod stats;
pub mod uploads;

use axum::Json;
use serde::Serialize;

/// Body of responses that only acknowledge a write (`{"success": true}`).
#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

pub(crate) fn success() -> Json<SuccessResponse> {
    Json(SuccessResponse { success: true })
}
