//! Route definitions for `/admin`.

use axum::routing::get;
use axum::Router;

use crate::handlers::{education, experience, projects, services, skills, soft_skills};
use crate::state::AppState;

/// Routes mounted at `/admin`. All require the admin role.
///
/// ```text
/// GET /projects      -> projects::list_all
/// GET /skills        -> skills::list_all
/// GET /services      -> services::list_all
/// GET /soft-skills   -> soft_skills::list_all
/// GET /education     -> education::list_all
/// GET /experience    -> experience::list_all
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/projects", get(projects::list_all))
        .route("/skills", get(skills::list_all))
        .route("/services", get(services::list_all))
        .route("/soft-skills", get(soft_skills::list_all))
        .route("/education", get(education::list_all))
        .route("/experience", get(experience::list_all))
}
