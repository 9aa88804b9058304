//! Route definitions for the ordered list sections.
//!
//! Every list exposes the same shape:
//!
//! ```text
//! GET    /            -> list (active rows)
//! POST   /            -> create
//! PUT    /reorder     -> reorder
//! GET    /{id}        -> get_by_id
//! PUT    /{id}        -> update
//! DELETE /{id}        -> delete
//! ```

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::{education, experience, projects, services, skills, soft_skills};
use crate::state::AppState;

/// Builds a list router from a handler module.
macro_rules! list_router {
    ($handlers:ident) => {
        Router::new()
            .route("/", get($handlers::list).post($handlers::create))
            .route("/reorder", put($handlers::reorder))
            .route(
                "/{id}",
                get($handlers::get_by_id)
                    .put($handlers::update)
                    .delete($handlers::delete),
            )
    };
}

/// Routes mounted at `/projects`. `GET /?featured=true` lists featured projects.
pub fn projects() -> Router<AppState> {
    list_router!(projects)
}

pub fn skills() -> Router<AppState> {
    list_router!(skills)
}

pub fn services() -> Router<AppState> {
    list_router!(services)
}

pub fn soft_skills() -> Router<AppState> {
    list_router!(soft_skills)
}

pub fn education() -> Router<AppState> {
    list_router!(education)
}

pub fn experience() -> Router<AppState> {
    list_router!(experience)
}
