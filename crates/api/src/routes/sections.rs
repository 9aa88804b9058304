//! Route definitions for the singleton sections.

use axum::routing::get;
use axum::Router;

use crate::handlers::{about, contact, hero, profile, settings, stats};
use crate::state::AppState;

/// Routes merged at the `/api` root.
///
/// ```text
/// GET /hero      -> hero::get        PUT /hero      -> hero::upsert
/// GET /about     -> about::get       PUT /about     -> about::upsert
/// GET /profile   -> profile::get     PUT /profile   -> profile::upsert
/// GET /contact   -> contact::get     PUT /contact   -> contact::upsert
/// GET /stats     -> stats::get       PUT /stats     -> stats::upsert
/// GET /settings  -> settings::get    PUT /settings  -> settings::upsert
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/hero", get(hero::get).put(hero::upsert))
        .route("/about", get(about::get).put(about::upsert))
        .route("/profile", get(profile::get).put(profile::upsert))
        .route("/contact", get(contact::get).put(contact::upsert))
        .route("/stats", get(stats::get).put(stats::upsert))
        .route("/settings", get(settings::get).put(settings::upsert))
}
