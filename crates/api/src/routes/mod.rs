pub mod admin;
pub mod auth;
pub mod health;
pub mod lists;
pub mod sections;
pub mod uploads;

use axum::routing::get;
use axum::Router;

use crate::handlers::content;
use crate::state::AppState;
use crate::ws;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /ws                                  WebSocket (content events)
///
/// /auth/login                          login (public)
/// /auth/verify                         verify token (auth required)
/// /auth/logout                         clear cookie (public)
///
/// /content                             all sections in one document (public)
///
/// /hero, /about, /profile,
/// /contact, /stats, /settings          get (public), upsert (admin)
///
/// /projects, /skills, /services,
/// /soft-skills, /education,
/// /experience                          list active (public), create (admin)
/// /{list}/{id}                         get (public), update, delete (admin)
/// /{list}/reorder                      reorder (admin)
///
/// /admin/{list}                        list all rows incl. inactive (admin)
///
/// /uploads                             image upload (admin)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // WebSocket endpoint.
        .route("/ws", get(ws::ws_handler))
        // Authentication routes.
        .nest("/auth", auth::router())
        // Whole-site read.
        .route("/content", get(content::get_all))
        // Singleton sections.
        .merge(sections::router())
        // Ordered lists.
        .nest("/projects", lists::projects())
        .nest("/skills", lists::skills())
        .nest("/services", lists::services())
        .nest("/soft-skills", lists::soft_skills())
        .nest("/education", lists::education())
        .nest("/experience", lists::experience())
        // Admin views of the lists.
        .nest("/admin", admin::router())
        // Image uploads.
        .nest("/uploads", uploads::router())
}
