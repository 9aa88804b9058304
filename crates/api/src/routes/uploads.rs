//! Route definitions for `/uploads`.

use axum::extract::DefaultBodyLimit;
use axum::routing::post;
use axum::Router;

use crate::handlers::uploads;
use crate::state::AppState;

/// Routes mounted at `/api/uploads`.
///
/// The handler enforces `MAX_UPLOAD_BYTES` while streaming the file, so
/// axum's default 2 MB body limit is lifted here.
///
/// ```text
/// POST /   -> upload_image
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(uploads::upload_image))
        .layer(DefaultBodyLimit::disable())
}
