//! Request extractors with JSON error bodies.

use axum::extract::FromRequest;

use crate::error::AppError;

/// Drop-in replacement for [`axum::Json`] as a request extractor.
///
/// Malformed bodies are rejected through [`AppError`], so clients get the
/// usual `{"error", "code"}` shape instead of axum's plain-text rejection.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);
