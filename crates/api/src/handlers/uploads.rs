//! Handler for image uploads.

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::Json;
use folio_core::error::CoreError;
use folio_core::uploads::{inspect_image, storage_key};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

/// Metadata of a stored image.
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    /// Public URL, usable directly in any `*_url` content field.
    pub url: String,
    pub width: u32,
    pub height: u32,
    /// File extension of the detected format (`png`, `jpg`, `webp`, `gif`).
    pub format: &'static str,
    pub size_bytes: usize,
}

/// POST /api/uploads
///
/// Stores the first file field of a multipart body. The body is read in
/// chunks and rejected as soon as it exceeds the configured limit.
pub async fn upload_image(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<(StatusCode, Json<UploadResponse>)> {
    let max_bytes = state.config.max_upload_bytes;

    let mut data = None;
    while let Some(mut field) = multipart.next_field().await? {
        if field.file_name().is_none() {
            continue;
        }
        let mut buf = Vec::new();
        while let Some(chunk) = field.chunk().await? {
            if buf.len() + chunk.len() > max_bytes {
                return Err(AppError::Core(CoreError::Validation(format!(
                    "Uploaded file exceeds the {max_bytes} byte limit"
                ))));
            }
            buf.extend_from_slice(&chunk);
        }
        data = Some(buf);
        break;
    }
    let data = data.ok_or_else(|| AppError::BadRequest("Missing file field".into()))?;

    let info = inspect_image(&data, max_bytes)?;
    let key = storage_key(&data, info.extension);
    let url = state
        .image_store
        .put(&key, &data)
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to store image: {e}")))?;

    tracing::info!(
        %key,
        size_bytes = info.size_bytes,
        user_id = admin.user_id,
        "Image uploaded",
    );

    Ok((
        StatusCode::CREATED,
        Json(UploadResponse {
            url,
            width: info.width,
            height: info.height,
            format: info.extension,
            size_bytes: info.size_bytes,
        }),
    ))
}
