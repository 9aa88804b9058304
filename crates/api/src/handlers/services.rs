//! Handlers for the `/services` list.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use folio_core::content::{ContentAction, Section};
use folio_core::error::CoreError;
use folio_core::ordering::validate_reorder;
use folio_core::types::DbId;
use folio_core::validation::{
    check_opt, validate_non_negative, validate_required, validate_title_len,
};
use folio_db::models::service::{CreateService, Service, UpdateService};
use folio_db::models::ReorderRequest;
use folio_db::repositories::ServiceRepo;

use super::{success, SuccessResponse};
use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

const SECTION: Section = Section::Services;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: SECTION.label(),
        id,
    })
}

/// GET /api/services
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Service>>> {
    let rows = ServiceRepo::list_active(&state.pool).await?;
    Ok(Json(rows))
}

/// GET /api/admin/services
///
/// Every row, including inactive ones.
pub async fn list_all(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Service>>> {
    let rows = ServiceRepo::list_all(&state.pool).await?;
    Ok(Json(rows))
}

/// GET /api/services/{id}
///
/// Inactive rows are hidden from the public read.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Service>> {
    let row = ServiceRepo::find_by_id(&state.pool, id)
        .await?
        .filter(|row| row.is_active)
        .ok_or_else(|| not_found(id))?;
    Ok(Json(row))
}

/// POST /api/services
pub async fn create(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateService>,
) -> AppResult<(StatusCode, Json<Service>)> {
    validate_create(&input)?;
    let row = ServiceRepo::create(&state.pool, &input).await?;
    state.content_changed(SECTION, ContentAction::Created, Some(row.id), admin.user_id);
    Ok((StatusCode::CREATED, Json(row)))
}

/// PUT /api/services/{id}
pub async fn update(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    AppJson(input): AppJson<UpdateService>,
) -> AppResult<Json<Service>> {
    validate_update(&input)?;
    let row = ServiceRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    state.content_changed(SECTION, ContentAction::Updated, Some(id), admin.user_id);
    Ok(Json(row))
}

/// DELETE /api/services/{id}
pub async fn delete(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<SuccessResponse>> {
    if !ServiceRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }
    state.content_changed(SECTION, ContentAction::Deleted, Some(id), admin.user_id);
    Ok(success())
}

/// PUT /api/services/reorder
///
/// Returns every row in the new order.
pub async fn reorder(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    AppJson(input): AppJson<ReorderRequest>,
) -> AppResult<Json<Vec<Service>>> {
    validate_reorder(&input.ids)?;
    if let Some(unknown) = ServiceRepo::reorder(&state.pool, &input.ids).await? {
        return Err(not_found(unknown));
    }
    state.content_changed(SECTION, ContentAction::Reordered, None, admin.user_id);
    let rows = ServiceRepo::list_all(&state.pool).await?;
    Ok(Json(rows))
}

fn validate_create(input: &CreateService) -> Result<(), CoreError> {
    validate_required("title", &input.title)?;
    check_opt(input.icon_class.as_deref(), |v| validate_title_len("icon_class", v))?;
    check_opt(input.order_index.as_ref(), |v| validate_non_negative("order_index", *v))?;
    Ok(())
}

fn validate_update(input: &UpdateService) -> Result<(), CoreError> {
    check_opt(input.title.as_deref(), |v| validate_required("title", v))?;
    check_opt(input.icon_class.as_deref(), |v| validate_title_len("icon_class", v))?;
    check_opt(input.order_index.as_ref(), |v| validate_non_negative("order_index", *v))?;
    Ok(())
}
