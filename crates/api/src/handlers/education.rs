//! Handlers for the `/education` list.

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
use folio_db::models::education::{CreateEducation, Education, UpdateEducation};
use folio_db::models::ReorderRequest;
use folio_db::repositories::EducationRepo;

use super::{success, SuccessResponse};
use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

const SECTION: Section = Section::Education;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: SECTION.label(),
        id,
    })
}

/// GET /api/education
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Education>>> {
    let rows = EducationRepo::list_active(&state.pool).await?;
    Ok(Json(rows))
}

/// GET /api/admin/education
pub async fn list_all(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Education>>> {
    let rows = EducationRepo::list_all(&state.pool).await?;
    Ok(Json(rows))
}

/// GET /api/education/{id}
///
/// Inactive rows are hidden from the public read.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Education>> {
    let row = EducationRepo::find_by_id(&state.pool, id)
        .await?
        .filter(|row| row.is_active)
        .ok_or_else(|| not_found(id))?;
    Ok(Json(row))
}

/// POST /api/education
pub async fn create(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateEducation>,
) -> AppResult<(StatusCode, Json<Education>)> {
    validate_create(&input)?;
    let row = EducationRepo::create(&state.pool, &input).await?;
    state.content_changed(SECTION, ContentAction::Created, Some(row.id), admin.user_id);
    Ok((StatusCode::CREATED, Json(row)))
}

/// PUT /api/education/{id}
pub async fn update(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    AppJson(input): AppJson<UpdateEducation>,
) -> AppResult<Json<Education>> {
    validate_update(&input)?;
    let row = EducationRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    state.content_changed(SECTION, ContentAction::Updated, Some(id), admin.user_id);
    Ok(Json(row))
}

/// DELETE /api/education/{id}
pub async fn delete(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<SuccessResponse>> {
    if !EducationRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }
    state.content_changed(SECTION, ContentAction::Deleted, Some(id), admin.user_id);
    Ok(success())
}

/// PUT /api/education/reorder
///
/// Returns every row in the new order.
pub async fn reorder(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    AppJson(input): AppJson<ReorderRequest>,
) -> AppResult<Json<Vec<Education>>> {
    validate_reorder(&input.ids)?;
    if let Some(unknown) = EducationRepo::reorder(&state.pool, &input.ids).await? {
        return Err(not_found(unknown));
    }
    state.content_changed(SECTION, ContentAction::Reordered, None, admin.user_id);
    let rows = EducationRepo::list_all(&state.pool).await?;
    Ok(Json(rows))
}

fn validate_create(input: &CreateEducation) -> Result<(), CoreError> {
    validate_required("degree", &input.degree)?;
    check_opt(input.institution.as_deref(), |v| validate_title_len("institution", v))?;
    check_opt(input.duration.as_deref(), |v| validate_title_len("duration", v))?;
    check_opt(input.order_index.as_ref(), |v| validate_non_negative("order_index", *v))?;
    Ok(())
}

fn validate_update(input: &UpdateEducation) -> Result<(), CoreError> {
    check_opt(input.degree.as_deref(), |v| validate_required("degree", v))?;
    check_opt(input.institution.as_deref(), |v| validate_title_len("institution", v))?;
    check_opt(input.duration.as_deref(), |v| validate_title_len("duration", v))?;
    check_opt(input.order_index.as_ref(), |v| validate_non_negative("order_index", *v))?;
    Ok(())
}
