//! Handlers for the `/experience` list.

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
use folio_db::models::experience::{CreateExperience, Experience, UpdateExperience};
use folio_db::models::ReorderRequest;
use folio_db::repositories::ExperienceRepo;

use super::{success, SuccessResponse};
use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

const SECTION: Section = Section::Experience;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: SECTION.label(),
        id,
    })
}

/// GET /api/experience
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Experience>>> {
    let rows = ExperienceRepo::list_active(&state.pool).await?;
    Ok(Json(rows))
}

/// GET /api/admin/experience
pub async fn list_all(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Experience>>> {
    let rows = ExperienceRepo::list_all(&state.pool).await?;
    Ok(Json(rows))
}

/// GET /api/experience/{id}
///
/// Inactive rows are hidden from the public read.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Experience>> {
    let row = ExperienceRepo::find_by_id(&state.pool, id)
        .await?
        .filter(|row| row.is_active)
        .ok_or_else(|| not_found(id))?;
    Ok(Json(row))
}

/// POST /api/experience
pub async fn create(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateExperience>,
) -> AppResult<(StatusCode, Json<Experience>)> {
    validate_create(&input)?;
    let row = ExperienceRepo::create(&state.pool, &input).await?;
    state.content_changed(SECTION, ContentAction::Created, Some(row.id), admin.user_id);
    Ok((StatusCode::CREATED, Json(row)))
}

/// PUT /api/experience/{id}
pub async fn update(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    AppJson(input): AppJson<UpdateExperience>,
) -> AppResult<Json<Experience>> {
    validate_update(&input)?;
    let row = ExperienceRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    state.content_changed(SECTION, ContentAction::Updated, Some(id), admin.user_id);
    Ok(Json(row))
}

/// DELETE /api/experience/{id}
pub async fn delete(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<SuccessResponse>> {
    if !ExperienceRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }
    state.content_changed(SECTION, ContentAction::Deleted, Some(id), admin.user_id);
    Ok(success())
}

/// PUT /api/experience/reorder
pub async fn reorder(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    AppJson(input): AppJson<ReorderRequest>,
) -> AppResult<Json<Vec<Experience>>> {
    validate_reorder(&input.ids)?;
    if let Some(unknown) = ExperienceRepo::reorder(&state.pool, &input.ids).await? {
        return Err(not_found(unknown));
    }
    state.content_changed(SECTION, ContentAction::Reordered, None, admin.user_id);
    let rows = ExperienceRepo::list_all(&state.pool).await?;
    Ok(Json(rows))
}

fn validate_create(input: &CreateExperience) -> Result<(), CoreError> {
    validate_required("role", &input.role)?;
    check_opt(input.company.as_deref(), |v| validate_title_len("company", v))?;
    check_opt(input.duration.as_deref(), |v| validate_title_len("duration", v))?;
    check_opt(input.order_index.as_ref(), |v| validate_non_negative("order_index", *v))?;
    Ok(())
}

fn validate_update(input: &UpdateExperience) -> Result<(), CoreError> {
    check_opt(input.role.as_deref(), |v| validate_required("role", v))?;
    check_opt(input.company.as_deref(), |v| validate_title_len("company", v))?;
    check_opt(input.duration.as_deref(), |v| validate_title_len("duration", v))?;
    check_opt(input.order_index.as_ref(), |v| validate_non_negative("order_index", *v))?;
    Ok(())
}
