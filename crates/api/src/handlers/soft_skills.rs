//! Handlers for the `/soft-skills` list.

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
use folio_db::models::soft_skill::{CreateSoftSkill, SoftSkill, UpdateSoftSkill};
use folio_db::models::ReorderRequest;
use folio_db::repositories::SoftSkillRepo;

use super::{success, SuccessResponse};
use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

const SECTION: Section = Section::SoftSkills;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: SECTION.label(),
        id,
    })
}

/// GET /api/soft-skills
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<SoftSkill>>> {
    let rows = SoftSkillRepo::list_active(&state.pool).await?;
    Ok(Json(rows))
}

/// GET /api/admin/soft-skills
pub async fn list_all(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<SoftSkill>>> {
    let rows = SoftSkillRepo::list_all(&state.pool).await?;
    Ok(Json(rows))
}

/// GET /api/soft-skills/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<SoftSkill>> {
    let row = SoftSkillRepo::find_by_id(&state.pool, id)
        .await?
        .filter(|row| row.is_active)
        .ok_or_else(|| not_found(id))?;
    Ok(Json(row))
}

/// POST /api/soft-skills
pub async fn create(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateSoftSkill>,
) -> AppResult<(StatusCode, Json<SoftSkill>)> {
    validate_create(&input)?;
    let row = SoftSkillRepo::create(&state.pool, &input).await?;
    state.content_changed(SECTION, ContentAction::Created, Some(row.id), admin.user_id);
    Ok((StatusCode::CREATED, Json(row)))
}

/// PUT /api/soft-skills/{id}
pub async fn update(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    AppJson(input): AppJson<UpdateSoftSkill>,
) -> AppResult<Json<SoftSkill>> {
    validate_update(&input)?;
    let row = SoftSkillRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    state.content_changed(SECTION, ContentAction::Updated, Some(id), admin.user_id);
    Ok(Json(row))
}

/// DELETE /api/soft-skills/{id}
pub async fn delete(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<SuccessResponse>> {
    if !SoftSkillRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }
    state.content_changed(SECTION, ContentAction::Deleted, Some(id), admin.user_id);
    Ok(success())
}

/// PUT /api/soft-skills/reorder
///
/// Returns every row in the new order.
pub async fn reorder(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    AppJson(input): AppJson<ReorderRequest>,
) -> AppResult<Json<Vec<SoftSkill>>> {
    validate_reorder(&input.ids)?;
    if let Some(unknown) = SoftSkillRepo::reorder(&state.pool, &input.ids).await? {
        return Err(not_found(unknown));
    }
    state.content_changed(SECTION, ContentAction::Reordered, None, admin.user_id);
    let rows = SoftSkillRepo::list_all(&state.pool).await?;
    Ok(Json(rows))
}

fn validate_create(input: &CreateSoftSkill) -> Result<(), CoreError> {
    validate_required("title", &input.title)?;
    check_opt(input.icon_class.as_deref(), |v| validate_title_len("icon_class", v))?;
    check_opt(input.order_index.as_ref(), |v| validate_non_negative("order_index", *v))?;
    Ok(())
}

fn validate_update(input: &UpdateSoftSkill) -> Result<(), CoreError> {
    check_opt(input.title.as_deref(), |v| validate_required("title", v))?;
    check_opt(input.icon_class.as_deref(), |v| validate_title_len("icon_class", v))?;
    check_opt(input.order_index.as_ref(), |v| validate_non_negative("order_index", *v))?;
    Ok(())
}
