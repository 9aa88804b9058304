//! Handlers for the `/skills` list.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use folio_core::content::{ContentAction, Section};
use folio_core::error::CoreError;
use folio_core::ordering::validate_reorder;
use folio_core::types::DbId;
use folio_core::validation::{
    check_opt, validate_non_negative, validate_required, validate_skill_items,
};
use folio_db::models::skill::{CreateSkill, Skill, UpdateSkill};
use folio_db::models::ReorderRequest;
use folio_db::repositories::SkillRepo;

use super::{success, SuccessResponse};
use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

const SECTION: Section = Section::Skills;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: SECTION.label(),
        id,
    })
}

/// GET /api/skills
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Skill>>> {
    let rows = SkillRepo::list_active(&state.pool).await?;
    Ok(Json(rows))
}

/// GET /api/admin/skills
///
/// Every row, including inactive ones.
pub async fn list_all(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Skill>>> {
    let rows = SkillRepo::list_all(&state.pool).await?;
    Ok(Json(rows))
}

/// GET /api/skills/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Skill>> {
    let row = SkillRepo::find_by_id(&state.pool, id)
        .await?
        .filter(|row| row.is_active)
        .ok_or_else(|| not_found(id))?;
    Ok(Json(row))
}

/// POST /api/skills
pub async fn create(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateSkill>,
) -> AppResult<(StatusCode, Json<Skill>)> {
    validate_create(&input)?;
    let row = SkillRepo::create(&state.pool, &input).await?;
    state.content_changed(SECTION, ContentAction::Created, Some(row.id), admin.user_id);
    Ok((StatusCode::CREATED, Json(row)))
}

/// PUT /api/skills/{id}
pub async fn update(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    AppJson(input): AppJson<UpdateSkill>,
) -> AppResult<Json<Skill>> {
    validate_update(&input)?;
    let row = SkillRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    state.content_changed(SECTION, ContentAction::Updated, Some(id), admin.user_id);
    Ok(Json(row))
}

/// DELETE /api/skills/{id}
pub async fn delete(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<SuccessResponse>> {
    if !SkillRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }
    state.content_changed(SECTION, ContentAction::Deleted, Some(id), admin.user_id);
    Ok(success())
}

/// PUT /api/skills/reorder
///
/// Returns every row in the new order.
pub async fn reorder(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    AppJson(input): AppJson<ReorderRequest>,
) -> AppResult<Json<Vec<Skill>>> {
    validate_reorder(&input.ids)?;
    if let Some(unknown) = SkillRepo::reorder(&state.pool, &input.ids).await? {
        return Err(not_found(unknown));
    }
    state.content_changed(SECTION, ContentAction::Reordered, None, admin.user_id);
    let rows = SkillRepo::list_all(&state.pool).await?;
    Ok(Json(rows))
}

fn validate_create(input: &CreateSkill) -> Result<(), CoreError> {
    validate_required("name", &input.name)?;
    check_opt(input.items.as_deref(), validate_skill_items)?;
    check_opt(input.order_index.as_ref(), |v| validate_non_negative("order_index", *v))?;
    Ok(())
}

fn validate_update(input: &UpdateSkill) -> Result<(), CoreError> {
    check_opt(input.name.as_deref(), |v| validate_required("name", v))?;
    check_opt(input.items.as_deref(), validate_skill_items)?;
    check_opt(input.order_index.as_ref(), |v| validate_non_negative("order_index", *v))?;
    Ok(())
}
