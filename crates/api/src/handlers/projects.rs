//! Handlers for the `/projects` list.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use folio_core::content::{ContentAction, Section};
use folio_core::error::CoreError;
use folio_core::ordering::validate_reorder;
use folio_core::types::DbId;
use folio_core::validation::{
    check_opt, validate_link, validate_non_negative, validate_required, validate_title_len,
};
use folio_db::models::project::{CreateProject, Project, UpdateProject};
use folio_db::models::ReorderRequest;
use folio_db::repositories::ProjectRepo;
use serde::Deserialize;

use super::{success, SuccessResponse};
use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

const SECTION: Section = Section::Projects;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: SECTION.label(),
        id,
    })
}

/// Query parameters for `GET /api/projects`.
#[derive(Debug, Default, Deserialize)]
pub struct ProjectListParams {
    /// Restrict to featured projects.
    pub featured: Option<bool>,
}

/// GET /api/projects
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ProjectListParams>,
) -> AppResult<Json<Vec<Project>>> {
    let rows = if params.featured.unwrap_or(false) {
        ProjectRepo::list_featured(&state.pool).await?
    } else {
        ProjectRepo::list_active(&state.pool).await?
    };
    Ok(Json(rows))
}

/// GET /api/admin/projects
///
/// Every row, including inactive ones.
pub async fn list_all(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Project>>> {
    let rows = ProjectRepo::list_all(&state.pool).await?;
    Ok(Json(rows))
}

/// GET /api/projects/{id}
///
/// Inactive rows are hidden from the public read.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Project>> {
    let row = ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .filter(|row| row.is_active)
        .ok_or_else(|| not_found(id))?;
    Ok(Json(row))
}

/// POST /api/projects
pub async fn create(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateProject>,
) -> AppResult<(StatusCode, Json<Project>)> {
    validate_create(&input)?;
    let row = ProjectRepo::create(&state.pool, &input).await?;
    state.content_changed(SECTION, ContentAction::Created, Some(row.id), admin.user_id);
    Ok((StatusCode::CREATED, Json(row)))
}

/// PUT /api/projects/{id}
pub async fn update(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    AppJson(input): AppJson<UpdateProject>,
) -> AppResult<Json<Project>> {
    validate_update(&input)?;
    let row = ProjectRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    state.content_changed(SECTION, ContentAction::Updated, Some(id), admin.user_id);
    Ok(Json(row))
}

/// DELETE /api/projects/{id}
pub async fn delete(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<SuccessResponse>> {
    if !ProjectRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }
    state.content_changed(SECTION, ContentAction::Deleted, Some(id), admin.user_id);
    Ok(success())
}

/// PUT /api/projects/reorder
///
/// Returns every row in the new order.
pub async fn reorder(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    AppJson(input): AppJson<ReorderRequest>,
) -> AppResult<Json<Vec<Project>>> {
    validate_reorder(&input.ids)?;
    if let Some(unknown) = ProjectRepo::reorder(&state.pool, &input.ids).await? {
        return Err(not_found(unknown));
    }
    state.content_changed(SECTION, ContentAction::Reordered, None, admin.user_id);
    let rows = ProjectRepo::list_all(&state.pool).await?;
    Ok(Json(rows))
}

fn validate_create(input: &CreateProject) -> Result<(), CoreError> {
    validate_required("title", &input.title)?;
    check_opt(input.category.as_deref(), |v| validate_title_len("category", v))?;
    check_opt(input.image_url.as_deref(), |v| validate_link("image_url", v))?;
    check_opt(input.live_url.as_deref(), |v| validate_link("live_url", v))?;
    check_opt(input.github_url.as_deref(), |v| validate_link("github_url", v))?;
    check_opt(input.order_index.as_ref(), |v| validate_non_negative("order_index", *v))?;
    Ok(())
}

fn validate_update(input: &UpdateProject) -> Result<(), CoreError> {
    check_opt(input.title.as_deref(), |v| validate_required("title", v))?;
    check_opt(input.category.as_deref(), |v| validate_title_len("category", v))?;
    check_opt(input.image_url.as_deref(), |v| validate_link("image_url", v))?;
    check_opt(input.live_url.as_deref(), |v| validate_link("live_url", v))?;
    check_opt(input.github_url.as_deref(), |v| validate_link("github_url", v))?;
    check_opt(input.order_index.as_ref(), |v| validate_non_negative("order_index", *v))?;
    Ok(())
}
