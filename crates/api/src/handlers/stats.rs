//! Handlers for the `/stats` singleton (headline stats).

use axum::extract::State;
use axum::Json;
use folio_core::content::{ContentAction, Section};
use folio_core::error::CoreError;
use folio_core::validation::{check_opt, validate_link, validate_non_negative, validate_percent};
use folio_db::models::stats::{Stats, UpsertStats};
use folio_db::repositories::StatsRepo;

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

/// GET /api/stats
pub async fn get(State(state): State<AppState>) -> AppResult<Json<Stats>> {
    let row = StatsRepo::get(&state.pool)
        .await?
        .ok_or(AppError::Core(CoreError::Missing(Section::Stats.label())))?;
    Ok(Json(row))
}

/// PUT /api/stats
///
/// Partial upsert: the first save creates the row, omitted fields keep
/// their stored value.
pub async fn upsert(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    AppJson(input): AppJson<UpsertStats>,
) -> AppResult<Json<Stats>> {
    validate(&input)?;
    let row = StatsRepo::upsert(&state.pool, &input).await?;
    state.content_changed(Section::Stats, ContentAction::Updated, None, admin.user_id);
    Ok(Json(row))
}

fn validate(input: &UpsertStats) -> Result<(), CoreError> {
    check_opt(input.months_experience.as_ref(), |v| {
        validate_non_negative("months_experience", *v)
    })?;
    check_opt(input.projects_completed.as_ref(), |v| {
        validate_non_negative("projects_completed", *v)
    })?;
    check_opt(input.professionalism_percent.as_ref(), |v| {
        validate_percent("professionalism_percent", *v)
    })?;
    check_opt(input.video_thumbnail_url.as_deref(), |v| validate_link("video_thumbnail_url", v))?;
    Ok(())
}
