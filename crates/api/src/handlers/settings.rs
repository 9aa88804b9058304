//! Handlers for the `/settings` singleton (site settings).

use axum::extract::State;
use axum::Json;
use folio_core::content::{ContentAction, Section};
use folio_core::error::CoreError;
use folio_core::validation::{
    check_opt, validate_analytics_id, validate_link, validate_pixel_id, validate_title_len,
};
use folio_db::models::settings::{SiteSettings, UpsertSettings};
use folio_db::repositories::SettingsRepo;

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

/// GET /api/settings
pub async fn get(State(state): State<AppState>) -> AppResult<Json<SiteSettings>> {
    let row = SettingsRepo::get(&state.pool)
        .await?
        .ok_or(AppError::Core(CoreError::Missing(Section::Settings.label())))?;
    Ok(Json(row))
}

/// PUT /api/settings
///
/// Partial upsert: the first save creates the row, omitted fields keep
/// their stored value.
pub async fn upsert(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    AppJson(input): AppJson<UpsertSettings>,
) -> AppResult<Json<SiteSettings>> {
    validate(&input)?;
    let row = SettingsRepo::upsert(&state.pool, &input).await?;
    state.content_changed(Section::Settings, ContentAction::Updated, None, admin.user_id);
    Ok(Json(row))
}

fn validate(input: &UpsertSettings) -> Result<(), CoreError> {
    check_opt(input.meta_title.as_deref(), |v| validate_title_len("meta_title", v))?;
    check_opt(input.og_image_url.as_deref(), |v| validate_link("og_image_url", v))?;
    check_opt(input.favicon_url.as_deref(), |v| validate_link("favicon_url", v))?;
    check_opt(input.logo_url.as_deref(), |v| validate_link("logo_url", v))?;
    check_opt(input.google_analytics_id.as_deref(), validate_analytics_id)?;
    check_opt(input.facebook_pixel_id.as_deref(), validate_pixel_id)?;
    Ok(())
}
