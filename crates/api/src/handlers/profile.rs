//! Handlers for the `/profile` singleton (profile card).

use axum::extract::State;
use axum::Json;
use folio_core::content::{ContentAction, Section};
use folio_core::error::CoreError;
use folio_core::validation::{check_opt, validate_email, validate_link, validate_title_len};
use folio_db::models::profile::{Profile, UpsertProfile};
use folio_db::repositories::ProfileRepo;

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

/// GET /api/profile
pub async fn get(State(state): State<AppState>) -> AppResult<Json<Profile>> {
    let row = ProfileRepo::get(&state.pool)
        .await?
        .ok_or(AppError::Core(CoreError::Missing(Section::Profile.label())))?;
    Ok(Json(row))
}

/// PUT /api/profile
///
/// Partial upsert: the first save creates the row, omitted fields keep
/// their stored value.
pub async fn upsert(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    AppJson(input): AppJson<UpsertProfile>,
) -> AppResult<Json<Profile>> {
    validate(&input)?;
    let row = ProfileRepo::upsert(&state.pool, &input).await?;
    state.content_changed(Section::Profile, ContentAction::Updated, None, admin.user_id);
    Ok(Json(row))
}

fn validate(input: &UpsertProfile) -> Result<(), CoreError> {
    check_opt(input.name.as_deref(), |v| validate_title_len("name", v))?;
    check_opt(input.email.as_deref(), |v| validate_email("email", v))?;
    check_opt(input.location.as_deref(), |v| validate_title_len("location", v))?;
    check_opt(input.image_url.as_deref(), |v| validate_link("image_url", v))?;
    check_opt(input.github_url.as_deref(), |v| validate_link("github_url", v))?;
    check_opt(input.linkedin_url.as_deref(), |v| validate_link("linkedin_url", v))?;
    check_opt(input.facebook_url.as_deref(), |v| validate_link("facebook_url", v))?;
    Ok(())
}
