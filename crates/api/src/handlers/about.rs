//! Handlers for the `/about` singleton (about section).

use axum::extract::State;
use axum::Json;
use folio_core::content::{ContentAction, Section};
use folio_core::error::CoreError;
use folio_core::validation::{check_opt, validate_email, validate_link, validate_title_len};
use folio_db::models::about::{AboutSection, UpsertAbout};
use folio_db::repositories::AboutRepo;

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

/// GET /api/about
pub async fn get(State(state): State<AppState>) -> AppResult<Json<AboutSection>> {
    let row = AboutRepo::get(&state.pool)
        .await?
        .ok_or(AppError::Core(CoreError::Missing(Section::About.label())))?;
    Ok(Json(row))
}

/// PUT /api/about
///
/// Partial upsert: the first save creates the row, omitted fields keep
/// their stored value.
pub async fn upsert(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    AppJson(input): AppJson<UpsertAbout>,
) -> AppResult<Json<AboutSection>> {
    validate(&input)?;
    let row = AboutRepo::upsert(&state.pool, &input).await?;
    state.content_changed(Section::About, ContentAction::Updated, None, admin.user_id);
    Ok(Json(row))
}

fn validate(input: &UpsertAbout) -> Result<(), CoreError> {
    check_opt(input.title.as_deref(), |v| validate_title_len("title", v))?;
    check_opt(input.subtitle.as_deref(), |v| validate_title_len("subtitle", v))?;
    check_opt(input.phone.as_deref(), |v| validate_title_len("phone", v))?;
    check_opt(input.email.as_deref(), |v| validate_email("email", v))?;
    check_opt(input.cv_url.as_deref(), |v| validate_link("cv_url", v))?;
    check_opt(input.image1_url.as_deref(), |v| validate_link("image1_url", v))?;
    check_opt(input.image2_url.as_deref(), |v| validate_link("image2_url", v))?;
    Ok(())
}
