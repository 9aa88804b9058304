//! Handlers for the `/hero` singleton (hero section).

use axum::extract::State;
use axum::Json;
use folio_core::content::{ContentAction, Section};
use folio_core::error::CoreError;
use folio_core::validation::{check_opt, validate_link, validate_title_len};
use folio_db::models::hero::{HeroSection, UpsertHero};
use folio_db::repositories::HeroRepo;

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

/// GET /api/hero
pub async fn get(State(state): State<AppState>) -> AppResult<Json<HeroSection>> {
    let row = HeroRepo::get(&state.pool)
        .await?
        .ok_or(AppError::Core(CoreError::Missing(Section::Hero.label())))?;
    Ok(Json(row))
}

/// PUT /api/hero
///
/// Partial upsert: the first save creates the row, omitted fields keep
/// their stored value.
pub async fn upsert(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    AppJson(input): AppJson<UpsertHero>,
) -> AppResult<Json<HeroSection>> {
    validate(&input)?;
    let row = HeroRepo::upsert(&state.pool, &input).await?;
    state.content_changed(Section::Hero, ContentAction::Updated, None, admin.user_id);
    Ok(Json(row))
}

fn validate(input: &UpsertHero) -> Result<(), CoreError> {
    check_opt(input.greeting_text.as_deref(), |v| validate_title_len("greeting_text", v))?;
    check_opt(input.name.as_deref(), |v| validate_title_len("name", v))?;
    check_opt(input.cta_text.as_deref(), |v| validate_title_len("cta_text", v))?;
    check_opt(input.cta_link.as_deref(), |v| validate_link("cta_link", v))?;
    check_opt(input.hero_image_url.as_deref(), |v| validate_link("hero_image_url", v))?;
    check_opt(input.portfolio_link.as_deref(), |v| validate_link("portfolio_link", v))?;
    check_opt(input.linkedin_link.as_deref(), |v| validate_link("linkedin_link", v))?;
    check_opt(input.availability_text.as_deref(), |v| validate_title_len("availability_text", v))?;
    check_opt(input.education_text.as_deref(), |v| validate_title_len("education_text", v))?;
    check_opt(input.institution.as_deref(), |v| validate_title_len("institution", v))?;
    check_opt(input.role_title.as_deref(), |v| validate_title_len("role_title", v))?;
    check_opt(input.projects_count.as_deref(), |v| validate_title_len("projects_count", v))?;
    Ok(())
}
