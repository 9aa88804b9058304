//! Handlers for the `/contact` singleton (contact info).

use axum::extract::State;
use axum::Json;
use folio_core::content::{ContentAction, Section};
use folio_core::error::CoreError;
use folio_core::validation::{check_opt, validate_email, validate_link, validate_title_len};
use folio_db::models::contact::{ContactInfo, UpsertContact};
use folio_db::repositories::ContactRepo;

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

/// GET /api/contact
pub async fn get(State(state): State<AppState>) -> AppResult<Json<ContactInfo>> {
    let row = ContactRepo::get(&state.pool)
        .await?
        .ok_or(AppError::Core(CoreError::Missing(Section::Contact.label())))?;
    Ok(Json(row))
}

/// PUT /api/contact
///
/// Partial upsert: the first save creates the row, omitted fields keep
/// their stored value.
pub async fn upsert(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    AppJson(input): AppJson<UpsertContact>,
) -> AppResult<Json<ContactInfo>> {
    validate(&input)?;
    let row = ContactRepo::upsert(&state.pool, &input).await?;
    state.content_changed(Section::Contact, ContentAction::Updated, None, admin.user_id);
    Ok(Json(row))
}

fn validate(input: &UpsertContact) -> Result<(), CoreError> {
    check_opt(input.email.as_deref(), |v| validate_email("email", v))?;
    check_opt(input.linkedin_url.as_deref(), |v| validate_link("linkedin_url", v))?;
    check_opt(input.address_1.as_deref(), |v| validate_title_len("address_1", v))?;
    check_opt(input.address_2.as_deref(), |v| validate_title_len("address_2", v))?;
    check_opt(input.footer_name.as_deref(), |v| validate_title_len("footer_name", v))?;
    check_opt(input.copyright_text.as_deref(), |v| validate_title_len("copyright_text", v))?;
    Ok(())
}
