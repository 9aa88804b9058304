//! Admin gate for content writes.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use folio_core::error::CoreError;
use folio_core::roles::is_admin;

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// An authenticated caller holding the `admin` role.
///
/// Missing or bad credentials reject with 401 (via [`AuthUser`]); any other
/// role rejects with 403.
pub struct RequireAdmin(pub AuthUser);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, AppError> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        if !is_admin(&user.role) {
            tracing::warn!(user_id = user.user_id, role = %user.role, "Non-admin write rejected");
            return Err(CoreError::Forbidden("Admin role required".into()).into());
        }
        Ok(Self(user))
    }
}
