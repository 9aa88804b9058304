//! Handlers for the `/auth` resource (login, verify, logout).

use axum::extract::State;
use axum::http::header::SET_COOKIE;
use axum::http::HeaderName;
use axum::response::AppendHeaders;
use axum::Json;
use chrono::Utc;
use folio_core::error::CoreError;
use folio_db::models::user::UserInfo;
use folio_db::repositories::UserRepo;
use serde::{Deserialize, Serialize};

use super::{success, SuccessResponse};
use crate::auth::cookie::{clear_cookie, session_cookie};
use crate::auth::jwt::generate_token;
use crate::auth::password::verify_password;
use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Maximum consecutive failed login attempts before locking the account.
const MAX_FAILED_ATTEMPTS: i32 = 5;

/// Duration in minutes to lock an account after exceeding failed attempts.
const LOCK_DURATION_MINS: i64 = 15;

const INVALID_CREDENTIALS: &str = "Invalid email or password";

/// A JSON body together with a `Set-Cookie` header.
type WithCookie<T> = (AppendHeaders<[(HeaderName, String); 1]>, Json<T>);

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful login response.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    /// Token lifetime in seconds.
    pub expires_in: i64,
    pub user: UserInfo,
}

/// Response of `GET /auth/verify`.
#[derive(Debug, Serialize)]
pub struct VerifyResponse {
    pub success: bool,
    pub user: UserInfo,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/auth/login
///
/// Authenticate with email + password. Returns the token in the body and
/// sets it as the `auth-token` cookie.
pub async fn login(
    State(state): State<AppState>,
    AppJson(input): AppJson<LoginRequest>,
) -> AppResult<WithCookie<LoginResponse>> {
    let email = input.email.trim().to_lowercase();
    if email.is_empty() || input.password.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Email and password are required".into(),
        )));
    }

    let user = UserRepo::find_by_email(&state.pool, &email)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized(INVALID_CREDENTIALS.into())))?;

    if !user.is_active {
        return Err(AppError::Core(CoreError::Forbidden(
            "Account is deactivated".into(),
        )));
    }

    if let Some(locked_until) = user.locked_until {
        if locked_until > Utc::now() {
            return Err(AppError::Core(CoreError::Forbidden(
                "Account is temporarily locked. Try again later.".into(),
            )));
        }
    }

    let password_valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    if !password_valid {
        let failures = UserRepo::increment_failed_login(&state.pool, user.id).await?;
        if failures >= MAX_FAILED_ATTEMPTS {
            let lock_until = Utc::now() + chrono::Duration::minutes(LOCK_DURATION_MINS);
            UserRepo::lock_account(&state.pool, user.id, lock_until).await?;
            tracing::warn!(user_id = user.id, failures, "Account locked after failed logins");
        }
        return Err(AppError::Core(CoreError::Unauthorized(
            INVALID_CREDENTIALS.into(),
        )));
    }

    UserRepo::record_successful_login(&state.pool, user.id).await?;

    let jwt = &state.config.jwt;
    let token = generate_token(user.id, &user.email, &user.role, jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;
    let expires_in = jwt.expiry_secs();
    let cookie = session_cookie(&token, expires_in, state.config.cookie_secure);

    tracing::info!(user_id = user.id, "Admin logged in");

    Ok((
        AppendHeaders([(SET_COOKIE, cookie)]),
        Json(LoginResponse {
            token,
            expires_in,
            user: UserInfo::from(&user),
        }),
    ))
}

/// GET /api/auth/verify
///
/// Confirms the token and that its user still exists and is active.
pub async fn verify(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> AppResult<Json<VerifyResponse>> {
    let user = UserRepo::find_by_id(&state.pool, auth_user.user_id)
        .await?
        .filter(|u| u.is_active)
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("Invalid or expired token".into())))?;

    Ok(Json(VerifyResponse {
        success: true,
        user: UserInfo::from(&user),
    }))
}

/// POST /api/auth/logout
///
/// Expires the session cookie. Tokens are stateless, so a Bearer token stays
/// valid until it expires.
pub async fn logout(State(state): State<AppState>) -> WithCookie<SuccessResponse> {
    (
        AppendHeaders([(SET_COOKIE, clear_cookie(state.config.cookie_secure))]),
        success(),
    )
}
