//! The `auth-token` session cookie.
//!
//! Browsers carry the JWT in this cookie; API clients may send it as a
//! Bearer token instead.

use axum::http::header::COOKIE;
use axum::http::HeaderMap;

/// Name of the cookie holding the JWT.
pub const AUTH_COOKIE: &str = "auth-token";

/// `Set-Cookie` value that stores `token` for `max_age_secs`.
pub fn session_cookie(token: &str, max_age_secs: i64, secure: bool) -> String {
    let mut cookie =
        format!("{AUTH_COOKIE}={token}; HttpOnly; SameSite=Lax; Path=/; Max-Age={max_age_secs}");
    if secure {
        cookie.push_str("; Secure");
    }
    cookie
}

/// `Set-Cookie` value that expires the session cookie immediately.
pub fn clear_cookie(secure: bool) -> String {
    session_cookie("", 0, secure)
}

/// Extract the auth token from the request's `Cookie` headers, if present.
pub fn token_from_cookies(headers: &HeaderMap) -> Option<&str> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == AUTH_COOKIE)
        .map(|(_, value)| value.trim())
        .filter(|value| !value.is_empty())
}
