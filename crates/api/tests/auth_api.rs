//! HTTP-level integration tests for login, verify, logout, RBAC
//! enforcement, and account lockout.

mod common;

use axum::body::Body;
use axum::http::header::{COOKIE, SET_COOKIE};
use axum::http::{Request, StatusCode};
use common::{
    body_json, get, get_auth, post_json, put_json, put_json_auth, ADMIN_EMAIL, ADMIN_PASSWORD,
};
use serde_json::json;
use sqlx::PgPool;
use tower::ServiceExt;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn login(app: axum::Router, email: &str, password: &str) -> axum::response::Response {
    post_json(app, "/api/auth/login", json!({ "email": email, "password": password })).await
}

// ---------------------------------------------------------------------------
// Login
// ---------------------------------------------------------------------------

/// Successful login returns the token, its lifetime, the user, and a cookie.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_login_success(pool: PgPool) {
    let user = common::create_admin(&pool).await;
    let app = common::build_test_app(pool);

    let response = login(app, ADMIN_EMAIL, ADMIN_PASSWORD).await;
    assert_eq!(response.status(), StatusCode::OK);

    let cookie = response
        .headers()
        .get(SET_COOKIE)
        .expect("login must set the auth cookie")
        .to_str()
        .unwrap()
        .to_string();
    assert!(cookie.starts_with("auth-token="));
    assert!(cookie.contains("HttpOnly"));
    assert!(cookie.contains("SameSite=Lax"));
    assert!(cookie.contains("Max-Age=604800"));
    assert!(!cookie.contains("Secure"));

    let json = body_json(response).await;
    assert!(json["token"].is_string());
    assert_eq!(json["expires_in"], 604_800);
    assert_eq!(json["user"]["id"], user.id);
    assert_eq!(json["user"]["email"], ADMIN_EMAIL);
    assert_eq!(json["user"]["role"], "admin");
    assert!(json["user"].get("password_hash").is_none());
}

/// Email matching ignores case and surrounding whitespace.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_login_email_is_case_insensitive(pool: PgPool) {
    common::create_admin(&pool).await;
    let app = common::build_test_app(pool);

    let response = login(app, "  ADMIN@Example.com ", ADMIN_PASSWORD).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_login_wrong_password(pool: PgPool) {
    common::create_admin(&pool).await;
    let app = common::build_test_app(pool);

    let response = login(app, ADMIN_EMAIL, "incorrect_password").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["code"], "UNAUTHORIZED");
    assert_eq!(json["error"], "Invalid email or password");
}

/// Unknown email gets the same answer as a wrong password.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_login_unknown_email(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = login(app, "ghost@example.com", "whatever-password").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Invalid email or password");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_login_missing_fields(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = login(app, "", "").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_login_inactive_user(pool: PgPool) {
    let user = common::create_admin(&pool).await;
    sqlx::query("UPDATE users SET is_active = false WHERE id = $1")
        .bind(user.id)
        .execute(&pool)
        .await
        .unwrap();
    let app = common::build_test_app(pool);

    let response = login(app, ADMIN_EMAIL, ADMIN_PASSWORD).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

/// Five failed attempts lock the account, even for the right password.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_account_lockout(pool: PgPool) {
    common::create_admin(&pool).await;
    let app = common::build_test_app(pool);

    for _ in 0..5 {
        let response = login(app.clone(), ADMIN_EMAIL, "wrong-password").await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    let response = login(app, ADMIN_EMAIL, ADMIN_PASSWORD).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let json = body_json(response).await;
    assert!(json["error"].as_str().unwrap().contains("locked"));
}

/// Once a lock expires the account gets a full set of attempts again.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_expired_lock_allows_fresh_attempts(pool: PgPool) {
    let user = common::create_admin(&pool).await;
    let app = common::build_test_app(pool.clone());

    for _ in 0..5 {
        login(app.clone(), ADMIN_EMAIL, "wrong-password").await;
    }
    sqlx::query("UPDATE users SET locked_until = NOW() - INTERVAL '1 minute' WHERE id = $1")
        .bind(user.id)
        .execute(&pool)
        .await
        .unwrap();

    let response = login(app.clone(), ADMIN_EMAIL, "wrong-password").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = login(app, ADMIN_EMAIL, ADMIN_PASSWORD).await;
    assert_eq!(response.status(), StatusCode::OK);
}

/// A successful login resets the failure counter.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_success_resets_failures(pool: PgPool) {
    let user = common::create_admin(&pool).await;
    let app = common::build_test_app(pool.clone());

    for _ in 0..3 {
        login(app.clone(), ADMIN_EMAIL, "wrong-password").await;
    }
    let response = login(app, ADMIN_EMAIL, ADMIN_PASSWORD).await;
    assert_eq!(response.status(), StatusCode::OK);

    let (count,): (i32,) = sqlx::query_as("SELECT failed_login_count FROM users WHERE id = $1")
        .bind(user.id)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

// ---------------------------------------------------------------------------
// Verify / logout
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_verify_with_bearer(pool: PgPool) {
    let token = common::admin_token(&pool).await;
    let app = common::build_test_app(pool);

    let response = get_auth(app, "/api/auth/verify", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["user"]["email"], ADMIN_EMAIL);
}

/// The cookie set by login authenticates later requests.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_verify_with_cookie(pool: PgPool) {
    common::create_admin(&pool).await;
    let app = common::build_test_app(pool);

    let response = login(app.clone(), ADMIN_EMAIL, ADMIN_PASSWORD).await;
    let set_cookie = response.headers()[SET_COOKIE].to_str().unwrap().to_string();
    let pair = set_cookie.split(';').next().unwrap().to_string();

    let request = Request::builder()
        .uri("/api/auth/verify")
        .header(COOKIE, format!("theme=dark; {pair}"))
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_verify_without_token(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get(app, "/api/auth/verify").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Authentication required");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_verify_with_garbage_token(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get_auth(app, "/api/auth/verify", "not-a-real-token").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Invalid or expired token");
}

/// A token for a user that no longer exists is rejected by verify.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_verify_deleted_user(pool: PgPool) {
    let token = common::token_for(9_999, "gone@example.com", "admin");
    let app = common::build_test_app(pool);

    let response = get_auth(app, "/api/auth/verify", &token).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_logout_clears_cookie(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post_json(app, "/api/auth/logout", json!({})).await;
    assert_eq!(response.status(), StatusCode::OK);
    let cookie = response.headers()[SET_COOKIE].to_str().unwrap().to_string();
    assert!(cookie.starts_with("auth-token=;"));
    assert!(cookie.contains("Max-Age=0"));
    assert_eq!(body_json(response).await["success"], true);
}

// ---------------------------------------------------------------------------
// RBAC
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_write_without_auth_is_401(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = put_json(app, "/api/hero", json!({ "name": "Mallory" })).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_write_with_non_admin_role_is_403(pool: PgPool) {
    let token = common::token_for(1, "viewer@example.com", "viewer");
    let app = common::build_test_app(pool);

    let response = put_json_auth(app, "/api/hero", json!({ "name": "Eve" }), &token).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_malformed_authorization_header(pool: PgPool) {
    let app = common::build_test_app(pool);

    let request = Request::builder()
        .method("PUT")
        .uri("/api/hero")
        .header("authorization", "Basic YWRtaW46YWRtaW4=")
        .header("content-type", "application/json")
        .body(Body::from(r#"{"name":"x"}"#))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
