mod common;

use axum::body::Body;
use axum::http::header::{
    ACCESS_CONTROL_ALLOW_ORIGIN, ACCESS_CONTROL_REQUEST_METHOD, ORIGIN,
};
use axum::http::{Method, Request, StatusCode};
use common::{body_json, get, TEST_ORIGIN};
use sqlx::PgPool;
use tower::ServiceExt;

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_health_reports_ok(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get(app, "/health").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key("x-request-id"));

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["db_healthy"], true);
    assert!(json["version"].is_string());
    assert_eq!(json["listeners"], 0);
}

/// A caller-supplied request id is echoed back.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_request_id_is_propagated(pool: PgPool) {
    let app = common::build_test_app(pool);

    let request = Request::builder()
        .uri("/health")
        .header("x-request-id", "abc-123")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.headers()["x-request-id"], "abc-123");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_cors_preflight_for_allowed_origin(pool: PgPool) {
    let app = common::build_test_app(pool);

    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/hero")
        .header(ORIGIN, TEST_ORIGIN)
        .header(ACCESS_CONTROL_REQUEST_METHOD, "PUT")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[ACCESS_CONTROL_ALLOW_ORIGIN], TEST_ORIGIN);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_cors_ignores_unknown_origin(pool: PgPool) {
    let app = common::build_test_app(pool);

    let request = Request::builder()
        .uri("/api/content")
        .header(ORIGIN, "https://evil.example")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert!(!response.headers().contains_key(ACCESS_CONTROL_ALLOW_ORIGIN));
}
