//! HTTP-level integration tests for the singleton sections
//! (hero, about, profile, contact, stats, settings).

mod common;

use axum::http::StatusCode;
use common::{body_json, get, put_json_auth};
use serde_json::json;
use sqlx::PgPool;

/// Every singleton endpoint returns 404 until its first save.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_before_first_save_is_404(pool: PgPool) {
    let app = common::build_test_app(pool);

    for path in ["hero", "about", "profile", "contact", "stats", "settings"] {
        let response = get(app.clone(), &format!("/api/{path}")).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "GET /api/{path}");
        let json = body_json(response).await;
        assert_eq!(json["code"], "NOT_FOUND");
    }
}

/// Write then read yields the same fields.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_hero_write_then_read(pool: PgPool) {
    let token = common::admin_token(&pool).await;
    let app = common::build_test_app(pool);

    let body = json!({
        "greeting_text": "Hi, I'm",
        "name": "Ada Lovelace",
        "description": "Analytical engines and more.",
        "cta_text": "Hire me",
        "cta_link": "/#contact",
        "hero_image_url": "https://cdn.example.com/hero.png",
        "role_title": "Engineer"
    });
    let response = put_json_auth(app.clone(), "/api/hero", body, &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let saved = body_json(response).await;
    assert_eq!(saved["id"], 1);

    let response = get(app, "/api/hero").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["name"], "Ada Lovelace");
    assert_eq!(json["cta_link"], "/#contact");
    assert_eq!(json["role_title"], "Engineer");
    assert_eq!(json["linkedin_link"], "");
}

/// Repeated saves patch the single row and keep omitted fields.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_about_partial_update_keeps_one_row(pool: PgPool) {
    let token = common::admin_token(&pool).await;
    let app = common::build_test_app(pool.clone());

    put_json_auth(
        app.clone(),
        "/api/about",
        json!({ "title": "About me", "email": "me@example.com" }),
        &token,
    )
    .await;
    let response = put_json_auth(
        app.clone(),
        "/api/about",
        json!({ "subtitle": "Developer" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(get(app, "/api/about").await).await;
    assert_eq!(json["title"], "About me");
    assert_eq!(json["email"], "me@example.com");
    assert_eq!(json["subtitle"], "Developer");

    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM about_section")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_profile_and_contact_round_trip(pool: PgPool) {
    let token = common::admin_token(&pool).await;
    let app = common::build_test_app(pool);

    let response = put_json_auth(
        app.clone(),
        "/api/profile",
        json!({ "name": "Ada", "location": "London", "github_url": "https://github.com/ada" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = put_json_auth(
        app.clone(),
        "/api/contact",
        json!({ "email": "hello@example.com", "footer_name": "Ada L." }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    assert_eq!(body_json(get(app.clone(), "/api/profile").await).await["location"], "London");
    assert_eq!(body_json(get(app, "/api/contact").await).await["footer_name"], "Ada L.");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_stats_defaults_and_bounds(pool: PgPool) {
    let token = common::admin_token(&pool).await;
    let app = common::build_test_app(pool);

    let response =
        put_json_auth(app.clone(), "/api/stats", json!({ "projects_completed": 24 }), &token)
            .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["projects_completed"], 24);
    assert_eq!(json["professionalism_percent"], 100);

    let response = put_json_auth(
        app.clone(),
        "/api/stats",
        json!({ "professionalism_percent": 101 }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response =
        put_json_auth(app, "/api/stats", json!({ "months_experience": -1 }), &token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

/// Empty analytics ids are stored as null; omitted ones are kept.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_settings_analytics_ids(pool: PgPool) {
    let token = common::admin_token(&pool).await;
    let app = common::build_test_app(pool);

    let response = put_json_auth(
        app.clone(),
        "/api/settings",
        json!({
            "meta_title": "Ada's portfolio",
            "google_analytics_id": "G-ABC1234",
            "facebook_pixel_id": "1234567890"
        }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = put_json_auth(
        app.clone(),
        "/api/settings",
        json!({ "google_analytics_id": "" }),
        &token,
    )
    .await;
    let json = body_json(response).await;
    assert!(json["google_analytics_id"].is_null());
    assert_eq!(json["facebook_pixel_id"], "1234567890");
    assert_eq!(json["meta_title"], "Ada's portfolio");

    let response = put_json_auth(
        app.clone(),
        "/api/settings",
        json!({ "google_analytics_id": "UA-123-1", "facebook_pixel_id": "1234" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["google_analytics_id"], "UA-123-1");
    assert_eq!(json["facebook_pixel_id"], "1234");

    let response = put_json_auth(
        app,
        "/api/settings",
        json!({ "google_analytics_id": "GTM-XXXX" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_invalid_link_rejected(pool: PgPool) {
    let token = common::admin_token(&pool).await;
    let app = common::build_test_app(pool);

    let response = put_json_auth(
        app.clone(),
        "/api/hero",
        json!({ "cta_link": "javascript:alert(1)" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert!(json["error"].as_str().unwrap().contains("cta_link"));

    // Nothing was written.
    assert_eq!(get(app, "/api/hero").await.status(), StatusCode::NOT_FOUND);
}
