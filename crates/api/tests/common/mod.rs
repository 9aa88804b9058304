#![allow(dead_code)]

use std::path::Path;
use std::sync::Arc;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use folio_api::auth::jwt::{generate_token, JwtConfig};
use folio_api::auth::password::hash_password;
use folio_api::config::ServerConfig;
use folio_api::router::build_app_router;
use folio_api::state::AppState;
use folio_api::storage::LocalImageStore;
use folio_api::ws::WsManager;
use folio_db::models::user::{CreateUser, User};
use folio_db::repositories::UserRepo;
use folio_events::EventBus;

pub const TEST_ORIGIN: &str = "http://localhost:3000";
pub const ADMIN_EMAIL: &str = "admin@example.com";
pub const ADMIN_PASSWORD: &str = "correct-horse-battery";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config(upload_dir: &Path) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec![TEST_ORIGIN.to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: "test-secret-that-is-long-enough-for-hmac".to_string(),
            expiry_hours: 168,
        },
        cookie_secure: false,
        upload_dir: upload_dir.to_path_buf(),
        max_upload_bytes: 64 * 1024,
        admin_email: None,
        admin_password: None,
    }
}

/// Build the full application router around `config`.
///
/// Returns the event bus too so tests can subscribe to content events.
pub fn build_test_app_with(pool: PgPool, config: ServerConfig) -> (Router, Arc<EventBus>) {
    let event_bus = Arc::new(EventBus::default());
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        ws_manager: Arc::new(WsManager::new()),
        event_bus: Arc::clone(&event_bus),
        image_store: Arc::new(LocalImageStore::new(config.upload_dir.clone())),
    };
    (build_app_router(state, &config), event_bus)
}

/// Build the full application router with the production middleware stack.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config(&std::env::temp_dir().join("folio-test-uploads"));
    build_test_app_with(pool, config).0
}

// ---------------------------------------------------------------------------
// Users and tokens
// ---------------------------------------------------------------------------

/// Insert the standard admin user and return it.
pub async fn create_admin(pool: &PgPool) -> User {
    let input = CreateUser {
        email: ADMIN_EMAIL.to_string(),
        password_hash: hash_password(ADMIN_PASSWORD).expect("hashing should succeed"),
        role: "admin".to_string(),
    };
    UserRepo::create(pool, &input)
        .await
        .expect("user creation should succeed")
}

/// Insert the standard admin user and return a valid token for it.
pub async fn admin_token(pool: &PgPool) -> String {
    let user = create_admin(pool).await;
    token_for(user.id, &user.email, &user.role)
}

/// Sign a token with the test secret for arbitrary claims.
pub fn token_for(user_id: i64, email: &str, role: &str) -> String {
    let config = test_config(Path::new("."));
    generate_token(user_id, email, role, &config.jwt).expect("token generation should succeed")
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

/// Send a request, optionally with a JSON body and Bearer token.
pub async fn send(
    app: Router,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
    token: Option<&str>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None, None).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::GET, uri, None, Some(token)).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(body), None).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    send(app, Method::POST, uri, Some(body), Some(token)).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::PUT, uri, Some(body), None).await
}

pub async fn put_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    send(app, Method::PUT, uri, Some(body), Some(token)).await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None, Some(token)).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
