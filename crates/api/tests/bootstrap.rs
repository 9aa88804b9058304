mod common;

use assert_matches::assert_matches;
use folio_api::auth::password::verify_password;
use folio_api::bootstrap::{ensure_admin_user, AdminBootstrap};
use folio_db::repositories::UserRepo;
use sqlx::PgPool;

fn config_with(email: Option<&str>, password: Option<&str>) -> folio_api::config::ServerConfig {
    let mut config = common::test_config(std::path::Path::new("."));
    config.admin_email = email.map(str::to_string);
    config.admin_password = password.map(str::to_string);
    config
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_creates_admin_once(pool: PgPool) {
    let config = config_with(Some("Owner@Example.com"), Some("a-long-enough-password"));

    let outcome = ensure_admin_user(&pool, &config).await.unwrap();
    assert_eq!(outcome, AdminBootstrap::Created);

    let user = UserRepo::find_by_email(&pool, "owner@example.com")
        .await
        .unwrap()
        .expect("admin should exist");
    assert_eq!(user.email, "owner@example.com");
    assert_eq!(user.role, "admin");
    assert!(verify_password("a-long-enough-password", &user.password_hash).unwrap());

    let outcome = ensure_admin_user(&pool, &config).await.unwrap();
    assert_eq!(outcome, AdminBootstrap::AlreadyExists);
}

/// A second start with a different password leaves the stored hash alone.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_existing_admin_is_not_modified(pool: PgPool) {
    let first = config_with(Some("owner@example.com"), Some("a-long-enough-password"));
    ensure_admin_user(&pool, &first).await.unwrap();

    let second = config_with(Some("owner@example.com"), Some("another-long-password"));
    assert_matches!(
        ensure_admin_user(&pool, &second).await,
        Ok(AdminBootstrap::AlreadyExists)
    );

    let user = UserRepo::find_by_email(&pool, "owner@example.com")
        .await
        .unwrap()
        .unwrap();
    assert!(verify_password("a-long-enough-password", &user.password_hash).unwrap());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_skips_when_unconfigured_or_weak(pool: PgPool) {
    let outcome = ensure_admin_user(&pool, &config_with(None, None)).await.unwrap();
    assert_eq!(outcome, AdminBootstrap::NotConfigured);

    let outcome = ensure_admin_user(&pool, &config_with(Some("a@example.com"), None))
        .await
        .unwrap();
    assert_eq!(outcome, AdminBootstrap::NotConfigured);

    let outcome = ensure_admin_user(&pool, &config_with(Some("a@example.com"), Some("short")))
        .await
        .unwrap();
    assert_eq!(outcome, AdminBootstrap::WeakPassword);

    assert!(UserRepo::find_by_email(&pool, "a@example.com")
        .await
        .unwrap()
        .is_none());
}
