use assert_matches::assert_matches;
use sqlx::PgPool;
use folio_db::models::user::CreateUser;
use folio_db::repositories::UserRepo;

fn new_admin(email: &str) -> CreateUser {
    CreateUser {
        email: email.to_string(),
        password_hash: "$argon2id$placeholder".to_string(),
        role: "admin".to_string(),
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_and_find(pool: PgPool) {
    let user = UserRepo::create(&pool, &new_admin("admin@example.com")).await.unwrap();
    assert!(user.is_active);
    assert_eq!(user.failed_login_count, 0);

    let by_email = UserRepo::find_by_email(&pool, "ADMIN@example.com").await.unwrap();
    assert_eq!(by_email.map(|u| u.id), Some(user.id));

    let by_id = UserRepo::find_by_id(&pool, user.id).await.unwrap();
    assert!(by_id.is_some());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_email_is_unique_violation(pool: PgPool) {
    UserRepo::create(&pool, &new_admin("dup@example.com")).await.unwrap();
    let err = UserRepo::create(&pool, &new_admin("dup@example.com"))
        .await
        .unwrap_err();
    assert_matches!(
        err,
        sqlx::Error::Database(ref db) if db.constraint() == Some("uq_users_email")
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_role_check(pool: PgPool) {
    let result = UserRepo::create(
        &pool,
        &CreateUser {
            role: "viewer".into(),
            ..new_admin("v@example.com")
        },
    )
    .await;
    assert!(result.is_err());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_failed_login_and_reset(pool: PgPool) {
    let user = UserRepo::create(&pool, &new_admin("lock@example.com")).await.unwrap();

    assert_eq!(UserRepo::increment_failed_login(&pool, user.id).await.unwrap(), 1);
    assert_eq!(UserRepo::increment_failed_login(&pool, user.id).await.unwrap(), 2);

    let until = chrono::Utc::now() + chrono::Duration::minutes(15);
    UserRepo::lock_account(&pool, user.id, until).await.unwrap();
    let locked = UserRepo::find_by_id(&pool, user.id).await.unwrap().unwrap();
    assert!(locked.locked_until.is_some());
    assert_eq!(locked.failed_login_count, 0);

    UserRepo::record_successful_login(&pool, user.id).await.unwrap();
    let reset = UserRepo::find_by_id(&pool, user.id).await.unwrap().unwrap();
    assert_eq!(reset.failed_login_count, 0);
    assert!(reset.locked_until.is_none());
    assert!(reset.last_login_at.is_some());
}
