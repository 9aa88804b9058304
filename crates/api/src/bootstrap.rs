//! Startup tasks that seed the database.

use folio_core::roles::ROLE_ADMIN;
use folio_db::models::user::CreateUser;
use folio_db::repositories::UserRepo;
use folio_db::DbPool;

use crate::auth::password::{hash_password, validate_password_strength, MIN_PASSWORD_LENGTH};
use crate::config::ServerConfig;
use crate::error::{AppError, AppResult};

/// What [`ensure_admin_user`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminBootstrap {
    /// `ADMIN_EMAIL` / `ADMIN_PASSWORD` were not both set.
    NotConfigured,
    /// The configured password is too short.
    WeakPassword,
    AlreadyExists,
    Created,
}

/// Create the configured admin account if it does not exist yet.
///
/// An existing account is never modified, so changing `ADMIN_PASSWORD`
/// after the first start has no effect.
pub async fn ensure_admin_user(pool: &DbPool, config: &ServerConfig) -> AppResult<AdminBootstrap> {
    let (Some(email), Some(password)) = (&config.admin_email, &config.admin_password) else {
        return Ok(AdminBootstrap::NotConfigured);
    };
    let email = email.trim().to_lowercase();

    if let Err(msg) = validate_password_strength(password, MIN_PASSWORD_LENGTH) {
        tracing::warn!(%email, reason = %msg, "Skipping admin bootstrap");
        return Ok(AdminBootstrap::WeakPassword);
    }

    if UserRepo::find_by_email(pool, &email).await?.is_some() {
        tracing::debug!(%email, "Admin user already exists");
        return Ok(AdminBootstrap::AlreadyExists);
    }

    let password_hash = hash_password(password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;
    let user = UserRepo::create(
        pool,
        &CreateUser {
            email: email.clone(),
            password_hash,
            role: ROLE_ADMIN.to_string(),
        },
    )
    .await?;

    tracing::info!(user_id = user.id, %email, "Created admin user");
    Ok(AdminBootstrap::Created)
}
