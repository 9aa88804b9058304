//! Repository for the `profile` singleton table.

use folio_core::types::SINGLETON_ID;
use sqlx::PgPool;

use crate::models::profile::{Profile, UpsertProfile};

/// Column list for `profile` queries.
const COLUMNS: &str = "\
    id, name, email, location, bio, image_url, github_url, linkedin_url, \
    facebook_url, created_at, updated_at";

/// Provides read and upsert access to the profile.
pub struct ProfileRepo;

impl ProfileRepo {
    /// Fetch the profile. Returns `None` if it has never been saved.
    pub async fn get(pool: &PgPool) -> Result<Option<Profile>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM profile WHERE id = $1");
        sqlx::query_as::<_, Profile>(&query)
            .bind(SINGLETON_ID)
            .fetch_optional(pool)
            .await
    }

    /// Insert or update the profile.
    ///
    /// The first save creates the row with defaults for omitted fields;
    /// later saves only overwrite the fields present in `dto`.
    pub async fn upsert(pool: &PgPool, dto: &UpsertProfile) -> Result<Profile, sqlx::Error> {
        let query = format!(
            "INSERT INTO profile (
                 id, name, email, location, bio, image_url, github_url,
                 linkedin_url, facebook_url)
             VALUES (
                 $9, COALESCE($1, ''), COALESCE($2, ''), COALESCE($3, ''),
                 COALESCE($4, ''), COALESCE($5, ''), COALESCE($6, ''),
                 COALESCE($7, ''), COALESCE($8, ''))
             ON CONFLICT (id) DO UPDATE SET
                 name = COALESCE($1, profile.name),
                 email = COALESCE($2, profile.email),
                 location = COALESCE($3, profile.location),
                 bio = COALESCE($4, profile.bio),
                 image_url = COALESCE($5, profile.image_url),
                 github_url = COALESCE($6, profile.github_url),
                 linkedin_url = COALESCE($7, profile.linkedin_url),
                 facebook_url = COALESCE($8, profile.facebook_url)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Profile>(&query)
            .bind(&dto.name)
            .bind(&dto.email)
            .bind(&dto.location)
            .bind(&dto.bio)
            .bind(&dto.image_url)
            .bind(&dto.github_url)
            .bind(&dto.linkedin_url)
            .bind(&dto.facebook_url)
            .bind(SINGLETON_ID)
            .fetch_one(pool)
            .await
    }
}
