//! Repository for the `about_section` singleton table.

use folio_core::types::SINGLETON_ID;
use sqlx::PgPool;

use crate::models::about::{AboutSection, UpsertAbout};

/// Column list for `about_section` queries.
const COLUMNS: &str = "\
    id, title, subtitle, description, phone, email, cv_url, image1_url, \
    image2_url, created_at, updated_at";

/// Provides read and upsert access to the about section.
pub struct AboutRepo;

impl AboutRepo {
    /// Fetch the about section. Returns `None` if it has never been saved.
    pub async fn get(pool: &PgPool) -> Result<Option<AboutSection>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM about_section WHERE id = $1");
        sqlx::query_as::<_, AboutSection>(&query)
            .bind(SINGLETON_ID)
            .fetch_optional(pool)
            .await
    }

    /// Insert or update the about section.
    ///
    /// The first save creates the row with defaults for omitted fields;
    /// later saves only overwrite the fields present in `dto`.
    pub async fn upsert(pool: &PgPool, dto: &UpsertAbout) -> Result<AboutSection, sqlx::Error> {
        let query = format!(
            "INSERT INTO about_section (
                 id, title, subtitle, description, phone, email, cv_url,
                 image1_url, image2_url)
             VALUES (
                 $9, COALESCE($1, ''), COALESCE($2, ''), COALESCE($3, ''),
                 COALESCE($4, ''), COALESCE($5, ''), COALESCE($6, ''),
                 COALESCE($7, ''), COALESCE($8, ''))
             ON CONFLICT (id) DO UPDATE SET
                 title = COALESCE($1, about_section.title),
                 subtitle = COALESCE($2, about_section.subtitle),
                 description = COALESCE($3, about_section.description),
                 phone = COALESCE($4, about_section.phone),
                 email = COALESCE($5, about_section.email),
                 cv_url = COALESCE($6, about_section.cv_url),
                 image1_url = COALESCE($7, about_section.image1_url),
                 image2_url = COALESCE($8, about_section.image2_url)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AboutSection>(&query)
            .bind(&dto.title)
            .bind(&dto.subtitle)
            .bind(&dto.description)
            .bind(&dto.phone)
            .bind(&dto.email)
            .bind(&dto.cv_url)
            .bind(&dto.image1_url)
            .bind(&dto.image2_url)
            .bind(SINGLETON_ID)
            .fetch_one(pool)
            .await
    }
}
