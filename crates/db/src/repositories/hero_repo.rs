//! Repository for the `hero_section` singleton table.

use folio_core::types::SINGLETON_ID;
use sqlx::PgPool;

use crate::models::hero::{HeroSection, UpsertHero};

/// Column list for `hero_section` queries.
const COLUMNS: &str = "\
    id, greeting_text, name, description, cta_text, cta_link, \
    hero_image_url, portfolio_link, linkedin_link, availability_text, \
    education_text, institution, role_title, projects_count, \
    role_description, created_at, updated_at";

/// Provides read and upsert access to the hero section.
pub struct HeroRepo;

impl HeroRepo {
    /// Fetch the hero section. Returns `None` if it has never been saved.
    pub async fn get(pool: &PgPool) -> Result<Option<HeroSection>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM hero_section WHERE id = $1");
        sqlx::query_as::<_, HeroSection>(&query)
            .bind(SINGLETON_ID)
            .fetch_optional(pool)
            .await
    }

    /// Insert or update the hero section.
    ///
    /// The first save creates the row with defaults for omitted fields;
    /// later saves only overwrite the fields present in `dto`.
    pub async fn upsert(pool: &PgPool, dto: &UpsertHero) -> Result<HeroSection, sqlx::Error> {
        let query = format!(
            "INSERT INTO hero_section (
                 id, greeting_text, name, description, cta_text, cta_link,
                 hero_image_url, portfolio_link, linkedin_link, availability_text,
                 education_text, institution, role_title, projects_count,
                 role_description)
             VALUES (
                 $15, COALESCE($1, ''), COALESCE($2, ''), COALESCE($3, ''),
                 COALESCE($4, ''), COALESCE($5, ''), COALESCE($6, ''),
                 COALESCE($7, ''), COALESCE($8, ''), COALESCE($9, ''),
                 COALESCE($10, ''), COALESCE($11, ''), COALESCE($12, ''),
                 COALESCE($13, ''), COALESCE($14, ''))
             ON CONFLICT (id) DO UPDATE SET
                 greeting_text = COALESCE($1, hero_section.greeting_text),
                 name = COALESCE($2, hero_section.name),
                 description = COALESCE($3, hero_section.description),
                 cta_text = COALESCE($4, hero_section.cta_text),
                 cta_link = COALESCE($5, hero_section.cta_link),
                 hero_image_url = COALESCE($6, hero_section.hero_image_url),
                 portfolio_link = COALESCE($7, hero_section.portfolio_link),
                 linkedin_link = COALESCE($8, hero_section.linkedin_link),
                 availability_text = COALESCE($9, hero_section.availability_text),
                 education_text = COALESCE($10, hero_section.education_text),
                 institution = COALESCE($11, hero_section.institution),
                 role_title = COALESCE($12, hero_section.role_title),
                 projects_count = COALESCE($13, hero_section.projects_count),
                 role_description = COALESCE($14, hero_section.role_description)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, HeroSection>(&query)
            .bind(&dto.greeting_text)
            .bind(&dto.name)
            .bind(&dto.description)
            .bind(&dto.cta_text)
            .bind(&dto.cta_link)
            .bind(&dto.hero_image_url)
            .bind(&dto.portfolio_link)
            .bind(&dto.linkedin_link)
            .bind(&dto.availability_text)
            .bind(&dto.education_text)
            .bind(&dto.institution)
            .bind(&dto.role_title)
            .bind(&dto.projects_count)
            .bind(&dto.role_description)
            .bind(SINGLETON_ID)
            .fetch_one(pool)
            .await
    }
}
