//! Repository for the `site_settings` singleton table.

use folio_core::types::SINGLETON_ID;
use sqlx::PgPool;

use crate::models::settings::{SiteSettings, UpsertSettings};

const COLUMNS: &str = "\
    id, meta_title, meta_description, og_image_url, favicon_url, logo_url, \
    google_analytics_id, facebook_pixel_id, created_at, updated_at";

pub struct SettingsRepo;

impl SettingsRepo {
    /// Fetch the site settings. Returns `None` if they have never been saved.
    pub async fn get(pool: &PgPool) -> Result<Option<SiteSettings>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM site_settings WHERE id = $1");
        sqlx::query_as::<_, SiteSettings>(&query)
            .bind(SINGLETON_ID)
            .fetch_optional(pool)
            .await
    }

    /// Insert or update the site settings.
    ///
    /// Text fields follow the usual `COALESCE` rule. The analytics ids are
    /// nullable: `None` keeps the stored value, `Some("")` stores `NULL`.
    pub async fn upsert(pool: &PgPool, dto: &UpsertSettings) -> Result<SiteSettings, sqlx::Error> {
        let query = format!(
            "INSERT INTO site_settings (
                 id, meta_title, meta_description, og_image_url, favicon_url, logo_url,
                 google_analytics_id, facebook_pixel_id)
             VALUES (
                 $8, COALESCE($1, ''), COALESCE($2, ''), COALESCE($3, ''),
                 COALESCE($4, ''), COALESCE($5, ''), NULLIF($6, ''), NULLIF($7, ''))
             ON CONFLICT (id) DO UPDATE SET
                 meta_title = COALESCE($1, site_settings.meta_title),
                 meta_description = COALESCE($2, site_settings.meta_description),
                 og_image_url = COALESCE($3, site_settings.og_image_url),
                 favicon_url = COALESCE($4, site_settings.favicon_url),
                 logo_url = COALESCE($5, site_settings.logo_url),
                 google_analytics_id = CASE WHEN $6::TEXT IS NULL
                     THEN site_settings.google_analytics_id ELSE NULLIF($6, '') END,
                 facebook_pixel_id = CASE WHEN $7::TEXT IS NULL
                     THEN site_settings.facebook_pixel_id ELSE NULLIF($7, '') END
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SiteSettings>(&query)
            .bind(&dto.meta_title)
            .bind(&dto.meta_description)
            .bind(&dto.og_image_url)
            .bind(&dto.favicon_url)
            .bind(&dto.logo_url)
            .bind(&dto.google_analytics_id)
            .bind(&dto.facebook_pixel_id)
            .bind(SINGLETON_ID)
            .fetch_one(pool)
            .await
    }
}
