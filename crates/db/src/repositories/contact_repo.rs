//! Repository for the `contact_info` singleton table.

use folio_core::types::SINGLETON_ID;
use sqlx::PgPool;

use crate::models::contact::{ContactInfo, UpsertContact};

/// Column list for `contact_info` queries.
const COLUMNS: &str = "\
    id, email, linkedin_url, address_1, address_2, footer_name, \
    copyright_text, created_at, updated_at";

/// Provides read and upsert access to the contact info.
pub struct ContactRepo;

impl ContactRepo {
    /// Fetch the contact info. Returns `None` if it has never been saved.
    pub async fn get(pool: &PgPool) -> Result<Option<ContactInfo>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM contact_info WHERE id = $1");
        sqlx::query_as::<_, ContactInfo>(&query)
            .bind(SINGLETON_ID)
            .fetch_optional(pool)
            .await
    }

    /// Insert or update the contact info.
    ///
    /// The first save creates the row with defaults for omitted fields;
    /// later saves only overwrite the fields present in `dto`.
    pub async fn upsert(pool: &PgPool, dto: &UpsertContact) -> Result<ContactInfo, sqlx::Error> {
        let query = format!(
            "INSERT INTO contact_info (
                 id, email, linkedin_url, address_1, address_2, footer_name,
                 copyright_text)
             VALUES (
                 $7, COALESCE($1, ''), COALESCE($2, ''), COALESCE($3, ''),
                 COALESCE($4, ''), COALESCE($5, ''), COALESCE($6, ''))
             ON CONFLICT (id) DO UPDATE SET
                 email = COALESCE($1, contact_info.email),
                 linkedin_url = COALESCE($2, contact_info.linkedin_url),
                 address_1 = COALESCE($3, contact_info.address_1),
                 address_2 = COALESCE($4, contact_info.address_2),
                 footer_name = COALESCE($5, contact_info.footer_name),
                 copyright_text = COALESCE($6, contact_info.copyright_text)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ContactInfo>(&query)
            .bind(&dto.email)
            .bind(&dto.linkedin_url)
            .bind(&dto.address_1)
            .bind(&dto.address_2)
            .bind(&dto.footer_name)
            .bind(&dto.copyright_text)
            .bind(SINGLETON_ID)
            .fetch_one(pool)
            .await
    }
}
