//! Field-level validation rules for content writes.
//!
//! Every function returns `Ok(())` for acceptable input or a
//! [`CoreError::Validation`] naming the offending field.

use std::sync::LazyLock;

use regex::Regex;
use validator::{ValidateEmail, ValidateUrl};

use crate::error::CoreError;

/// Maximum length of a title-like field.
pub const MAX_TITLE_LEN: usize = 200;

/// Maximum number of entries in a skill category.
pub const MAX_SKILL_ITEMS: usize = 50;

static ANALYTICS_ID_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(G-[A-Z0-9]{4,16}|UA-\d+-\d+)$").expect("valid regex")
});

static PIXEL_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+$").expect("valid regex"));

/// Require a non-blank value no longer than [`MAX_TITLE_LEN`].
pub fn validate_required(field: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} must not be empty")));
    }
    validate_title_len(field, value)
}

/// Reject values longer than [`MAX_TITLE_LEN`] characters.
pub fn validate_title_len(field: &str, value: &str) -> Result<(), CoreError> {
    if value.chars().count() > MAX_TITLE_LEN {
        return Err(CoreError::Validation(format!(
            "{field} must be at most {MAX_TITLE_LEN} characters"
        )));
    }
    Ok(())
}

/// Accept `""`, an absolute http(s) URL, or a site-relative path.
pub fn validate_link(field: &str, value: &str) -> Result<(), CoreError> {
    if value.is_empty() {
        return Ok(());
    }
    if value.starts_with('/') && !value.starts_with("//") {
        return Ok(());
    }
    let is_http = value.starts_with("http://") || value.starts_with("https://");
    if is_http && value.validate_url() {
        return Ok(());
    }
    Err(CoreError::Validation(format!(
        "{field} must be an http(s) URL or a path starting with '/'"
    )))
}

/// Accept `""` or a syntactically valid email address.
pub fn validate_email(field: &str, value: &str) -> Result<(), CoreError> {
    if value.is_empty() || value.validate_email() {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "{field} must be a valid email address"
        )))
    }
}

pub fn validate_non_negative(field: &str, value: i32) -> Result<(), CoreError> {
    if value < 0 {
        return Err(CoreError::Validation(format!("{field} must not be negative")));
    }
    Ok(())
}

pub fn validate_percent(field: &str, value: i32) -> Result<(), CoreError> {
    if !(0..=100).contains(&value) {
        return Err(CoreError::Validation(format!(
            "{field} must be between 0 and 100"
        )));
    }
    Ok(())
}

/// Google Analytics measurement id (`G-…`) or legacy property id (`UA-…-…`).
///
/// An empty value clears the setting and is always accepted.
pub fn validate_analytics_id(value: &str) -> Result<(), CoreError> {
    if value.is_empty() || ANALYTICS_ID_RE.is_match(value) {
        Ok(())
    } else {
        Err(CoreError::Validation(
            "google_analytics_id must look like G-XXXXXXX or UA-123-1".into(),
        ))
    }
}

/// Facebook pixel ids are purely numeric. Empty clears the setting.
pub fn validate_pixel_id(value: &str) -> Result<(), CoreError> {
    if value.is_empty() || PIXEL_ID_RE.is_match(value) {
        Ok(())
    } else {
        Err(CoreError::Validation(
            "facebook_pixel_id must contain only digits".into(),
        ))
    }
}

/// Every skill entry must be non-blank, and a category holds at most
/// [`MAX_SKILL_ITEMS`] entries.
pub fn validate_skill_items(items: &[String]) -> Result<(), CoreError> {
    if items.len() > MAX_SKILL_ITEMS {
        return Err(CoreError::Validation(format!(
            "items must contain at most {MAX_SKILL_ITEMS} entries"
        )));
    }
    for (idx, item) in items.iter().enumerate() {
        if item.trim().is_empty() {
            return Err(CoreError::Validation(format!("items[{idx}] must not be empty")));
        }
        validate_title_len(&format!("items[{idx}]"), item)?;
    }
    Ok(())
}

/// Apply `check` to `value` when present.
///
/// Partial-update DTOs carry `Option` fields; absent fields are never
/// validated because they keep their stored value.
pub fn check_opt<T: ?Sized, F>(value: Option<&T>, check: F) -> Result<(), CoreError>
where
    F: FnOnce(&T) -> Result<(), CoreError>,
{
    match value {
        Some(v) => check(v),
        None => Ok(()),
    }
}
