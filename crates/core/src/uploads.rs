//! Image upload rules: format sniffing, size limits, and storage keys.
//!
//! The format is detected from the file content, never from the client's
//! filename or content type. Stored files are content-addressed so the same
//! image uploaded twice resolves to the same key.

use std::io::Cursor;

use image::{ImageFormat, ImageReader};
use sha2::{Digest, Sha256};

use crate::error::CoreError;

/// Default maximum upload size (5 MiB).
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// Metadata of an accepted image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageInfo {
    /// File extension used for the stored object (`png`, `jpg`, `webp`, `gif`).
    pub extension: &'static str,
    pub width: u32,
    pub height: u32,
    pub size_bytes: usize,
}

/// Map a detected format to the stored file extension.
///
/// Returns `None` for formats the site does not serve.
fn extension_for(format: ImageFormat) -> Option<&'static str> {
    match format {
        ImageFormat::Png => Some("png"),
        ImageFormat::Jpeg => Some("jpg"),
        ImageFormat::WebP => Some("webp"),
        ImageFormat::Gif => Some("gif"),
        _ => None,
    }
}

/// Check that `bytes` hold a supported image no larger than `max_bytes`,
/// reading only the header to obtain its dimensions.
pub fn inspect_image(bytes: &[u8], max_bytes: usize) -> Result<ImageInfo, CoreError> {
    if bytes.is_empty() {
        return Err(CoreError::Validation("Uploaded file is empty".into()));
    }
    if bytes.len() > max_bytes {
        return Err(CoreError::Validation(format!(
            "Uploaded file exceeds the {max_bytes} byte limit"
        )));
    }

    let format = image::guess_format(bytes)
        .map_err(|_| CoreError::Validation("Uploaded file is not a recognised image".into()))?;
    let extension = extension_for(format).ok_or_else(|| {
        CoreError::Validation(format!(
            "Unsupported image format {format:?}. Use PNG, JPEG, WebP or GIF"
        ))
    })?;

    let (width, height) = ImageReader::with_format(Cursor::new(bytes), format)
        .into_dimensions()
        .map_err(|e| CoreError::Validation(format!("Unreadable image header: {e}")))?;

    Ok(ImageInfo {
        extension,
        width,
        height,
        size_bytes: bytes.len(),
    })
}

/// Content-addressed object key: `<sha256-hex>.<extension>`.
pub fn storage_key(bytes: &[u8], extension: &str) -> String {
    let digest = Sha256::digest(bytes);
    format!("{digest:x}.{extension}")
}

/// Whether `key` has the shape produced by [`storage_key`].
///
/// Used before touching the filesystem so no caller-supplied path can
/// escape the upload directory.
pub fn is_valid_storage_key(key: &str) -> bool {
    let Some((hash, ext)) = key.split_once('.') else {
        return false;
    };
    hash.len() == 64
        && hash.bytes().all(|b| b.is_ascii_hexdigit())
        && matches!(ext, "png" | "jpg" | "webp" | "gif")
}
