//! Storage backends for uploaded images.
//!
//! Handlers only see the [`ImageStore`] trait; [`LocalImageStore`] writes to a
//! directory that the router serves read-only at `/uploads`.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use folio_core::uploads::is_valid_storage_key;

/// Public URL prefix for stored images.
pub const UPLOADS_URL_PREFIX: &str = "/uploads";

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Object storage for image bytes keyed by content hash.
#[async_trait]
pub trait ImageStore: Send + Sync {
    /// Store `bytes` under `key`, returning the public URL.
    ///
    /// Storing the same key twice is a no-op that returns the same URL.
    async fn put(&self, key: &str, bytes: &[u8]) -> Result<String, StorageError>;
}

/// Filesystem-backed [`ImageStore`].
pub struct LocalImageStore {
    root: PathBuf,
}

impl LocalImageStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory the images are written to.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        if !is_valid_storage_key(key) {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        Ok(self.root.join(key))
    }
}

#[async_trait]
impl ImageStore for LocalImageStore {
    async fn put(&self, key: &str, bytes: &[u8]) -> Result<String, StorageError> {
        let path = self.path_for(key)?;
        if tokio::fs::try_exists(&path).await? {
            tracing::debug!(key, "Image already stored");
        } else {
            tokio::fs::create_dir_all(&self.root).await?;
            // Write to a temp name first so readers never see a partial file.
            let tmp = self.root.join(format!(".{key}.{}", uuid::Uuid::new_v4()));
            tokio::fs::write(&tmp, bytes).await?;
            tokio::fs::rename(&tmp, &path).await?;
        }
        Ok(format!("{UPLOADS_URL_PREFIX}/{key}"))
    }
}
