//! File-based Key-Value Store Adapter
//!
//! Stores each record as one file under a data directory. Keys are encoded
//! into file names so that `@font_size` and `profileData` live side by side.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::ports::{KeyValueStore, StoreError};

const RECORD_EXTENSION: &str = "rec";

/// File-based storage for raw records
#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    base_path: PathBuf,
}

impl FileKeyValueStore {
    /// Create a new file store rooted at `base_path`
    ///
    /// The directory is created on first write.
    ///
    /// # Example
    /// ```ignore
    /// let store = FileKeyValueStore::new("./data");
    /// ```
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Get the record file path for a key
    fn record_path(&self, key: &str) -> Result<PathBuf, StoreError> {
        Ok(self
            .base_path
            .join(format!("{}.{}", encode_key(key)?, RECORD_EXTENSION)))
    }

    /// Ensure the data directory exists
    async fn ensure_dir(&self) -> Result<(), StoreError> {
        fs::create_dir_all(&self.base_path)
            .await
            .map_err(|e| StoreError::IoError(format!("Failed to create directory: {}", e)))
    }
}

/// Maps a key onto a portable file stem.
///
/// ASCII letters, digits, `_` and `-` pass through; every other byte becomes
/// `%XX`. Distinct keys always give distinct stems.
fn encode_key(key: &str) -> Result<String, StoreError> {
    if key.is_empty() {
        return Err(StoreError::InvalidKey("key must not be empty".to_string()));
    }

    let mut stem = String::with_capacity(key.len());
    for byte in key.bytes() {
        if byte.is_ascii_alphanumeric() || byte == b'_' || byte == b'-' {
            stem.push(byte as char);
        } else {
            stem.push_str(&format!("%{:02X}", byte));
        }
    }
    Ok(stem)
}

#[async_trait]
impl KeyValueStore for FileKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let file_path = self.record_path(key)?;

        match fs::read_to_string(&file_path).await {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => {
                tracing::warn!("Failed to read record '{}': {}", key, e);
                Err(StoreError::IoError(format!("Failed to read file: {}", e)))
            }
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let file_path = self.record_path(key)?;
        self.ensure_dir().await?;

        // Write file atomically using a temporary file
        let temp_path = file_path.with_extension("tmp");
        fs::write(&temp_path, value).await.map_err(|e| {
            StoreError::IoError(format!("Failed to write temporary file: {}", e))
        })?;

        // Rename to final location (atomic operation on Unix)
        fs::rename(&temp_path, &file_path)
            .await
            .map_err(|e| StoreError::IoError(format!("Failed to rename file: {}", e)))?;

        tracing::debug!("Wrote record '{}' ({} bytes)", key, value.len());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StoreError> {
        let file_path = self.record_path(key)?;

        match fs::remove_file(&file_path).await {
            Ok(()) => Ok(()),
            // Not an error - idempotent delete
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::IoError(format!("Failed to delete file: {}", e))),
        }
    }
}
