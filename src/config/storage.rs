//! Storage configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Where records are kept
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Backend implementation
    #[serde(default)]
    pub backend: StorageBackend,

    /// Directory for the file backend
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

/// Key-value store implementation
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// One file per record under `data_dir`
    #[default]
    File,
    /// Process memory; nothing survives a restart
    Memory,
}

impl StorageConfig {
    /// Validate storage configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.backend == StorageBackend::File && self.data_dir.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("storage.data_dir"));
        }
        Ok(())
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            data_dir: default_data_dir(),
        }
    }
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./data")
}
