//! Key-Value Store Port - Interface for raw record persistence.
//!
//! A single logical namespace of string keys to string values, the shape of
//! a device-local async storage. Typed records are layered on top by the
//! `ProfileStore` port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Errors that can occur during storage operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("Failed to serialize record '{key}': {reason}")]
    SerializationFailed { key: String, reason: String },

    #[error("Failed to deserialize record '{key}': {reason}")]
    DeserializationFailed { key: String, reason: String },

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("IO error: {0}")]
    IoError(String),
}

impl StoreError {
    /// True when the stored payload exists but cannot be understood.
    pub fn is_malformed(&self) -> bool {
        matches!(self, StoreError::DeserializationFailed { .. })
    }
}

impl From<StoreError> for DomainError {
    fn from(err: StoreError) -> Self {
        let code = match err {
            StoreError::SerializationFailed { .. } | StoreError::DeserializationFailed { .. } => {
                ErrorCode::SerializationError
            }
            StoreError::InvalidKey(_) | StoreError::IoError(_) => ErrorCode::StorageError,
        };
        DomainError::new(code, err.to_string())
    }
}

/// Port for reading and writing raw string records.
///
/// Writes are last-writer-wins. `set` must either store the whole value or
/// leave the previous value in place.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read a record; `Ok(None)` when the key was never written.
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Write a record, replacing any previous value.
    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove a record. Removing a missing key is not an error.
    async fn remove(&self, key: &str) -> Result<(), StoreError>;

    /// Check whether a record exists.
    async fn contains(&self, key: &str) -> Result<bool, StoreError> {
        Ok(self.get(key).await?.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialization_failure_is_malformed() {
        let err = StoreError::DeserializationFailed {
            key: "profileData".to_string(),
            reason: "expected value".to_string(),
        };
        assert!(err.is_malformed());
        assert!(err.to_string().contains("profileData"));
    }

    #[test]
    fn io_error_maps_to_storage_code() {
        let err: DomainError = StoreError::IoError("disk full".to_string()).into();
        assert_eq!(err.code, ErrorCode::StorageError);
        assert!(err.message().contains("disk full"));
    }

    #[test]
    fn serialization_error_maps_to_serialization_code() {
        let err: DomainError = StoreError::SerializationFailed {
            key: "preferences".to_string(),
            reason: "boom".to_string(),
        }
        .into();
        assert_eq!(err.code, ErrorCode::SerializationError);
    }
}
