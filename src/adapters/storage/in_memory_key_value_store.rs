//! In-Memory Key-Value Store Adapter
//!
//! Stores records in memory.
//! Useful for testing and development.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::ports::{KeyValueStore, StoreError};

/// In-memory storage for raw records
#[derive(Debug, Clone)]
pub struct InMemoryKeyValueStore {
    records: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemoryKeyValueStore {
    /// Create a new in-memory store
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Create a store pre-populated with records (useful for tests)
    pub fn with_records<I, K, V>(records: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let map = records
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self {
            records: Arc::new(RwLock::new(map)),
        }
    }

    /// Clear all stored data (useful for tests)
    pub async fn clear(&self) {
        self.records.write().await.clear();
    }

    /// Get the number of stored records
    pub async fn count(&self) -> usize {
        self.records.read().await.len()
    }
}

impl Default for InMemoryKeyValueStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl KeyValueStore for InMemoryKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let records = self.records.read().await;
        Ok(records.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        if key.is_empty() {
            return Err(StoreError::InvalidKey("key must not be empty".to_string()));
        }
        let mut records = self.records.write().await;
        records.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.records.write().await.remove(key);
        Ok(())
    }
}
