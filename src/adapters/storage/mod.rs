//! Storage Adapters
//!
//! Implementations of the KeyValueStore port for persisting raw records.
//!
//! ## Available Adapters
//!
//! - **FileKeyValueStore** - One file per record under a data directory
//! - **InMemoryKeyValueStore** - Records in memory (testing/development)
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::{FileKeyValueStore, InMemoryKeyValueStore};
//!
//! // Production: file-based storage
//! let store = FileKeyValueStore::new("./data");
//!
//! // Testing: in-memory storage
//! let store = InMemoryKeyValueStore::new();
//! ```

mod file_key_value_store;
mod in_memory_key_value_store;

pub use file_key_value_store::FileKeyValueStore;
pub use in_memory_key_value_store::InMemoryKeyValueStore;
