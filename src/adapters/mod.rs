//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `storage` - Raw key-value stores (file, in-memory)
//! - `profile` - Typed profile records over a key-value store
//! - `native` - OS settings bridge (simulated, unsupported)

pub mod native;
pub mod profile;
pub mod storage;

pub use native::{InMemoryNativeSettings, UnsupportedNativeSettings};
pub use profile::KeyValueProfileStore;
pub use storage::{FileKeyValueStore, InMemoryKeyValueStore};
