//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Storage Ports
//!
//! - `KeyValueStore` - Raw string records in a single namespace
//! - `ProfileStore` - Typed profile, preference and font-size records
//!
//! ## OS Ports
//!
//! - `NativeSettings` - Settings permission and system font scale

mod key_value_store;
mod native_settings;
mod profile_store;

pub use key_value_store::{KeyValueStore, StoreError};
pub use native_settings::{BridgeError, NativeSettings};
pub use profile_store::{keys, ProfileStore};
