//! Profile adapters - typed record storage implementations.
//!
//! - `KeyValueProfileStore` - JSON/string records over any `KeyValueStore`

mod key_value_profile_store;

pub use key_value_profile_store::KeyValueProfileStore;
