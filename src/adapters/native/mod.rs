//! Native settings adapters.
//!
//! - `InMemoryNativeSettings` - Simulated OS grant and font scale
//! - `UnsupportedNativeSettings` - Platform without the native modules

mod in_memory;
mod unsupported;

pub use in_memory::InMemoryNativeSettings;
pub use unsupported::UnsupportedNativeSettings;
