//! Derivation Module - Pure functions from measurements to display settings.
//!
//! Nothing here touches storage or the OS. Inputs are plain measurements,
//! outputs are values ready to persist or apply, and the same inputs always
//! produce the same outputs.

mod font_size;

pub use font_size::{SettingDerivation, DIOPTER_SCALE_FACTOR};
