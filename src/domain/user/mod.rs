//! User module - the profile and display preferences of the device owner.
//!
//! - `Profile` is the canonical `profileData` record
//! - `DerivedPreferences` holds display settings, computed or hand-edited
//! - `ProfileDraft` / `ProfileUpdate` are the only ways form input becomes a profile
//! - `LegacyVisionRecord` is the pre-`profileData` onboarding record

mod draft;
mod legacy;
mod preferences;
mod profile;
mod values;

pub use draft::{ProfileDraft, ProfileUpdate};
pub use legacy::LegacyVisionRecord;
pub use preferences::{
    ContrastLevel, DerivedPreferences, MANUAL_FONT_STEP_PX, MANUAL_MAX_FONT_PX,
    MANUAL_MIN_FONT_PX,
};
pub use profile::{EyeSight, Profile};
pub use values::{Age, Diopter, FontSize, MAX_AGE, MIN_AGE};
