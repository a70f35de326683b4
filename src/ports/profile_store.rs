//! Profile Store Port - Typed access to the durable records.
//!
//! The store owns every durable record. Validation happens before a value
//! reaches it; the store only serializes, writes and reads back.

use async_trait::async_trait;

use crate::domain::user::{DerivedPreferences, FontSize, Profile};

use super::StoreError;

/// Stable record keys.
pub mod keys {
    /// Canonical profile record (JSON object).
    pub const PROFILE_DATA: &str = "profileData";
    /// Current recommended font size (decimal string).
    pub const FONT_SIZE: &str = "@font_size";
    /// Display preferences (JSON object).
    pub const DERIVED_PREFERENCES: &str = "derivedPreferences";
    /// Pre-`profileData` onboarding record, mirrored on write.
    pub const VISION_DATA: &str = "visionData";
    /// Set to `"true"` once the user has confirmed their preferences.
    pub const PREFERENCES_CONFIRMED: &str = "preferences";
}

/// Port for loading and saving profile-related records.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Load the profile.
    ///
    /// Falls back to the legacy `visionData` record only when no canonical
    /// record exists.
    ///
    /// # Errors
    /// `StoreError::DeserializationFailed` for a malformed payload.
    async fn load_profile(&self) -> Result<Option<Profile>, StoreError>;

    /// Overwrite the profile and its legacy mirror.
    async fn save_profile(&self, profile: &Profile) -> Result<(), StoreError>;

    async fn load_preferences(&self) -> Result<Option<DerivedPreferences>, StoreError>;

    async fn save_preferences(&self, preferences: &DerivedPreferences) -> Result<(), StoreError>;

    /// Load the standalone recommended font size.
    async fn load_font_size(&self) -> Result<Option<FontSize>, StoreError>;

    async fn save_font_size(&self, size: FontSize) -> Result<(), StoreError>;

    /// Record that the user confirmed their preferences.
    async fn mark_preferences_confirmed(&self) -> Result<(), StoreError>;

    async fn preferences_confirmed(&self) -> Result<bool, StoreError>;
}
