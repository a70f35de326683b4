//! ProfileStore over a raw key-value store.
//!
//! Records are JSON except `@font_size` (decimal string) and the
//! `preferences` marker (`"true"`). Every value is serialized before the
//! first write so a serialization failure never leaves a half-written pair.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;

use crate::domain::user::{DerivedPreferences, FontSize, LegacyVisionRecord, Profile};
use crate::ports::{keys, KeyValueStore, ProfileStore, StoreError};

const CONFIRMED_MARKER: &str = "true";

/// Typed record access over any `KeyValueStore`.
#[derive(Clone)]
pub struct KeyValueProfileStore {
    store: Arc<dyn KeyValueStore>,
}

impl KeyValueProfileStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    fn encode<T: Serialize>(key: &str, value: &T) -> Result<String, StoreError> {
        serde_json::to_string(value).map_err(|e| StoreError::SerializationFailed {
            key: key.to_string(),
            reason: e.to_string(),
        })
    }

    fn decode<T: DeserializeOwned>(key: &str, raw: &str) -> Result<T, StoreError> {
        serde_json::from_str(raw).map_err(|e| StoreError::DeserializationFailed {
            key: key.to_string(),
            reason: e.to_string(),
        })
    }

    async fn load_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        match self.store.get(key).await? {
            Some(raw) => Self::decode(key, &raw).map(Some),
            None => Ok(None),
        }
    }

    async fn load_legacy_profile(&self) -> Result<Option<Profile>, StoreError> {
        let Some(record) = self
            .load_json::<LegacyVisionRecord>(keys::VISION_DATA)
            .await?
        else {
            return Ok(None);
        };

        tracing::debug!("No {} record, upgrading {}", keys::PROFILE_DATA, keys::VISION_DATA);
        Ok(Some(record.into_profile()))
    }
}

#[async_trait]
impl ProfileStore for KeyValueProfileStore {
    async fn load_profile(&self) -> Result<Option<Profile>, StoreError> {
        match self.load_json::<Profile>(keys::PROFILE_DATA).await? {
            Some(profile) => Ok(Some(profile)),
            None => self.load_legacy_profile().await,
        }
    }

    async fn save_profile(&self, profile: &Profile) -> Result<(), StoreError> {
        let canonical = Self::encode(keys::PROFILE_DATA, profile)?;
        let mirror = Self::encode(keys::VISION_DATA, &LegacyVisionRecord::from_profile(profile))?;

        self.store.set(keys::PROFILE_DATA, &canonical).await?;
        self.store.set(keys::VISION_DATA, &mirror).await?;

        tracing::info!(complete = profile.is_complete(), "Saved profile");
        Ok(())
    }

    async fn load_preferences(&self) -> Result<Option<DerivedPreferences>, StoreError> {
        self.load_json(keys::DERIVED_PREFERENCES).await
    }

    async fn save_preferences(&self, preferences: &DerivedPreferences) -> Result<(), StoreError> {
        let raw = Self::encode(keys::DERIVED_PREFERENCES, preferences)?;
        self.store.set(keys::DERIVED_PREFERENCES, &raw).await
    }

    async fn load_font_size(&self) -> Result<Option<FontSize>, StoreError> {
        match self.store.get(keys::FONT_SIZE).await? {
            Some(raw) => FontSize::parse(&raw)
                .map(Some)
                .map_err(|e| StoreError::DeserializationFailed {
                    key: keys::FONT_SIZE.to_string(),
                    reason: e.to_string(),
                }),
            None => Ok(None),
        }
    }

    async fn save_font_size(&self, size: FontSize) -> Result<(), StoreError> {
        self.store
            .set(keys::FONT_SIZE, &size.to_record_string())
            .await?;
        tracing::debug!("Saved font size {}", size);
        Ok(())
    }

    async fn mark_preferences_confirmed(&self) -> Result<(), StoreError> {
        self.store
            .set(keys::PREFERENCES_CONFIRMED, CONFIRMED_MARKER)
            .await
    }

    async fn preferences_confirmed(&self) -> Result<bool, StoreError> {
        Ok(self
            .store
            .get(keys::PREFERENCES_CONFIRMED)
            .await?
            .map(|v| v.trim() == CONFIRMED_MARKER)
            .unwrap_or(false))
    }
}
