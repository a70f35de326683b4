//! RecalculateFontSize - derives the font size from the stored eyesight.

use std::sync::Arc;

use crate::application::DisplayContext;
use crate::domain::derivation::SettingDerivation;
use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};
use crate::domain::user::{DerivedPreferences, FontSize};
use crate::ports::ProfileStore;

/// Command to recompute the recommended font size.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecalculateFontSizeCommand;

#[derive(Debug, Clone)]
pub struct RecalculateFontSizeResult {
    pub font_size: FontSize,
    pub preferences: DerivedPreferences,
}

/// Handler for font-size derivation.
pub struct RecalculateFontSizeHandler {
    store: Arc<dyn ProfileStore>,
    display: DisplayContext,
    base: FontSize,
}

impl RecalculateFontSizeHandler {
    /// `base` is the size recommended for uncorrected eyes.
    pub fn new(store: Arc<dyn ProfileStore>, display: DisplayContext, base: FontSize) -> Self {
        Self {
            store,
            display,
            base,
        }
    }

    pub async fn handle(
        &self,
        _cmd: RecalculateFontSizeCommand,
    ) -> Result<RecalculateFontSizeResult, DomainError> {
        // 1. Load eyesight
        let profile = self
            .store
            .load_profile()
            .await?
            .ok_or_else(|| DomainError::new(ErrorCode::ProfileNotFound, "Profile not found"))?;
        let eye_sight = profile
            .eye_sight
            .ok_or_else(|| ValidationError::empty_field("eyeSight"))?;

        // 2. Derive
        let font_size = SettingDerivation::font_size(self.base, &eye_sight)?;

        // 3. Persist font size and publish to screens
        self.display.set(font_size).await?;

        // 4. Keep preferences in step, preserving the user's toggles
        let mut preferences = self
            .store
            .load_preferences()
            .await?
            .unwrap_or_default();
        preferences.font_size_px = font_size;
        self.store.save_preferences(&preferences).await?;

        tracing::info!(
            average_diopters = eye_sight.average_magnitude(),
            "Derived font size {}",
            font_size
        );
        Ok(RecalculateFontSizeResult {
            font_size,
            preferences,
        })
    }
}
