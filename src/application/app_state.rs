//! AppState - shared dependencies and handler construction.
//!
//! Screens never build handlers themselves; they ask the state for one so
//! every handler sees the same store, bridge and display settings.

use std::sync::Arc;

use crate::domain::assessment::{VisionStepTest, VISION_START_PX};
use crate::domain::user::FontSize;
use crate::ports::{NativeSettings, ProfileStore};

use super::handlers::{
    CommitVisionResultHandler, ConfirmPreferencesHandler, RecalculateFontSizeHandler,
    SaveProfileHandler, SubmitVisionProfileHandler, UpdatePreferencesHandler,
    UpdateProfileHandler,
};
use super::{DisplayContext, OnboardingGate, PermissionGateway, SettingsApplier};

/// Pixel sizes the application is built with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplaySettings {
    /// Size the OS renders at font scale 1.0.
    pub reference: FontSize,
    /// Recommended size for uncorrected eyes.
    pub derivation_base: FontSize,
    /// First candidate of the vision step test.
    pub vision_test_start_px: u32,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            reference: FontSize::REFERENCE,
            derivation_base: FontSize::DERIVATION_BASE,
            vision_test_start_px: VISION_START_PX,
        }
    }
}

/// Shared application state containing all dependencies.
#[derive(Clone)]
pub struct AppState {
    pub profiles: Arc<dyn ProfileStore>,
    pub bridge: Arc<dyn NativeSettings>,
    pub gateway: PermissionGateway,
    pub applier: SettingsApplier,
    pub display: DisplayContext,
    settings: DisplaySettings,
}

impl AppState {
    /// Wires the services and loads the current font size.
    ///
    /// Without a stored `@font_size` the display starts at the reference size.
    pub async fn load(
        profiles: Arc<dyn ProfileStore>,
        bridge: Arc<dyn NativeSettings>,
        settings: DisplaySettings,
    ) -> Self {
        let gateway = PermissionGateway::new(bridge.clone());
        let applier =
            SettingsApplier::with_reference(gateway.clone(), bridge.clone(), settings.reference);
        let display = DisplayContext::load(profiles.clone(), settings.reference).await;

        Self {
            profiles,
            bridge,
            gateway,
            applier,
            display,
            settings,
        }
    }

    pub fn settings(&self) -> DisplaySettings {
        self.settings
    }

    pub fn onboarding_gate(&self) -> OnboardingGate {
        OnboardingGate::new(self.profiles.clone())
    }

    /// A fresh vision step test at the configured starting size.
    pub fn vision_step_test(&self) -> VisionStepTest {
        VisionStepTest::starting_at(self.settings.vision_test_start_px)
    }

    pub fn save_profile_handler(&self) -> SaveProfileHandler {
        SaveProfileHandler::new(self.profiles.clone())
    }

    pub fn update_profile_handler(&self) -> UpdateProfileHandler {
        UpdateProfileHandler::new(self.profiles.clone())
    }

    pub fn submit_vision_profile_handler(&self) -> SubmitVisionProfileHandler {
        SubmitVisionProfileHandler::new(self.profiles.clone())
    }

    pub fn update_preferences_handler(&self) -> UpdatePreferencesHandler {
        UpdatePreferencesHandler::new(self.profiles.clone(), self.display.clone())
    }

    pub fn recalculate_font_size_handler(&self) -> RecalculateFontSizeHandler {
        RecalculateFontSizeHandler::new(
            self.profiles.clone(),
            self.display.clone(),
            self.settings.derivation_base,
        )
    }

    pub fn confirm_preferences_handler(&self) -> ConfirmPreferencesHandler {
        ConfirmPreferencesHandler::new(
            self.profiles.clone(),
            self.gateway.clone(),
            self.applier.clone(),
            self.bridge.clone(),
        )
    }

    pub fn commit_vision_result_handler(&self) -> CommitVisionResultHandler {
        CommitVisionResultHandler::new(self.profiles.clone(), self.display.clone())
    }
}
