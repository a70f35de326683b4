//! UpdatePreferences - Command handler for manual preference edits.

use std::sync::Arc;

use crate::application::DisplayContext;
use crate::domain::foundation::DomainError;
use crate::domain::user::{ContrastLevel, DerivedPreferences};
use crate::ports::ProfileStore;

/// Manual changes from the preferences screen. `None` leaves a toggle as is.
#[derive(Debug, Clone, Default)]
pub struct UpdatePreferencesCommand {
    /// Net "+" (positive) or "-" (negative) presses on the font size control.
    pub font_steps: i32,
    pub contrast_level: Option<ContrastLevel>,
    pub blue_light_filter: Option<bool>,
    pub night_mode: Option<bool>,
    pub screen_distance_alerts: Option<bool>,
    pub break_reminders: Option<bool>,
}

#[derive(Debug, Clone)]
pub struct UpdatePreferencesResult {
    pub preferences: DerivedPreferences,
}

/// Handler for manual preference edits.
pub struct UpdatePreferencesHandler {
    store: Arc<dyn ProfileStore>,
    display: DisplayContext,
}

impl UpdatePreferencesHandler {
    pub fn new(store: Arc<dyn ProfileStore>, display: DisplayContext) -> Self {
        Self { store, display }
    }

    pub async fn handle(
        &self,
        cmd: UpdatePreferencesCommand,
    ) -> Result<UpdatePreferencesResult, DomainError> {
        // 1. Start from stored preferences, or defaults around the current size
        let mut preferences = self
            .store
            .load_preferences()
            .await?
            .unwrap_or_else(|| DerivedPreferences::with_font_size(self.display.current()));

        // 2. Apply edits
        if cmd.font_steps != 0 {
            preferences.nudge_font_size(cmd.font_steps);
        }
        if let Some(level) = cmd.contrast_level {
            preferences.contrast_level = level;
        }
        if let Some(on) = cmd.blue_light_filter {
            preferences.blue_light_filter = on;
        }
        if let Some(on) = cmd.night_mode {
            preferences.night_mode = on;
        }
        if let Some(on) = cmd.screen_distance_alerts {
            preferences.screen_distance_alerts = on;
        }
        if let Some(on) = cmd.break_reminders {
            preferences.break_reminders = on;
        }

        // 3. Persist
        self.store.save_preferences(&preferences).await?;
        if preferences.font_size_px != self.display.current() {
            self.display.set(preferences.font_size_px).await?;
        }

        Ok(UpdatePreferencesResult { preferences })
    }
}
