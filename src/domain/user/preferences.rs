//! Display preferences, stored separately from the profile so they can be
//! edited without re-running an assessment.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::values::FontSize;

/// Smallest font size reachable with the manual +/- controls.
pub const MANUAL_MIN_FONT_PX: f64 = 12.0;

/// Largest font size reachable with the manual +/- controls.
pub const MANUAL_MAX_FONT_PX: f64 = 32.0;

/// Step of one press on the manual +/- controls.
pub const MANUAL_FONT_STEP_PX: f64 = 2.0;

/// Screen contrast setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ContrastLevel {
    Low,
    #[default]
    Normal,
    High,
}

impl fmt::Display for ContrastLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ContrastLevel::Low => "low",
            ContrastLevel::Normal => "normal",
            ContrastLevel::High => "high",
        };
        write!(f, "{}", s)
    }
}

/// Display preferences.
///
/// Only the font size is ever computed from measurements. Contrast, blue
/// light and night mode are user toggles with no computed default.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedPreferences {
    pub font_size_px: FontSize,
    #[serde(default)]
    pub contrast_level: ContrastLevel,
    #[serde(default)]
    pub blue_light_filter: bool,
    #[serde(default)]
    pub night_mode: bool,
    #[serde(default = "default_true")]
    pub screen_distance_alerts: bool,
    #[serde(default = "default_true")]
    pub break_reminders: bool,
}

fn default_true() -> bool {
    true
}

impl DerivedPreferences {
    /// Defaults around the given font size.
    pub fn with_font_size(font_size_px: FontSize) -> Self {
        Self {
            font_size_px,
            ..Self::default()
        }
    }

    /// Applies one manual "+" (positive) or "-" (negative) press.
    pub fn nudge_font_size(&mut self, steps: i32) {
        self.font_size_px = self.font_size_px.nudged(
            f64::from(steps) * MANUAL_FONT_STEP_PX,
            MANUAL_MIN_FONT_PX,
            MANUAL_MAX_FONT_PX,
        );
    }
}

impl Default for DerivedPreferences {
    fn default() -> Self {
        Self {
            font_size_px: FontSize::REFERENCE,
            contrast_level: ContrastLevel::default(),
            blue_light_filter: false,
            night_mode: false,
            screen_distance_alerts: true,
            break_reminders: true,
        }
    }
}
