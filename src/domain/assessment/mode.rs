//! How eyesight enters the profile during onboarding.

use serde::{Deserialize, Serialize};

/// Source of the eyesight values for a vision-profile intake.
///
/// Intake without an explicit mode is manual entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum AssessmentMode {
    /// The user types both diopter values.
    #[default]
    Manual,
    /// Eyesight is left blank and the vision step test follows.
    #[serde(rename = "eyeTest")]
    FromEyeTest,
}

impl AssessmentMode {
    /// Whether typed eyesight values are kept.
    pub fn uses_typed_eyesight(&self) -> bool {
        matches!(self, AssessmentMode::Manual)
    }
}
