//! SubmitVisionProfile - Command handler for the onboarding vision form.
//!
//! In manual mode the typed eyesight is validated and kept. In eye-test mode
//! the eyesight fields are ignored and the vision test comes next.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use crate::domain::assessment::AssessmentMode;
use crate::domain::foundation::DomainError;
use crate::domain::user::{Profile, ProfileDraft};
use crate::ports::ProfileStore;

/// Command to submit the vision profile form.
#[derive(Debug, Clone)]
pub struct SubmitVisionProfileCommand {
    pub draft: ProfileDraft,
    pub mode: AssessmentMode,
}

impl SubmitVisionProfileCommand {
    /// Intake with the default mode.
    pub fn new(draft: ProfileDraft) -> Self {
        Self {
            draft,
            mode: AssessmentMode::default(),
        }
    }

    pub fn with_mode(mut self, mode: AssessmentMode) -> Self {
        self.mode = mode;
        self
    }
}

/// Onboarding screen that follows a successful submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NextStep {
    Preferences,
    EyeTest,
}

impl fmt::Display for NextStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NextStep::Preferences => write!(f, "preferences"),
            NextStep::EyeTest => write!(f, "eye_test"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SubmitVisionProfileResult {
    pub profile: Profile,
    pub next: NextStep,
}

/// Handler for the vision profile form.
pub struct SubmitVisionProfileHandler {
    store: Arc<dyn ProfileStore>,
}

impl SubmitVisionProfileHandler {
    pub fn new(store: Arc<dyn ProfileStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        cmd: SubmitVisionProfileCommand,
    ) -> Result<SubmitVisionProfileResult, DomainError> {
        // 1. Validate for the chosen mode
        let (profile, next) = if cmd.mode.uses_typed_eyesight() {
            (cmd.draft.validate()?, NextStep::Preferences)
        } else {
            (cmd.draft.validate_identity()?, NextStep::EyeTest)
        };

        // 2. Persist canonical record and legacy mirror
        self.store.save_profile(&profile).await?;

        tracing::info!(mode = ?cmd.mode, %next, "Submitted vision profile");
        Ok(SubmitVisionProfileResult { profile, next })
    }
}
