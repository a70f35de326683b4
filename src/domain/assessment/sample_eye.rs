//! Sample eye test - an advisory distance check followed by a font pick.
//!
//! The result is shown to the user but never written to the profile.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

use super::errors::AssessmentError;
use super::session::AssessmentSession;
use super::stage::{AssessmentStage, TestKind};

/// Font sizes offered on the selection step.
pub const SAMPLE_FONT_SIZES: [u32; 7] = [12, 14, 16, 18, 20, 22, 24];

/// Size selected when the user does not pick one.
pub const SAMPLE_DEFAULT_PX: u32 = 16;

/// Reading distance the test recommends.
pub const RECOMMENDED_DISTANCE: &str = "40-50 cm";

/// Steps between intro and results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SampleEyeStep {
    Distance,
    FontSelection,
}

/// What was recorded at each step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleEyeResponse {
    DistanceConfirmed,
    SizeChosen(u32),
}

/// Advisory summary of a completed sample eye test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleEyeOutcome {
    pub recommended_px: u32,
    pub screen_distance: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SampleEyeTest {
    session: AssessmentSession<SampleEyeResponse>,
    selected_px: u32,
}

impl SampleEyeTest {
    pub fn new() -> Self {
        Self {
            session: AssessmentSession::new(TestKind::EyeMultiStep),
            selected_px: SAMPLE_DEFAULT_PX,
        }
    }

    pub fn stage(&self) -> AssessmentStage {
        self.session.stage()
    }

    pub fn session(&self) -> &AssessmentSession<SampleEyeResponse> {
        &self.session
    }

    /// Step awaiting the user, while the test is in progress.
    pub fn current_step(&self) -> Option<SampleEyeStep> {
        if !self.session.is_in_progress() {
            return None;
        }
        match self.session.step_index() {
            0 => Some(SampleEyeStep::Distance),
            _ => Some(SampleEyeStep::FontSelection),
        }
    }

    pub fn selected_px(&self) -> u32 {
        self.selected_px
    }

    pub fn start(&mut self) -> Result<(), AssessmentError> {
        self.session.start()
    }

    /// User confirms they hold the device at reading distance.
    pub fn confirm_distance(&mut self) -> Result<(), AssessmentError> {
        self.expect_step(SampleEyeStep::Distance)?;
        self.session.record(SampleEyeResponse::DistanceConfirmed)?;
        Ok(())
    }

    /// Highlights one of the offered sizes. Can be changed until completion.
    pub fn select_size(&mut self, px: u32) -> Result<(), AssessmentError> {
        self.expect_step(SampleEyeStep::FontSelection)?;
        if !SAMPLE_FONT_SIZES.contains(&px) {
            return Err(ValidationError::invalid_format(
                "fontSize",
                format!("{}px is not one of the offered sizes", px),
            )
            .into());
        }
        self.selected_px = px;
        Ok(())
    }

    /// Commits the selected size and shows results.
    pub fn complete(&mut self) -> Result<SampleEyeOutcome, AssessmentError> {
        self.expect_step(SampleEyeStep::FontSelection)?;
        self.session
            .record(SampleEyeResponse::SizeChosen(self.selected_px))?;
        self.session.finish()?;
        Ok(self.summary())
    }

    pub fn outcome(&self) -> Option<SampleEyeOutcome> {
        self.session.is_complete().then(|| self.summary())
    }

    pub fn retake(&mut self) {
        *self = Self::new();
    }

    fn summary(&self) -> SampleEyeOutcome {
        SampleEyeOutcome {
            recommended_px: self.selected_px,
            screen_distance: RECOMMENDED_DISTANCE,
        }
    }

    fn expect_step(&self, step: SampleEyeStep) -> Result<(), AssessmentError> {
        match self.current_step() {
            Some(current) if current == step => Ok(()),
            Some(current) => Err(AssessmentError::WrongStep(format!(
                "expected {:?}, currently at {:?}",
                step, current
            ))),
            None => Err(AssessmentError::NotInProgress(self.session.stage())),
        }
    }
}

impl Default for SampleEyeTest {
    fn default() -> Self {
        Self::new()
    }
}
