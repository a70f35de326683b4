//! Vision step test - nudge a sample text until it reads comfortably.

use serde::{Deserialize, Serialize};

use crate::domain::user::FontSize;

use super::errors::AssessmentError;
use super::session::AssessmentSession;
use super::stage::{AssessmentStage, TestKind};

/// Smallest candidate the test will show.
pub const VISION_MIN_PX: u32 = 12;

/// Largest candidate the test will show.
pub const VISION_MAX_PX: u32 = 36;

/// Change per "too small" / "too big" answer.
pub const VISION_STEP_PX: u32 = 2;

/// Candidate shown first.
pub const VISION_START_PX: u32 = 16;

/// Answer to "how does this text look to you?".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisionResponse {
    TooSmall,
    TooBig,
    Perfect,
}

/// Result of a completed vision step test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisionStepOutcome {
    pub recommended: FontSize,
    pub adjustments: usize,
}

/// Adjust-until-perfect font size test.
#[derive(Debug, Clone, PartialEq)]
pub struct VisionStepTest {
    session: AssessmentSession<VisionResponse>,
    start_px: u32,
    candidate_px: u32,
}

impl VisionStepTest {
    pub fn new() -> Self {
        Self::starting_at(VISION_START_PX)
    }

    /// Starts from a custom candidate, clamped into the test range.
    pub fn starting_at(start_px: u32) -> Self {
        let start_px = start_px.clamp(VISION_MIN_PX, VISION_MAX_PX);
        Self {
            session: AssessmentSession::new(TestKind::EyeStep),
            start_px,
            candidate_px: start_px,
        }
    }

    pub fn stage(&self) -> AssessmentStage {
        self.session.stage()
    }

    pub fn session(&self) -> &AssessmentSession<VisionResponse> {
        &self.session
    }

    /// Font size currently shown to the user.
    pub fn candidate_px(&self) -> u32 {
        self.candidate_px
    }

    pub fn start(&mut self) -> Result<(), AssessmentError> {
        self.session.start()
    }

    /// Applies one answer. `Perfect` ends the session.
    pub fn respond(&mut self, response: VisionResponse) -> Result<AssessmentStage, AssessmentError> {
        self.session.record(response)?;
        match response {
            VisionResponse::TooSmall => {
                self.candidate_px = (self.candidate_px + VISION_STEP_PX).min(VISION_MAX_PX);
            }
            VisionResponse::TooBig => {
                self.candidate_px = self
                    .candidate_px
                    .saturating_sub(VISION_STEP_PX)
                    .max(VISION_MIN_PX);
            }
            VisionResponse::Perfect => self.session.finish()?,
        }
        Ok(self.session.stage())
    }

    /// The committed font size, once the user answered `Perfect`.
    pub fn outcome(&self) -> Option<VisionStepOutcome> {
        if !self.session.is_complete() {
            return None;
        }
        let recommended = FontSize::try_new(f64::from(self.candidate_px)).ok()?;
        Some(VisionStepOutcome {
            recommended,
            adjustments: self.session.responses().len().saturating_sub(1),
        })
    }

    /// Discards the session and returns to the intro.
    pub fn retake(&mut self) {
        *self = Self::starting_at(self.start_px);
    }
}

impl Default for VisionStepTest {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn started() -> VisionStepTest {
        let mut test = VisionStepTest::new();
        test.start().unwrap();
        test
    }

    #[test]
    fn starts_at_sixteen() {
        let test = VisionStepTest::new();
        assert_eq!(test.candidate_px(), 16);
        assert_eq!(test.stage(), AssessmentStage::Intro);
    }

    #[test]
    fn too_small_and_too_big_move_by_two() {
        let mut test = started();
        test.respond(VisionResponse::TooSmall).unwrap();
        assert_eq!(test.candidate_px(), 18);
        test.respond(VisionResponse::TooBig).unwrap();
        test.respond(VisionResponse::TooBig).unwrap();
        assert_eq!(test.candidate_px(), 14);
        assert_eq!(test.stage(), AssessmentStage::InProgress);
    }

    #[test]
    fn candidate_is_clamped_to_range() {
        let mut test = started();
        for _ in 0..20 {
            test.respond(VisionResponse::TooSmall).unwrap();
        }
        assert_eq!(test.candidate_px(), VISION_MAX_PX);

        for _ in 0..20 {
            test.respond(VisionResponse::TooBig).unwrap();
        }
        assert_eq!(test.candidate_px(), VISION_MIN_PX);
    }

    #[test]
    fn perfect_commits_candidate() {
        let mut test = started();
        test.respond(VisionResponse::TooSmall).unwrap();
        let stage = test.respond(VisionResponse::Perfect).unwrap();

        assert_eq!(stage, AssessmentStage::Results);
        let outcome = test.outcome().unwrap();
        assert_eq!(outcome.recommended.px(), 18.0);
        assert_eq!(outcome.adjustments, 1);
    }

    #[test]
    fn no_outcome_before_perfect() {
        let mut test = started();
        test.respond(VisionResponse::TooBig).unwrap();
        assert!(test.outcome().is_none());
    }

    #[test]
    fn responding_after_results_is_rejected() {
        let mut test = started();
        test.respond(VisionResponse::Perfect).unwrap();
        assert!(matches!(
            test.respond(VisionResponse::TooSmall),
            Err(AssessmentError::NotInProgress(AssessmentStage::Results))
        ));
        assert_eq!(test.candidate_px(), 16);
    }

    #[test]
    fn responding_before_start_is_rejected() {
        let mut test = VisionStepTest::new();
        assert!(test.respond(VisionResponse::Perfect).is_err());
    }

    #[test]
    fn retake_resets_to_intro() {
        let mut test = started();
        test.respond(VisionResponse::TooSmall).unwrap();
        test.respond(VisionResponse::Perfect).unwrap();

        test.retake();
        assert_eq!(test.stage(), AssessmentStage::Intro);
        assert_eq!(test.candidate_px(), 16);
        assert!(test.session().responses().is_empty());
    }

    #[test]
    fn custom_start_is_clamped() {
        assert_eq!(VisionStepTest::starting_at(4).candidate_px(), VISION_MIN_PX);
        assert_eq!(VisionStepTest::starting_at(50).candidate_px(), VISION_MAX_PX);
    }
}
