//! AssessmentSession - the transient state shared by every guided test.

use chrono::Duration;

use crate::domain::foundation::{StateMachine, Timestamp};

use super::errors::AssessmentError;
use super::stage::{AssessmentStage, TestKind};

/// In-memory session of one guided test.
///
/// Owned by the test that created it for its whole lifetime and never
/// persisted mid-test. Responses are kept in the order they were given.
#[derive(Debug, Clone, PartialEq)]
pub struct AssessmentSession<R> {
    kind: TestKind,
    stage: AssessmentStage,
    step_index: usize,
    responses: Vec<R>,
    started_at: Option<Timestamp>,
    completed_at: Option<Timestamp>,
}

impl<R> AssessmentSession<R> {
    /// Creates a session at `Intro`.
    pub fn new(kind: TestKind) -> Self {
        Self {
            kind,
            stage: AssessmentStage::Intro,
            step_index: 0,
            responses: Vec::new(),
            started_at: None,
            completed_at: None,
        }
    }

    pub fn kind(&self) -> TestKind {
        self.kind
    }

    pub fn stage(&self) -> AssessmentStage {
        self.stage
    }

    /// Zero-based index of the step awaiting a response.
    pub fn step_index(&self) -> usize {
        self.step_index
    }

    pub fn responses(&self) -> &[R] {
        &self.responses
    }

    pub fn started_at(&self) -> Option<Timestamp> {
        self.started_at
    }

    pub fn completed_at(&self) -> Option<Timestamp> {
        self.completed_at
    }

    /// Time from start to results, once both have happened.
    pub fn duration(&self) -> Option<Duration> {
        match (self.started_at, self.completed_at) {
            (Some(start), Some(end)) => Some(end.duration_since(&start)),
            _ => None,
        }
    }

    pub fn is_in_progress(&self) -> bool {
        self.stage == AssessmentStage::InProgress
    }

    pub fn is_complete(&self) -> bool {
        self.stage == AssessmentStage::Results
    }

    /// Leaves the intro and enters the first step.
    pub fn start(&mut self) -> Result<(), AssessmentError> {
        self.transition(AssessmentStage::InProgress)?;
        self.step_index = 0;
        self.started_at = Some(Timestamp::now());
        Ok(())
    }

    /// Records the response for the current step and advances to the next.
    ///
    /// Returns the new step index.
    pub fn record(&mut self, response: R) -> Result<usize, AssessmentError> {
        if !self.is_in_progress() {
            return Err(AssessmentError::NotInProgress(self.stage));
        }
        self.responses.push(response);
        self.step_index += 1;
        Ok(self.step_index)
    }

    /// Moves to `Results`. Only reachable once per session.
    pub fn finish(&mut self) -> Result<(), AssessmentError> {
        self.transition(AssessmentStage::Results)?;
        self.completed_at = Some(Timestamp::now());
        Ok(())
    }

    fn transition(&mut self, target: AssessmentStage) -> Result<(), AssessmentError> {
        if !self.stage.can_transition_to(&target) {
            return Err(AssessmentError::InvalidTransition {
                from: self.stage,
                to: target,
            });
        }
        self.stage = target;
        Ok(())
    }
}
