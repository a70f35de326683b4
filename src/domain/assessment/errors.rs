//! Assessment-specific error types.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};

use super::stage::AssessmentStage;

/// Errors raised by assessment sessions.
///
/// A negative answer ("can't hear", "too small") is never an error; these
/// only cover actions that do not fit the current stage.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AssessmentError {
    #[error("Cannot move assessment from {from} to {to}")]
    InvalidTransition {
        from: AssessmentStage,
        to: AssessmentStage,
    },

    #[error("Assessment is not in progress (stage: {0})")]
    NotInProgress(AssessmentStage),

    #[error("Action not available at this step: {0}")]
    WrongStep(String),

    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

impl AssessmentError {
    pub fn code(&self) -> ErrorCode {
        match self {
            AssessmentError::Invalid(err) => err.code(),
            _ => ErrorCode::InvalidStateTransition,
        }
    }
}

impl From<AssessmentError> for DomainError {
    fn from(err: AssessmentError) -> Self {
        DomainError::new(err.code(), err.to_string())
    }
}
