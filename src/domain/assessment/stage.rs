//! Assessment stages and test kinds.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::StateMachine;

/// Which guided test a session belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TestKind {
    /// Adjust-until-perfect font size test.
    EyeStep,
    /// Advisory distance + font selection test.
    EyeMultiStep,
    /// Five-frequency hearing sweep.
    Hearing,
}

impl fmt::Display for TestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TestKind::EyeStep => "eye_step",
            TestKind::EyeMultiStep => "eye_multi_step",
            TestKind::Hearing => "hearing",
        };
        write!(f, "{}", s)
    }
}

/// Lifecycle of one assessment session.
///
/// `Intro -> InProgress -> Results`. There is no way back: a retake
/// discards the session and starts a new one at `Intro`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AssessmentStage {
    #[default]
    Intro,
    InProgress,
    Results,
}

impl StateMachine for AssessmentStage {
    fn can_transition_to(&self, target: &Self) -> bool {
        use AssessmentStage::*;
        matches!((self, target), (Intro, InProgress) | (InProgress, Results))
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use AssessmentStage::*;
        match self {
            Intro => vec![InProgress],
            InProgress => vec![Results],
            Results => vec![],
        }
    }
}

impl fmt::Display for AssessmentStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AssessmentStage::Intro => "Intro",
            AssessmentStage::InProgress => "InProgress",
            AssessmentStage::Results => "Results",
        };
        write!(f, "{}", s)
    }
}
