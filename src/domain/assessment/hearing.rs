//! Hearing sweep - five tones, one yes/no answer each.
//!
//! A screening aid only. The score is the share of tones heard.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Percentage;

use super::errors::AssessmentError;
use super::session::AssessmentSession;
use super::stage::{AssessmentStage, TestKind};

/// Tested frequencies in ascending order, with their display labels.
pub const HEARING_FREQUENCIES: [(u32, &str); 5] = [
    (250, "Low (250 Hz)"),
    (500, "Low-Mid (500 Hz)"),
    (1000, "Mid (1000 Hz)"),
    (2000, "Mid-High (2000 Hz)"),
    (4000, "High (4000 Hz)"),
];

/// Volume the intro starts at.
pub const DEFAULT_VOLUME: u8 = 50;

/// Change per "lower" / "higher" press.
pub const VOLUME_STEP: i16 = 10;

/// Answer for one frequency. `heard == None` means not tested yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HearingFrequencyResult {
    pub frequency_hz: u32,
    pub label: &'static str,
    pub heard: Option<bool>,
}

/// Coarse interpretation of the hearing score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HearingTier {
    Good,
    MildLoss,
    SignificantLoss,
}

impl HearingTier {
    /// 80 and above is good, 60 and above mild loss, anything lower significant.
    pub fn from_score(score: Percentage) -> Self {
        match score.value() {
            80..=100 => HearingTier::Good,
            60..=79 => HearingTier::MildLoss,
            _ => HearingTier::SignificantLoss,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            HearingTier::Good => "Good Hearing",
            HearingTier::MildLoss => "Mild Hearing Loss",
            HearingTier::SignificantLoss => "Significant Hearing Loss",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            HearingTier::Good => {
                "Your test results indicate good hearing across most frequencies."
            }
            HearingTier::MildLoss => {
                "You may have difficulty hearing some frequencies. Consider a professional evaluation."
            }
            HearingTier::SignificantLoss => {
                "We recommend consulting an audiologist for a comprehensive hearing evaluation."
            }
        }
    }
}

/// Results view of a completed sweep.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HearingSummary {
    pub score: Percentage,
    pub tier: HearingTier,
    pub frequencies: Vec<HearingFrequencyResult>,
}

/// `round(heard / total * 100)`; untested frequencies count as not heard.
pub fn hearing_score(results: &[HearingFrequencyResult]) -> Percentage {
    let heard = results.iter().filter(|r| r.heard == Some(true)).count();
    Percentage::from_ratio(heard, results.len())
}

#[derive(Debug, Clone, PartialEq)]
pub struct HearingSweep {
    session: AssessmentSession<bool>,
    frequencies: Vec<HearingFrequencyResult>,
    volume: Percentage,
}

impl HearingSweep {
    pub fn new() -> Self {
        Self {
            session: AssessmentSession::new(TestKind::Hearing),
            frequencies: HEARING_FREQUENCIES
                .iter()
                .map(|&(frequency_hz, label)| HearingFrequencyResult {
                    frequency_hz,
                    label,
                    heard: None,
                })
                .collect(),
            volume: Percentage::new(DEFAULT_VOLUME),
        }
    }

    pub fn stage(&self) -> AssessmentStage {
        self.session.stage()
    }

    pub fn session(&self) -> &AssessmentSession<bool> {
        &self.session
    }

    pub fn frequencies(&self) -> &[HearingFrequencyResult] {
        &self.frequencies
    }

    /// Tone currently being played, while the sweep is in progress.
    pub fn current_frequency(&self) -> Option<&HearingFrequencyResult> {
        if !self.session.is_in_progress() {
            return None;
        }
        self.frequencies.get(self.session.step_index())
    }

    pub fn volume(&self) -> Percentage {
        self.volume
    }

    pub fn raise_volume(&mut self) {
        self.volume = self.volume.saturating_add(VOLUME_STEP);
    }

    pub fn lower_volume(&mut self) {
        self.volume = self.volume.saturating_add(-VOLUME_STEP);
    }

    pub fn start(&mut self) -> Result<(), AssessmentError> {
        self.session.start()
    }

    /// Records whether the current tone was heard and moves on.
    ///
    /// Answering the last tone moves the sweep to `Results`.
    pub fn respond(&mut self, heard: bool) -> Result<AssessmentStage, AssessmentError> {
        let index = self.session.step_index();
        let next = self.session.record(heard)?;
        if let Some(slot) = self.frequencies.get_mut(index) {
            slot.heard = Some(heard);
        }
        if next >= self.frequencies.len() {
            self.session.finish()?;
        }
        Ok(self.session.stage())
    }

    pub fn summary(&self) -> Option<HearingSummary> {
        if !self.session.is_complete() {
            return None;
        }
        let score = hearing_score(&self.frequencies);
        Some(HearingSummary {
            score,
            tier: HearingTier::from_score(score),
            frequencies: self.frequencies.clone(),
        })
    }

    /// Discards all answers and returns to the intro. Volume is kept.
    pub fn retake(&mut self) {
        let volume = self.volume;
        *self = Self::new();
        self.volume = volume;
    }
}

impl Default for HearingSweep {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(answers: &[bool]) -> HearingSweep {
        let mut sweep = HearingSweep::new();
        sweep.start().unwrap();
        for &heard in answers {
            sweep.respond(heard).unwrap();
        }
        sweep
    }

    #[test]
    fn frequencies_ascend_and_start_untested() {
        let sweep = HearingSweep::new();
        let hz: Vec<u32> = sweep.frequencies().iter().map(|f| f.frequency_hz).collect();
        assert_eq!(hz, vec![250, 500, 1000, 2000, 4000]);
        assert!(sweep.frequencies().iter().all(|f| f.heard.is_none()));
    }

    #[test]
    fn five_answers_reach_results() {
        let sweep = run(&[true, true, false, true, false]);
        assert_eq!(sweep.stage(), AssessmentStage::Results);
        assert!(sweep.current_frequency().is_none());
    }

    #[test]
    fn four_answers_stay_in_progress() {
        let sweep = run(&[true, true, true, true]);
        assert_eq!(sweep.stage(), AssessmentStage::InProgress);
        assert_eq!(sweep.current_frequency().unwrap().frequency_hz, 4000);
        assert!(sweep.summary().is_none());
    }

    #[test]
    fn all_heard_scores_100() {
        let summary = run(&[true; 5]).summary().unwrap();
        assert_eq!(summary.score.value(), 100);
        assert_eq!(summary.tier, HearingTier::Good);
    }

    #[test]
    fn none_heard_scores_0() {
        let summary = run(&[false; 5]).summary().unwrap();
        assert_eq!(summary.score.value(), 0);
        assert_eq!(summary.tier, HearingTier::SignificantLoss);
    }

    #[test]
    fn three_of_five_is_mild_loss() {
        let summary = run(&[true, false, true, false, true]).summary().unwrap();
        assert_eq!(summary.score.value(), 60);
        assert_eq!(summary.tier, HearingTier::MildLoss);
        assert_eq!(summary.frequencies[1].heard, Some(false));
    }

    #[test]
    fn answer_after_results_is_rejected() {
        let mut sweep = run(&[true; 5]);
        assert!(matches!(
            sweep.respond(true),
            Err(AssessmentError::NotInProgress(AssessmentStage::Results))
        ));
    }

    #[test]
    fn untested_frequencies_count_as_not_heard() {
        let sweep = run(&[true, true]);
        assert_eq!(hearing_score(sweep.frequencies()).value(), 40);
    }

    #[test]
    fn tier_thresholds() {
        assert_eq!(HearingTier::from_score(Percentage::new(80)), HearingTier::Good);
        assert_eq!(HearingTier::from_score(Percentage::new(79)), HearingTier::MildLoss);
        assert_eq!(HearingTier::from_score(Percentage::new(60)), HearingTier::MildLoss);
        assert_eq!(
            HearingTier::from_score(Percentage::new(59)),
            HearingTier::SignificantLoss
        );
        assert_eq!(HearingTier::Good.title(), "Good Hearing");
    }

    #[test]
    fn volume_moves_in_steps_of_ten_within_bounds() {
        let mut sweep = HearingSweep::new();
        assert_eq!(sweep.volume().value(), 50);
        sweep.raise_volume();
        assert_eq!(sweep.volume().value(), 60);
        for _ in 0..10 {
            sweep.raise_volume();
        }
        assert_eq!(sweep.volume().value(), 100);
        for _ in 0..20 {
            sweep.lower_volume();
        }
        assert_eq!(sweep.volume().value(), 0);
    }

    #[test]
    fn retake_clears_answers_but_keeps_volume() {
        let mut sweep = run(&[true; 5]);
        sweep.lower_volume();
        sweep.retake();

        assert_eq!(sweep.stage(), AssessmentStage::Intro);
        assert!(sweep.frequencies().iter().all(|f| f.heard.is_none()));
        assert!(sweep.session().responses().is_empty());
        assert_eq!(sweep.volume().value(), 40);
    }
}
