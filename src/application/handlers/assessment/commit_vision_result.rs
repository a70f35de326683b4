//! CommitVisionResult - stores the font size chosen in an eye test.

use std::sync::Arc;

use crate::application::DisplayContext;
use crate::domain::assessment::{SampleEyeOutcome, TestKind, VisionStepOutcome};
use crate::domain::foundation::{DomainError, ValidationError};
use crate::domain::user::{DerivedPreferences, FontSize};
use crate::ports::ProfileStore;

/// Command to make a test's recommendation the current font size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CommitVisionResultCommand {
    pub source: TestKind,
    pub recommended: FontSize,
}

impl CommitVisionResultCommand {
    pub fn from_vision_step(outcome: VisionStepOutcome) -> Self {
        Self {
            source: TestKind::EyeStep,
            recommended: outcome.recommended,
        }
    }

    pub fn from_sample_eye(outcome: &SampleEyeOutcome) -> Result<Self, ValidationError> {
        Ok(Self {
            source: TestKind::EyeMultiStep,
            recommended: FontSize::try_new(f64::from(outcome.recommended_px))?,
        })
    }
}

#[derive(Debug, Clone)]
pub struct CommitVisionResultResult {
    pub font_size: FontSize,
    pub preferences: DerivedPreferences,
}

/// Handler for committing eye-test results.
pub struct CommitVisionResultHandler {
    store: Arc<dyn ProfileStore>,
    display: DisplayContext,
}

impl CommitVisionResultHandler {
    pub fn new(store: Arc<dyn ProfileStore>, display: DisplayContext) -> Self {
        Self { store, display }
    }

    pub async fn handle(
        &self,
        cmd: CommitVisionResultCommand,
    ) -> Result<CommitVisionResultResult, DomainError> {
        // 1. Persist and publish the new size
        self.display.set(cmd.recommended).await?;

        // 2. Mirror into preferences
        let mut preferences = self
            .store
            .load_preferences()
            .await?
            .unwrap_or_default();
        preferences.font_size_px = cmd.recommended;
        self.store.save_preferences(&preferences).await?;

        tracing::info!(source = %cmd.source, "Committed test result {}", cmd.recommended);
        Ok(CommitVisionResultResult {
            font_size: cmd.recommended,
            preferences,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::MockProfileStore;
    use crate::domain::assessment::{SampleEyeTest, VisionResponse, VisionStepTest};

    async fn handler_for(store: Arc<MockProfileStore>) -> CommitVisionResultHandler {
        let display = DisplayContext::load(store.clone(), FontSize::REFERENCE).await;
        CommitVisionResultHandler::new(store, display)
    }

    #[tokio::test]
    async fn commits_vision_step_outcome() {
        let mut test = VisionStepTest::new();
        test.start().unwrap();
        test.respond(VisionResponse::TooSmall).unwrap();
        test.respond(VisionResponse::TooSmall).unwrap();
        test.respond(VisionResponse::Perfect).unwrap();
        let outcome = test.outcome().unwrap();

        let store = Arc::new(MockProfileStore::new());
        let handler = handler_for(store.clone()).await;
        let result = handler
            .handle(CommitVisionResultCommand::from_vision_step(outcome))
            .await
            .unwrap();

        assert_eq!(result.font_size.px(), 20.0);
        assert_eq!(store.font_size().unwrap().px(), 20.0);
        assert_eq!(store.preferences().unwrap().font_size_px.px(), 20.0);
    }

    #[tokio::test]
    async fn commits_sample_eye_outcome() {
        let mut test = SampleEyeTest::new();
        test.start().unwrap();
        test.confirm_distance().unwrap();
        test.select_size(22).unwrap();
        let outcome = test.complete().unwrap();

        let cmd = CommitVisionResultCommand::from_sample_eye(&outcome).unwrap();
        assert_eq!(cmd.source, TestKind::EyeMultiStep);

        let store = Arc::new(MockProfileStore::new());
        let result = handler_for(store.clone()).await.handle(cmd).await.unwrap();
        assert_eq!(result.font_size.px(), 22.0);
    }

    #[tokio::test]
    async fn storage_failure_leaves_display_unchanged() {
        let store = Arc::new(MockProfileStore::failing());
        let handler = handler_for(store).await;
        let cmd = CommitVisionResultCommand {
            source: TestKind::EyeStep,
            recommended: FontSize::try_new(30.0).unwrap(),
        };

        assert!(handler.handle(cmd).await.is_err());
        assert_eq!(handler.display.current(), FontSize::REFERENCE);
    }
}
