//! SaveProfile - Command handler for saving a fully filled-in profile form.

use std::sync::Arc;

use crate::domain::foundation::DomainError;
use crate::domain::user::{Profile, ProfileDraft};
use crate::ports::ProfileStore;

/// Command to validate and store a profile form.
#[derive(Debug, Clone)]
pub struct SaveProfileCommand {
    pub draft: ProfileDraft,
}

/// Result of a successful save.
#[derive(Debug, Clone)]
pub struct SaveProfileResult {
    pub profile: Profile,
}

/// Handler for saving profiles.
pub struct SaveProfileHandler {
    store: Arc<dyn ProfileStore>,
}

impl SaveProfileHandler {
    pub fn new(store: Arc<dyn ProfileStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: SaveProfileCommand) -> Result<SaveProfileResult, DomainError> {
        // 1. Validate before any I/O
        let profile = cmd.draft.validate()?;

        // 2. Persist (overwrites the previous record)
        self.store.save_profile(&profile).await?;

        Ok(SaveProfileResult { profile })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::MockProfileStore;
    use crate::domain::foundation::ErrorCode;

    fn draft() -> ProfileDraft {
        ProfileDraft {
            name: "Ana".to_string(),
            age: "34".to_string(),
            gender: "female".to_string(),
            email: " ana@example.com ".to_string(),
            phone_number: String::new(),
            left_eye: "-2.25".to_string(),
            right_eye: "-2.5".to_string(),
        }
    }

    #[tokio::test]
    async fn saves_valid_draft() {
        let store = Arc::new(MockProfileStore::new());
        let handler = SaveProfileHandler::new(store.clone());

        let result = handler.handle(SaveProfileCommand { draft: draft() }).await.unwrap();

        assert!(result.profile.is_complete());
        assert_eq!(result.profile.email.as_deref(), Some("ana@example.com"));
        assert_eq!(result.profile.phone_number, None);
        assert_eq!(store.profile(), Some(result.profile));
    }

    #[tokio::test]
    async fn invalid_age_blocks_save() {
        let store = Arc::new(MockProfileStore::new());
        let handler = SaveProfileHandler::new(store.clone());

        let mut bad = draft();
        bad.age = "121".to_string();
        let err = handler.handle(SaveProfileCommand { draft: bad }).await.unwrap_err();

        assert_eq!(err.code, ErrorCode::OutOfRange);
        assert_eq!(store.writes(), 0);
    }

    #[tokio::test]
    async fn non_numeric_eye_blocks_save() {
        let store = Arc::new(MockProfileStore::new());
        let handler = SaveProfileHandler::new(store.clone());

        let mut bad = draft();
        bad.right_eye = "blurry".to_string();
        let err = handler.handle(SaveProfileCommand { draft: bad }).await.unwrap_err();

        assert!(err.is_validation());
        assert_eq!(store.profile(), None);
    }

    #[tokio::test]
    async fn storage_failure_is_reported() {
        let handler = SaveProfileHandler::new(Arc::new(MockProfileStore::failing()));

        let err = handler.handle(SaveProfileCommand { draft: draft() }).await.unwrap_err();

        assert_eq!(err.code, ErrorCode::StorageError);
    }
}
