//! UpdateProfile - Command handler for editing an existing profile.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::user::{Profile, ProfileUpdate};
use crate::ports::ProfileStore;

/// Command carrying already-validated field changes.
#[derive(Debug, Clone)]
pub struct UpdateProfileCommand {
    pub update: ProfileUpdate,
}

#[derive(Debug, Clone)]
pub struct UpdateProfileResult {
    pub profile: Profile,
    /// False when the update carried no fields and nothing was written.
    pub changed: bool,
}

/// Handler for profile edits.
pub struct UpdateProfileHandler {
    store: Arc<dyn ProfileStore>,
}

impl UpdateProfileHandler {
    pub fn new(store: Arc<dyn ProfileStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        cmd: UpdateProfileCommand,
    ) -> Result<UpdateProfileResult, DomainError> {
        // 1. Load current profile
        let current = self
            .store
            .load_profile()
            .await?
            .ok_or_else(|| DomainError::new(ErrorCode::ProfileNotFound, "Profile not found"))?;

        if cmd.update.is_empty() {
            return Ok(UpdateProfileResult {
                profile: current,
                changed: false,
            });
        }

        // 2. Overwrite exactly the carried fields
        let profile = cmd.update.apply_to(current);

        // 3. Persist
        self.store.save_profile(&profile).await?;

        Ok(UpdateProfileResult {
            profile,
            changed: true,
        })
    }
}
