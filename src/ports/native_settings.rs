//! Native Settings Port - The OS-facing settings bridge.
//!
//! Two native modules sit behind this port: one that manages the
//! "modify system settings" grant and one that writes the system font scale.
//! Platforms without them report `BridgeError::Unavailable` from every call.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Errors from the native bridge.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BridgeError {
    /// The native module is not present on this platform.
    #[error("Native module unavailable: {0}")]
    Unavailable(String),

    /// The native call ran and failed.
    #[error("Native call failed: {0}")]
    Failed(String),
}

impl BridgeError {
    pub fn is_unavailable(&self) -> bool {
        matches!(self, BridgeError::Unavailable(_))
    }
}

impl From<BridgeError> for DomainError {
    fn from(err: BridgeError) -> Self {
        let code = match err {
            BridgeError::Unavailable(_) => ErrorCode::Unsupported,
            BridgeError::Failed(_) => ErrorCode::InternalError,
        };
        DomainError::new(code, err.to_string())
    }
}

/// Port for the OS settings bridge.
#[async_trait]
pub trait NativeSettings: Send + Sync {
    /// Query whether the app may modify system settings. Never prompts.
    async fn check_modify_settings(&self) -> Result<bool, BridgeError>;

    /// Open the OS grant screen. Returns once the screen has been launched,
    /// not when the user decides; callers must `check_modify_settings` again.
    async fn request_modify_settings(&self) -> Result<(), BridgeError>;

    /// Write the system font scale. `Ok(false)` when the OS refused the
    /// write, e.g. because the grant is missing.
    async fn set_font_scale(&self, scale: f32) -> Result<bool, BridgeError>;

    /// Open the OS write-settings screen.
    async fn request_write_settings(&self) -> Result<(), BridgeError>;
}
