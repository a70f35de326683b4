//! SettingsApplier - pushes a font size to the OS font scale.
//!
//! Every apply re-checks the grant first. Without it nothing is written and
//! the caller decides how to prompt the user. With it the scale is always
//! written, since the OS value may have been changed outside the app; the
//! bridge write is idempotent.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use crate::domain::derivation::SettingDerivation;
use crate::domain::user::FontSize;
use crate::ports::{BridgeError, NativeSettings};

use super::permission_gateway::{PermissionGateway, PermissionStatus};

/// Result of one apply attempt.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ApplyOutcome {
    /// The OS now uses `scale`.
    Applied { scale: f32 },
    /// The grant is missing; nothing was written.
    PermissionRequired,
    /// The platform has no settings bridge.
    Unsupported,
    /// The bridge reported an error.
    Failed { reason: String },
    /// No recommended size was stored; nothing was written.
    NothingToApply,
}

impl ApplyOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, ApplyOutcome::Applied { .. })
    }
}

impl fmt::Display for ApplyOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApplyOutcome::Applied { scale } => write!(f, "applied (scale {:.3})", scale),
            ApplyOutcome::PermissionRequired => write!(f, "permission required"),
            ApplyOutcome::Unsupported => write!(f, "unsupported"),
            ApplyOutcome::Failed { reason } => write!(f, "failed: {}", reason),
            ApplyOutcome::NothingToApply => write!(f, "nothing to apply"),
        }
    }
}

/// Applies font sizes as an OS font scale of `size / reference`.
#[derive(Clone)]
pub struct SettingsApplier {
    gateway: PermissionGateway,
    bridge: Arc<dyn NativeSettings>,
    reference: FontSize,
}

impl SettingsApplier {
    pub fn new(gateway: PermissionGateway, bridge: Arc<dyn NativeSettings>) -> Self {
        Self::with_reference(gateway, bridge, FontSize::REFERENCE)
    }

    /// Uses `reference` as the size rendered at scale 1.0.
    pub fn with_reference(
        gateway: PermissionGateway,
        bridge: Arc<dyn NativeSettings>,
        reference: FontSize,
    ) -> Self {
        Self {
            gateway,
            bridge,
            reference,
        }
    }

    pub fn reference(&self) -> FontSize {
        self.reference
    }

    /// Returns `true` only when the OS now renders at the requested size.
    pub async fn apply(&self, size: FontSize) -> bool {
        self.try_apply(size).await.is_applied()
    }

    /// Detailed form of [`SettingsApplier::apply`].
    pub async fn try_apply(&self, size: FontSize) -> ApplyOutcome {
        match self.gateway.status().await {
            PermissionStatus::Granted => {}
            PermissionStatus::Denied => {
                tracing::info!("Not applying {}: settings permission missing", size);
                return ApplyOutcome::PermissionRequired;
            }
            PermissionStatus::Unsupported => return ApplyOutcome::Unsupported,
        }

        let scale = SettingDerivation::font_scale(size, self.reference);
        match self.bridge.set_font_scale(scale).await {
            Ok(true) => {
                tracing::info!("Applied font scale {:.3} for {}", scale, size);
                ApplyOutcome::Applied { scale }
            }
            // Grant revoked between the check and the write
            Ok(false) => ApplyOutcome::PermissionRequired,
            Err(BridgeError::Unavailable(_)) => ApplyOutcome::Unsupported,
            Err(e) => {
                tracing::warn!("Failed to apply font scale {:.3}: {}", scale, e);
                ApplyOutcome::Failed {
                    reason: e.to_string(),
                }
            }
        }
    }
}
