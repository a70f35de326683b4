//! PermissionGateway - the "modify system settings" capability.
//!
//! The grant is read from the OS on every check and never cached: it can be
//! revoked from the system settings screen at any time.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use crate::ports::{BridgeError, NativeSettings};

/// Outcome of one permission query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PermissionStatus {
    Granted,
    Denied,
    /// The platform has no settings bridge.
    Unsupported,
}

impl PermissionStatus {
    pub fn is_granted(&self) -> bool {
        matches!(self, PermissionStatus::Granted)
    }
}

impl fmt::Display for PermissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PermissionStatus::Granted => "granted",
            PermissionStatus::Denied => "denied",
            PermissionStatus::Unsupported => "unsupported",
        };
        write!(f, "{}", s)
    }
}

/// Queries and requests the settings grant.
#[derive(Clone)]
pub struct PermissionGateway {
    bridge: Arc<dyn NativeSettings>,
}

impl PermissionGateway {
    pub fn new(bridge: Arc<dyn NativeSettings>) -> Self {
        Self { bridge }
    }

    /// Whether the grant is currently held. Bridge failures read as `false`.
    pub async fn check(&self) -> bool {
        self.status().await.is_granted()
    }

    /// Three-way form of [`PermissionGateway::check`].
    pub async fn status(&self) -> PermissionStatus {
        match self.bridge.check_modify_settings().await {
            Ok(true) => PermissionStatus::Granted,
            Ok(false) => PermissionStatus::Denied,
            Err(BridgeError::Unavailable(module)) => {
                tracing::debug!("Permission check unsupported: {} missing", module);
                PermissionStatus::Unsupported
            }
            Err(e) => {
                tracing::warn!("Permission check failed, treating as denied: {}", e);
                PermissionStatus::Denied
            }
        }
    }

    /// Opens the OS grant screen.
    ///
    /// Does not report the user's decision; call [`PermissionGateway::check`]
    /// again once the app is back in the foreground.
    pub async fn request(&self) {
        match self.bridge.request_modify_settings().await {
            Ok(()) => tracing::info!("Opened modify-settings grant screen"),
            Err(BridgeError::Unavailable(module)) => {
                tracing::info!("Cannot request settings permission: {} missing", module)
            }
            Err(e) => tracing::warn!("Failed to open grant screen: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::native::{InMemoryNativeSettings, UnsupportedNativeSettings};

    #[tokio::test]
    async fn reports_current_grant() {
        let os = InMemoryNativeSettings::new(false);
        let gateway = PermissionGateway::new(Arc::new(os.clone()));

        assert!(!gateway.check().await);
        os.grant().await;
        assert!(gateway.check().await);
        os.revoke().await;
        assert!(!gateway.check().await);
    }

    #[tokio::test]
    async fn check_is_not_cached() {
        let os = InMemoryNativeSettings::new(true);
        let gateway = PermissionGateway::new(Arc::new(os.clone()));

        gateway.check().await;
        gateway.check().await;
        assert_eq!(os.check_count().await, 2);
    }

    #[tokio::test]
    async fn bridge_failure_reads_as_denied() {
        let os = InMemoryNativeSettings::new(true);
        os.set_failing(true).await;
        let gateway = PermissionGateway::new(Arc::new(os));

        assert!(!gateway.check().await);
        assert_eq!(gateway.status().await, PermissionStatus::Denied);
    }

    #[tokio::test]
    async fn missing_bridge_is_unsupported() {
        let gateway = PermissionGateway::new(Arc::new(UnsupportedNativeSettings::new()));

        assert_eq!(gateway.status().await, PermissionStatus::Unsupported);
        assert!(!gateway.check().await);
        // Must not panic
        gateway.request().await;
    }

    #[tokio::test]
    async fn request_then_check_sees_grant() {
        let os = InMemoryNativeSettings::new(false).with_grant_on_request();
        let gateway = PermissionGateway::new(Arc::new(os.clone()));

        gateway.request().await;
        assert!(gateway.check().await);
        assert_eq!(os.permission_request_count().await, 1);
    }
}
