//! ConfirmPreferences - applies the recommended font size to the OS.
//!
//! Nothing is written without the settings grant. With it, the confirmation
//! marker is stored and, when a `@font_size` record exists, it is applied as
//! the system font scale and the OS write-settings screen is opened.

use std::sync::Arc;

use crate::application::{ApplyOutcome, PermissionGateway, PermissionStatus, SettingsApplier};
use crate::domain::foundation::DomainError;
use crate::domain::user::FontSize;
use crate::ports::{NativeSettings, ProfileStore};

/// Command to confirm preferences and push them to the OS.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfirmPreferencesCommand;

#[derive(Debug, Clone)]
pub struct ConfirmPreferencesResult {
    /// The size that was applied; `None` when the grant or the stored size
    /// was missing.
    pub font_size: Option<FontSize>,
    pub outcome: ApplyOutcome,
}

/// Handler for the preferences confirmation step.
pub struct ConfirmPreferencesHandler {
    store: Arc<dyn ProfileStore>,
    gateway: PermissionGateway,
    applier: SettingsApplier,
    bridge: Arc<dyn NativeSettings>,
}

impl ConfirmPreferencesHandler {
    pub fn new(
        store: Arc<dyn ProfileStore>,
        gateway: PermissionGateway,
        applier: SettingsApplier,
        bridge: Arc<dyn NativeSettings>,
    ) -> Self {
        Self {
            store,
            gateway,
            applier,
            bridge,
        }
    }

    pub async fn handle(
        &self,
        _cmd: ConfirmPreferencesCommand,
    ) -> Result<ConfirmPreferencesResult, DomainError> {
        // 1. Permission gate
        match self.gateway.status().await {
            PermissionStatus::Granted => {}
            PermissionStatus::Denied => {
                return Ok(ConfirmPreferencesResult {
                    font_size: None,
                    outcome: ApplyOutcome::PermissionRequired,
                })
            }
            PermissionStatus::Unsupported => {
                return Ok(ConfirmPreferencesResult {
                    font_size: None,
                    outcome: ApplyOutcome::Unsupported,
                })
            }
        }

        // 2. Read the recommendation before anything is written
        let font_size = self.store.load_font_size().await?;

        // 3. Record confirmation
        self.store.mark_preferences_confirmed().await?;

        let Some(size) = font_size else {
            tracing::info!("Confirmed preferences without a stored font size");
            return Ok(ConfirmPreferencesResult {
                font_size: None,
                outcome: ApplyOutcome::NothingToApply,
            });
        };

        // 4. Apply and hand over to the OS settings screen
        let outcome = self.applier.try_apply(size).await;
        if let Err(e) = self.bridge.request_write_settings().await {
            tracing::warn!("Failed to open write-settings screen: {}", e);
        }

        tracing::info!(%outcome, "Confirmed preferences");
        Ok(ConfirmPreferencesResult {
            font_size: Some(size),
            outcome,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::native::{InMemoryNativeSettings, UnsupportedNativeSettings};
    use crate::adapters::profile::KeyValueProfileStore;
    use crate::adapters::storage::InMemoryKeyValueStore;
    use crate::application::handlers::test_support::MockProfileStore;
    use crate::domain::foundation::ErrorCode;
    use crate::ports::keys;

    fn handler_for(
        store: Arc<MockProfileStore>,
        bridge: Arc<dyn NativeSettings>,
    ) -> ConfirmPreferencesHandler {
        let gateway = PermissionGateway::new(bridge.clone());
        let applier = SettingsApplier::new(gateway.clone(), bridge.clone());
        ConfirmPreferencesHandler::new(store, gateway, applier, bridge)
    }

    #[tokio::test]
    async fn applies_stored_font_size_when_granted() {
        let store = Arc::new(MockProfileStore::new().with_font_size(24.0));
        let os = InMemoryNativeSettings::new(true);
        let handler = handler_for(store.clone(), Arc::new(os.clone()));

        let result = handler.handle(ConfirmPreferencesCommand).await.unwrap();

        assert_eq!(result.outcome, ApplyOutcome::Applied { scale: 1.5 });
        assert_eq!(result.font_size.unwrap().px(), 24.0);
        assert!(store.confirmed());
        assert_eq!(os.font_scale().await, Some(1.5));
        assert_eq!(os.write_settings_request_count().await, 1);
    }

    #[tokio::test]
    async fn without_grant_nothing_is_written() {
        let store = Arc::new(MockProfileStore::new().with_font_size(24.0));
        let os = InMemoryNativeSettings::new(false);
        let handler = handler_for(store.clone(), Arc::new(os.clone()));

        let result = handler.handle(ConfirmPreferencesCommand).await.unwrap();

        assert_eq!(result.outcome, ApplyOutcome::PermissionRequired);
        assert_eq!(result.font_size, None);
        assert!(!store.confirmed());
        assert_eq!(os.font_scale().await, None);
        assert_eq!(os.write_settings_request_count().await, 0);
    }

    #[tokio::test]
    async fn unsupported_platform_is_not_an_error() {
        let store = Arc::new(MockProfileStore::new().with_font_size(24.0));
        let handler = handler_for(store.clone(), Arc::new(UnsupportedNativeSettings::new()));

        let result = handler.handle(ConfirmPreferencesCommand).await.unwrap();

        assert_eq!(result.outcome, ApplyOutcome::Unsupported);
        assert!(!store.confirmed());
    }

    #[tokio::test]
    async fn missing_font_size_confirms_without_applying() {
        let store = Arc::new(MockProfileStore::new());
        let os = InMemoryNativeSettings::new(true);
        let handler = handler_for(store.clone(), Arc::new(os.clone()));

        let result = handler.handle(ConfirmPreferencesCommand).await.unwrap();

        assert_eq!(result.outcome, ApplyOutcome::NothingToApply);
        assert_eq!(result.font_size, None);
        assert!(store.confirmed());
        assert_eq!(os.font_scale().await, None);
        assert_eq!(os.write_settings_request_count().await, 0);
    }

    #[tokio::test]
    async fn unreadable_font_size_leaves_confirmation_unwritten() {
        let kv = InMemoryKeyValueStore::with_records([(keys::FONT_SIZE, "huge")]);
        let store: Arc<dyn ProfileStore> = Arc::new(KeyValueProfileStore::new(Arc::new(kv)));
        let bridge: Arc<dyn NativeSettings> = Arc::new(InMemoryNativeSettings::new(true));
        let gateway = PermissionGateway::new(bridge.clone());
        let applier = SettingsApplier::new(gateway.clone(), bridge.clone());
        let handler = ConfirmPreferencesHandler::new(store.clone(), gateway, applier, bridge);

        let err = handler.handle(ConfirmPreferencesCommand).await.unwrap_err();

        assert_eq!(err.code, ErrorCode::SerializationError);
        assert!(!store.preferences_confirmed().await.unwrap());
    }
}
