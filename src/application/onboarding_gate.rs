//! OnboardingGate - picks the launch route from the stored profile.

use std::sync::Arc;

use crate::domain::onboarding::EntryRoute;
use crate::ports::ProfileStore;

/// Decides between onboarding and the main screens at launch.
#[derive(Clone)]
pub struct OnboardingGate {
    store: Arc<dyn ProfileStore>,
}

impl OnboardingGate {
    pub fn new(store: Arc<dyn ProfileStore>) -> Self {
        Self { store }
    }

    /// `MainApp` only for a complete stored profile.
    ///
    /// A missing, partial or unreadable record sends the user through
    /// onboarding; storage errors are logged, never returned.
    pub async fn decide_entry_route(&self) -> EntryRoute {
        let route = match self.store.load_profile().await {
            Ok(profile) => EntryRoute::for_profile(profile.as_ref()),
            Err(e) => {
                tracing::warn!("Failed to load profile, starting onboarding: {}", e);
                EntryRoute::FirstRun
            }
        };

        tracing::info!(%route, "Decided entry route");
        route
    }
}
