//! Application layer - services and command handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//!
//! - `OnboardingGate` - launch routing
//! - `PermissionGateway` - OS settings grant
//! - `SettingsApplier` - font size to OS font scale
//! - `DisplayContext` - current font size shared with screens
//! - `AppState` - shared dependencies and handler construction

mod app_state;
mod display_context;
pub mod handlers;
mod onboarding_gate;
mod permission_gateway;
mod settings_applier;

pub use app_state::{AppState, DisplaySettings};
pub use display_context::DisplayContext;
pub use handlers::{
    CommitVisionResultCommand, CommitVisionResultHandler, CommitVisionResultResult,
    ConfirmPreferencesCommand, ConfirmPreferencesHandler, ConfirmPreferencesResult, NextStep,
    RecalculateFontSizeCommand, RecalculateFontSizeHandler, RecalculateFontSizeResult,
    SaveProfileCommand, SaveProfileHandler, SaveProfileResult, SubmitVisionProfileCommand,
    SubmitVisionProfileHandler, SubmitVisionProfileResult, UpdatePreferencesCommand,
    UpdatePreferencesHandler, UpdatePreferencesResult, UpdateProfileCommand,
    UpdateProfileHandler, UpdateProfileResult,
};
pub use onboarding_gate::OnboardingGate;
pub use permission_gateway::{PermissionGateway, PermissionStatus};
pub use settings_applier::{ApplyOutcome, SettingsApplier};
