//! Application handlers.
//!
//! Command handlers that orchestrate domain operations.

pub mod assessment;
pub mod preferences;
pub mod profile;

pub use assessment::{
    CommitVisionResultCommand, CommitVisionResultHandler, CommitVisionResultResult,
};
pub use preferences::{
    ConfirmPreferencesCommand, ConfirmPreferencesHandler, ConfirmPreferencesResult,
    RecalculateFontSizeCommand, RecalculateFontSizeHandler, RecalculateFontSizeResult,
    UpdatePreferencesCommand, UpdatePreferencesHandler, UpdatePreferencesResult,
};
pub use profile::{
    NextStep, SaveProfileCommand, SaveProfileHandler, SaveProfileResult,
    SubmitVisionProfileCommand, SubmitVisionProfileHandler, SubmitVisionProfileResult,
    UpdateProfileCommand, UpdateProfileHandler, UpdateProfileResult,
};
