//! Preference handlers.

mod confirm_preferences;
mod recalculate_font_size;
mod update_preferences;

pub use confirm_preferences::{
    ConfirmPreferencesCommand, ConfirmPreferencesHandler, ConfirmPreferencesResult,
};
pub use recalculate_font_size::{
    RecalculateFontSizeCommand, RecalculateFontSizeHandler, RecalculateFontSizeResult,
};
pub use update_preferences::{
    UpdatePreferencesCommand, UpdatePreferencesHandler, UpdatePreferencesResult,
};
