//! Profile handlers.

mod save_profile;
mod submit_vision_profile;
mod update_profile;

pub use save_profile::{SaveProfileCommand, SaveProfileHandler, SaveProfileResult};
pub use submit_vision_profile::{
    NextStep, SubmitVisionProfileCommand, SubmitVisionProfileHandler, SubmitVisionProfileResult,
};
pub use update_profile::{UpdateProfileCommand, UpdateProfileHandler, UpdateProfileResult};
