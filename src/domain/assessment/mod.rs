//! Assessment module - guided self-report tests.
//!
//! Every test shares one shape: `Intro -> step 1 .. step n -> Results`,
//! strictly forward, with `retake` discarding the session. Sessions live in
//! memory only; the final result is handed to the caller to persist.
//!
//! - `VisionStepTest` - nudge a font size until it reads comfortably
//! - `SampleEyeTest` - advisory distance check and font pick
//! - `HearingSweep` - five ascending tones, yes/no each

mod errors;
mod hearing;
mod mode;
mod sample_eye;
mod session;
mod stage;
mod vision_step;

pub use errors::AssessmentError;
pub use hearing::{
    hearing_score, HearingFrequencyResult, HearingSummary, HearingSweep, HearingTier,
    DEFAULT_VOLUME, HEARING_FREQUENCIES, VOLUME_STEP,
};
pub use mode::AssessmentMode;
pub use sample_eye::{
    SampleEyeOutcome, SampleEyeResponse, SampleEyeStep, SampleEyeTest, RECOMMENDED_DISTANCE,
    SAMPLE_DEFAULT_PX, SAMPLE_FONT_SIZES,
};
pub use session::AssessmentSession;
pub use stage::{AssessmentStage, TestKind};
pub use vision_step::{
    VisionResponse, VisionStepOutcome, VisionStepTest, VISION_MAX_PX, VISION_MIN_PX,
    VISION_START_PX, VISION_STEP_PX,
};
