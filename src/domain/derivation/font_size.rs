//! Font size derivation - maps eyesight correction to a reading size.

use crate::domain::foundation::ValidationError;
use crate::domain::user::{EyeSight, FontSize};

/// Growth of the base size per diopter of average correction.
pub const DIOPTER_SCALE_FACTOR: f64 = 0.8;

/// Stateless derivation of display settings from measurements.
pub struct SettingDerivation;

impl SettingDerivation {
    /// Recommended font size in pixels.
    ///
    /// `base_px * (1 + avg * 0.8)` where `avg` is the mean of the two
    /// diopter magnitudes, rounded to one decimal place. Returns `base_px`
    /// when both eyes need no correction.
    pub fn font_size_px(base_px: f64, left_diopter: f64, right_diopter: f64) -> f64 {
        let avg = (left_diopter.abs() + right_diopter.abs()) / 2.0;
        round_tenth(base_px * (1.0 + avg * DIOPTER_SCALE_FACTOR))
    }

    /// Typed form of [`SettingDerivation::font_size_px`].
    pub fn font_size(base: FontSize, eye_sight: &EyeSight) -> Result<FontSize, ValidationError> {
        FontSize::try_new(Self::font_size_px(
            base.px(),
            eye_sight.left_eye.value(),
            eye_sight.right_eye.value(),
        ))
    }

    /// OS font-scale multiplier for a size, relative to `reference`.
    pub fn font_scale(size: FontSize, reference: FontSize) -> f32 {
        (size.px() / reference.px()) as f32
    }
}

fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
