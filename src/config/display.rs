//! Display configuration

use serde::Deserialize;

use crate::application::DisplaySettings;
use crate::domain::assessment::{VISION_MAX_PX, VISION_MIN_PX};
use crate::domain::user::FontSize;

use super::error::ValidationError;

/// Pixel constants for derivation and OS font scaling
#[derive(Debug, Clone, Deserialize)]
pub struct DisplayConfig {
    /// Size the OS renders at font scale 1.0
    #[serde(default = "default_reference_base_px")]
    pub reference_base_px: f64,

    /// Recommended size for uncorrected eyes
    #[serde(default = "default_derivation_base_px")]
    pub derivation_base_px: f64,

    /// First candidate shown by the vision step test
    #[serde(default = "default_vision_test_start_px")]
    pub vision_test_start_px: u32,
}

impl DisplayConfig {
    pub fn reference_base(&self) -> Result<FontSize, ValidationError> {
        pixel_size("display.reference_base_px", self.reference_base_px)
    }

    pub fn derivation_base(&self) -> Result<FontSize, ValidationError> {
        pixel_size("display.derivation_base_px", self.derivation_base_px)
    }

    /// Validated sizes for building the application state
    pub fn settings(&self) -> Result<DisplaySettings, ValidationError> {
        if !(VISION_MIN_PX..=VISION_MAX_PX).contains(&self.vision_test_start_px) {
            return Err(ValidationError::VisionStartOutOfRange {
                min: VISION_MIN_PX,
                max: VISION_MAX_PX,
                value: self.vision_test_start_px,
            });
        }
        Ok(DisplaySettings {
            reference: self.reference_base()?,
            derivation_base: self.derivation_base()?,
            vision_test_start_px: self.vision_test_start_px,
        })
    }

    /// Validate display configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.settings().map(|_| ())
    }
}

fn pixel_size(field: &'static str, value: f64) -> Result<FontSize, ValidationError> {
    FontSize::try_new(value).map_err(|_| ValidationError::InvalidPixelSize { field, value })
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            reference_base_px: default_reference_base_px(),
            derivation_base_px: default_derivation_base_px(),
            vision_test_start_px: default_vision_test_start_px(),
        }
    }
}

fn default_reference_base_px() -> f64 {
    16.0
}

fn default_derivation_base_px() -> f64 {
    14.0
}

fn default_vision_test_start_px() -> u32 {
    16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_defaults() {
        let config = DisplayConfig::default();
        assert_eq!(config.reference_base().unwrap().px(), 16.0);
        assert_eq!(config.derivation_base().unwrap().px(), 14.0);
        assert_eq!(config.vision_test_start_px, 16);
        assert!(config.validate().is_ok());
        assert_eq!(config.settings().unwrap(), DisplaySettings::default());
    }

    #[test]
    fn test_settings_carry_configured_values() {
        let config = DisplayConfig {
            reference_base_px: 18.0,
            derivation_base_px: 15.0,
            vision_test_start_px: 20,
        };
        let settings = config.settings().unwrap();
        assert_eq!(settings.reference.px(), 18.0);
        assert_eq!(settings.derivation_base.px(), 15.0);
        assert_eq!(settings.vision_test_start_px, 20);
    }

    #[test]
    fn test_non_positive_base_rejected() {
        let config = DisplayConfig {
            reference_base_px: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidPixelSize { field: "display.reference_base_px", .. })
        ));

        let config = DisplayConfig {
            derivation_base_px: f64::NAN,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_vision_start_must_be_in_test_range() {
        let config = DisplayConfig {
            vision_test_start_px: 40,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::VisionStartOutOfRange { value: 40, .. })
        ));
    }
}
