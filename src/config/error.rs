//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Pixel size '{field}' must be a positive finite number, got {value}")]
    InvalidPixelSize { field: &'static str, value: f64 },

    #[error("Vision test start must be between {min} and {max}px, got {value}")]
    VisionStartOutOfRange { min: u32, max: u32, value: u32 },

    #[error("Invalid log filter: {0}")]
    InvalidLogFilter(String),
}
