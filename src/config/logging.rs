//! Logging configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Tracing subscriber settings
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Rust log filter directive
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Emit JSON lines instead of human-readable output
    #[serde(default)]
    pub json: bool,
}

impl LoggingConfig {
    /// Validate logging configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        tracing_subscriber::EnvFilter::try_new(&self.log_level)
            .map(|_| ())
            .map_err(|e| ValidationError::InvalidLogFilter(e.to_string()))
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            json: false,
        }
    }
}

fn default_log_level() -> String {
    "info,clearview=debug".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logging_defaults() {
        let config = LoggingConfig::default();
        assert_eq!(config.log_level, "info,clearview=debug");
        assert!(!config.json);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_filter_rejected() {
        let config = LoggingConfig {
            log_level: "clearview=notalevel".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidLogFilter(_))
        ));
    }
}
