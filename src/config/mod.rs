//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `CLEARVIEW` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use clearview::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Records stored in {}", config.storage.data_dir.display());
//! ```

mod display;
mod error;
mod logging;
mod storage;

pub use display::DisplayConfig;
pub use error::{ConfigError, ValidationError};
pub use logging::LoggingConfig;
pub use storage::{StorageBackend, StorageConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a working
/// configuration. Load using [`AppConfig::load()`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Record storage (backend, data directory)
    #[serde(default)]
    pub storage: StorageConfig,

    /// Font size derivation and OS scaling constants
    #[serde(default)]
    pub display: DisplayConfig,

    /// Tracing output
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `CLEARVIEW` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `CLEARVIEW__STORAGE__DATA_DIR=/var/lib/clearview` -> `storage.data_dir`
    /// - `CLEARVIEW__DISPLAY__DERIVATION_BASE_PX=15` -> `display.derivation_base_px`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("CLEARVIEW")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.storage.validate()?;
        self.display.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::path::PathBuf;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: [&str; 6] = [
        "CLEARVIEW__STORAGE__BACKEND",
        "CLEARVIEW__STORAGE__DATA_DIR",
        "CLEARVIEW__DISPLAY__REFERENCE_BASE_PX",
        "CLEARVIEW__DISPLAY__DERIVATION_BASE_PX",
        "CLEARVIEW__LOGGING__LOG_LEVEL",
        "CLEARVIEW__LOGGING__JSON",
    ];

    /// Helper to clear environment variables after testing
    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_load_defaults_from_empty_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.storage.backend, StorageBackend::File);
        assert_eq!(config.display.reference_base_px, 16.0);
        assert_eq!(config.display.derivation_base_px, 14.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("CLEARVIEW__STORAGE__BACKEND", "memory");
        env::set_var("CLEARVIEW__STORAGE__DATA_DIR", "/tmp/clearview");
        env::set_var("CLEARVIEW__DISPLAY__DERIVATION_BASE_PX", "15");
        env::set_var("CLEARVIEW__LOGGING__JSON", "true");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.storage.backend, StorageBackend::Memory);
        assert_eq!(config.storage.data_dir, PathBuf::from("/tmp/clearview"));
        assert_eq!(config.display.derivation_base_px, 15.0);
        assert!(config.logging.json);
    }

    #[test]
    fn test_validate_rejects_bad_reference() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("CLEARVIEW__DISPLAY__REFERENCE_BASE_PX", "-4");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidPixelSize { .. })
        ));
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(AppConfig::default().validate().is_ok());
    }
}
