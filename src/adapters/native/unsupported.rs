//! Native settings adapter for platforms without the native modules.

use async_trait::async_trait;

use crate::ports::{BridgeError, NativeSettings};

const PERMISSION_MODULE: &str = "PermissionModule";
const FONT_SCALE_MODULE: &str = "FontScale";

/// Bridge that reports every native module as missing.
///
/// Callers treat `BridgeError::Unavailable` as "unsupported", never as a
/// crash, so the rest of the app keeps working with computed settings.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnsupportedNativeSettings;

impl UnsupportedNativeSettings {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl NativeSettings for UnsupportedNativeSettings {
    async fn check_modify_settings(&self) -> Result<bool, BridgeError> {
        Err(BridgeError::Unavailable(PERMISSION_MODULE.to_string()))
    }

    async fn request_modify_settings(&self) -> Result<(), BridgeError> {
        Err(BridgeError::Unavailable(PERMISSION_MODULE.to_string()))
    }

    async fn set_font_scale(&self, _scale: f32) -> Result<bool, BridgeError> {
        Err(BridgeError::Unavailable(FONT_SCALE_MODULE.to_string()))
    }

    async fn request_write_settings(&self) -> Result<(), BridgeError> {
        Err(BridgeError::Unavailable(FONT_SCALE_MODULE.to_string()))
    }
}
