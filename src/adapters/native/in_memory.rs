//! In-memory native settings bridge.
//!
//! Simulates the OS side of the bridge: a revocable "modify settings" grant
//! and a system font scale that only changes while the grant is held.
//!
//! # Example
//!
//! ```ignore
//! let os = InMemoryNativeSettings::new(false).with_grant_on_request();
//!
//! os.request_modify_settings().await?;
//! assert!(os.check_modify_settings().await?);
//! ```

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::ports::{BridgeError, NativeSettings};

#[derive(Debug, Default)]
struct SimulatedOs {
    granted: bool,
    font_scale: Option<f32>,
    failing: bool,
    checks: usize,
    scale_writes: usize,
    permission_requests: usize,
    write_settings_requests: usize,
}

/// Simulated OS settings for tests and headless runs.
#[derive(Debug, Clone)]
pub struct InMemoryNativeSettings {
    os: Arc<RwLock<SimulatedOs>>,
    /// Whether opening the grant screen grants the permission.
    grant_on_request: bool,
}

impl InMemoryNativeSettings {
    /// Creates a simulated OS with the grant initially held or not.
    pub fn new(granted: bool) -> Self {
        Self {
            os: Arc::new(RwLock::new(SimulatedOs {
                granted,
                ..SimulatedOs::default()
            })),
            grant_on_request: false,
        }
    }

    /// The user accepts whenever the grant screen is opened.
    pub fn with_grant_on_request(mut self) -> Self {
        self.grant_on_request = true;
        self
    }

    pub async fn grant(&self) {
        self.os.write().await.granted = true;
    }

    /// Revokes the grant from outside the app, as the OS settings screen can.
    pub async fn revoke(&self) {
        self.os.write().await.granted = false;
    }

    /// Makes every native call fail until cleared.
    pub async fn set_failing(&self, failing: bool) {
        self.os.write().await.failing = failing;
    }

    /// Current system font scale; `None` until first written.
    pub async fn font_scale(&self) -> Option<f32> {
        self.os.read().await.font_scale
    }

    pub async fn check_count(&self) -> usize {
        self.os.read().await.checks
    }

    /// Number of accepted font-scale writes.
    pub async fn scale_write_count(&self) -> usize {
        self.os.read().await.scale_writes
    }

    pub async fn permission_request_count(&self) -> usize {
        self.os.read().await.permission_requests
    }

    pub async fn write_settings_request_count(&self) -> usize {
        self.os.read().await.write_settings_requests
    }
}

impl Default for InMemoryNativeSettings {
    fn default() -> Self {
        Self::new(false)
    }
}

fn simulated_failure(call: &str) -> BridgeError {
    BridgeError::Failed(format!("simulated failure in {}", call))
}

#[async_trait]
impl NativeSettings for InMemoryNativeSettings {
    async fn check_modify_settings(&self) -> Result<bool, BridgeError> {
        let mut os = self.os.write().await;
        os.checks += 1;
        if os.failing {
            return Err(simulated_failure("checkModifySettings"));
        }
        Ok(os.granted)
    }

    async fn request_modify_settings(&self) -> Result<(), BridgeError> {
        let mut os = self.os.write().await;
        os.permission_requests += 1;
        if os.failing {
            return Err(simulated_failure("requestModifySettings"));
        }
        if self.grant_on_request {
            os.granted = true;
        }
        Ok(())
    }

    async fn set_font_scale(&self, scale: f32) -> Result<bool, BridgeError> {
        let mut os = self.os.write().await;
        if os.failing {
            return Err(simulated_failure("setFontScale"));
        }
        if !os.granted {
            return Ok(false);
        }
        os.font_scale = Some(scale);
        os.scale_writes += 1;
        Ok(true)
    }

    async fn request_write_settings(&self) -> Result<(), BridgeError> {
        let mut os = self.os.write().await;
        os.write_settings_requests += 1;
        if os.failing {
            return Err(simulated_failure("requestWriteSettings"));
        }
        Ok(())
    }
}
