//! Timestamp value object for immutable points in time.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};

/// Immutable point in time, always UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(chrono::DateTime<Utc>);

impl Timestamp {
    /// Creates a timestamp for the current moment.
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Returns the duration from another timestamp to this one.
    ///
    /// Returns negative duration if other is after self.
    pub fn duration_since(&self, other: &Timestamp) -> Duration {
        self.0.signed_duration_since(other.0)
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Self::now()
    }
}
