//! Percentage value object (0-100 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A value between 0 and 100 inclusive.
///
/// Used for the hearing score and the hearing-test volume level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Percentage(u8);

impl Percentage {
    /// Zero percent.
    pub const ZERO: Self = Self(0);

    /// One hundred percent.
    pub const HUNDRED: Self = Self(100);

    /// Creates a new Percentage, clamping to valid range.
    pub fn new(value: u8) -> Self {
        Self(value.min(100))
    }

    /// Creates a Percentage, returning error if out of range.
    pub fn try_new(value: u8) -> Result<Self, ValidationError> {
        if value > 100 {
            return Err(ValidationError::out_of_range(
                "percentage",
                0,
                100,
                i64::from(value),
            ));
        }
        Ok(Self(value))
    }

    /// `round(part / whole * 100)`, zero when `whole` is zero.
    pub fn from_ratio(part: usize, whole: usize) -> Self {
        if whole == 0 {
            return Self::ZERO;
        }
        let pct = (part.min(whole) as f64 / whole as f64 * 100.0).round();
        Self(pct as u8)
    }

    /// Returns the value as u8.
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Adds `delta` points, saturating at 0 and 100.
    pub fn saturating_add(&self, delta: i16) -> Self {
        let next = (i16::from(self.0) + delta).clamp(0, 100);
        Self(next as u8)
    }

    /// Returns the value as a fraction (0.0 to 1.0).
    pub fn as_fraction(&self) -> f64 {
        f64::from(self.0) / 100.0
    }
}

impl Default for Percentage {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}
