//! Value objects for profile measurements.
//!
//! Each value validates on construction. Deserialization accepts both JSON
//! numbers and numeric strings because earlier schema versions persisted
//! every form field as a string.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

use crate::domain::foundation::ValidationError;

/// Youngest accepted age.
pub const MIN_AGE: u8 = 1;

/// Oldest accepted age.
pub const MAX_AGE: u8 = 120;

/// Either shape a numeric field may take in a stored record.
#[derive(Deserialize)]
#[serde(untagged)]
pub(super) enum NumberOrString {
    Number(f64),
    Text(String),
}

impl NumberOrString {
    pub(super) fn into_text(self) -> String {
        match self {
            NumberOrString::Number(n) => n.to_string(),
            NumberOrString::Text(s) => s,
        }
    }
}

fn parse_number(field: &str, raw: &str) -> Result<f64, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::empty_field(field));
    }
    let value: f64 = trimmed
        .parse()
        .map_err(|_| ValidationError::invalid_format(field, format!("'{}' is not a number", trimmed)))?;
    if !value.is_finite() {
        return Err(ValidationError::invalid_format(field, "must be a finite number"));
    }
    Ok(value)
}

// ════════════════════════════════════════════════════════════════════════════
// Age
// ════════════════════════════════════════════════════════════════════════════

/// Age in whole years, 1 to 120 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Age(u8);

impl Age {
    /// Creates an age, rejecting values outside 1..=120.
    pub fn try_new(years: i64) -> Result<Self, ValidationError> {
        if years < i64::from(MIN_AGE) || years > i64::from(MAX_AGE) {
            return Err(ValidationError::out_of_range(
                "age",
                i64::from(MIN_AGE),
                i64::from(MAX_AGE),
                years,
            ));
        }
        Ok(Self(years as u8))
    }

    /// Parses a form value such as `"42"`.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let value = parse_number("age", raw)?;
        if value.fract() != 0.0 {
            return Err(ValidationError::invalid_format("age", "must be a whole number"));
        }
        Self::try_new(value as i64)
    }

    pub fn years(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for Age {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Age {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.0)
    }
}

impl<'de> Deserialize<'de> for Age {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = NumberOrString::deserialize(deserializer)?;
        Age::parse(&raw.into_text()).map_err(de::Error::custom)
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Diopter
// ════════════════════════════════════════════════════════════════════════════

/// Refractive correction strength of one eye, e.g. `-2.25`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Diopter(f64);

impl Diopter {
    /// No correction.
    pub const ZERO: Self = Self(0.0);

    /// Creates a diopter value; must be finite.
    pub fn try_new(value: f64) -> Result<Self, ValidationError> {
        if !value.is_finite() {
            return Err(ValidationError::invalid_format("eyeSight", "must be a finite number"));
        }
        Ok(Self(value))
    }

    /// Parses a form value for the named eye field.
    pub fn parse(field: &str, raw: &str) -> Result<Self, ValidationError> {
        parse_number(field, raw).map(Self)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// Correction strength regardless of sign.
    pub fn magnitude(&self) -> f64 {
        self.0.abs()
    }
}

impl fmt::Display for Diopter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Diopter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.0)
    }
}

impl<'de> Deserialize<'de> for Diopter {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = NumberOrString::deserialize(deserializer)?;
        Diopter::parse("eyeSight", &raw.into_text()).map_err(de::Error::custom)
    }
}

// ════════════════════════════════════════════════════════════════════════════
// FontSize
// ════════════════════════════════════════════════════════════════════════════

/// A font size in pixels. Always finite and positive.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct FontSize(f64);

impl FontSize {
    /// 16 px, the size the OS renders at a font scale of 1.0.
    pub const REFERENCE: Self = Self(16.0);

    /// 14 px, the recommended size for eyes that need no correction.
    pub const DERIVATION_BASE: Self = Self(14.0);

    /// Creates a font size; must be finite and greater than zero.
    pub fn try_new(px: f64) -> Result<Self, ValidationError> {
        if !px.is_finite() || px <= 0.0 {
            return Err(ValidationError::invalid_format(
                "fontSize",
                format!("{} is not a positive pixel size", px),
            ));
        }
        Ok(Self(px))
    }

    /// Parses the stored string form (`"16"`, `"40.6"`).
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        parse_number("fontSize", raw).and_then(Self::try_new)
    }

    pub fn px(&self) -> f64 {
        self.0
    }

    /// Shifts by `delta_px` and clamps into `[min_px, max_px]`.
    ///
    /// Both bounds must be positive.
    pub fn nudged(&self, delta_px: f64, min_px: f64, max_px: f64) -> Self {
        Self((self.0 + delta_px).clamp(min_px, max_px))
    }

    /// Shortest decimal string, the format of the `@font_size` record.
    pub fn to_record_string(&self) -> String {
        self.0.to_string()
    }
}

impl fmt::Display for FontSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}px", self.0)
    }
}

impl Serialize for FontSize {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.0)
    }
}

impl<'de> Deserialize<'de> for FontSize {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = NumberOrString::deserialize(deserializer)?;
        FontSize::parse(&raw.into_text()).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn age_accepts_inclusive_bounds() {
        assert_eq!(Age::parse("1").unwrap().years(), 1);
        assert_eq!(Age::parse("120").unwrap().years(), 120);
        assert_eq!(Age::parse(" 42 ").unwrap().years(), 42);
    }

    #[test]
    fn age_rejects_out_of_range() {
        assert!(matches!(Age::parse("0"), Err(ValidationError::OutOfRange { .. })));
        assert!(matches!(Age::parse("121"), Err(ValidationError::OutOfRange { .. })));
        assert!(matches!(Age::parse("-5"), Err(ValidationError::OutOfRange { .. })));
    }

    #[test]
    fn age_rejects_non_numeric() {
        assert!(matches!(Age::parse("abc"), Err(ValidationError::InvalidFormat { .. })));
        assert!(matches!(Age::parse("12.5"), Err(ValidationError::InvalidFormat { .. })));
        assert!(matches!(Age::parse(""), Err(ValidationError::EmptyField { .. })));
    }

    #[test]
    fn age_deserializes_from_number_or_string() {
        let from_number: Age = serde_json::from_str("30").unwrap();
        let from_string: Age = serde_json::from_str("\"30\"").unwrap();
        assert_eq!(from_number, from_string);
        assert!(serde_json::from_str::<Age>("\"0\"").is_err());
    }

    #[test]
    fn diopter_parses_signed_values() {
        let d = Diopter::parse("leftEye", "-2.25").unwrap();
        assert_eq!(d.value(), -2.25);
        assert_eq!(d.magnitude(), 2.25);
    }

    #[test]
    fn diopter_rejects_garbage_and_names_the_field() {
        let err = Diopter::parse("rightEye", "blurry").unwrap_err();
        assert_eq!(err.field(), "rightEye");
        assert!(Diopter::parse("leftEye", "NaN").is_err());
        assert!(Diopter::try_new(f64::INFINITY).is_err());
    }

    #[test]
    fn font_size_record_string_is_shortest_form() {
        assert_eq!(FontSize::try_new(16.0).unwrap().to_record_string(), "16");
        assert_eq!(FontSize::try_new(40.6).unwrap().to_record_string(), "40.6");
    }

    #[test]
    fn font_size_rejects_non_positive() {
        assert!(FontSize::try_new(0.0).is_err());
        assert!(FontSize::try_new(-4.0).is_err());
        assert!(FontSize::parse("big").is_err());
    }

    #[test]
    fn font_size_parses_legacy_integer_string() {
        assert_eq!(FontSize::parse("18").unwrap().px(), 18.0);
    }
}
