//! Legacy `visionData` record.
//!
//! Earlier schema versions wrote the onboarding form here with every field
//! as a string. `profileData` is canonical now; this record is mirrored on
//! write and only read when no canonical profile exists.

use serde::{Deserialize, Serialize};

use super::profile::{EyeSight, Profile};
use super::values::{Age, Diopter};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyVisionRecord {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub age: String,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub left_eye: Option<String>,
    #[serde(default)]
    pub right_eye: Option<String>,
}

impl LegacyVisionRecord {
    /// Mirror of a canonical profile in the legacy shape.
    pub fn from_profile(profile: &Profile) -> Self {
        Self {
            name: profile.name.clone(),
            age: profile.age.map(|a| a.to_string()).unwrap_or_default(),
            gender: profile.gender.clone(),
            left_eye: profile.eye_sight.map(|e| e.left_eye.to_string()),
            right_eye: profile.eye_sight.map(|e| e.right_eye.to_string()),
        }
    }

    /// Upgrades to the canonical shape.
    ///
    /// Eyesight is kept only when both eyes hold a number; a half-filled or
    /// blank pair yields a partial profile. A blank or invalid age is dropped.
    pub fn into_profile(self) -> Profile {
        let age = Age::parse(&self.age).ok();
        let eye_sight = match (self.left_eye.as_deref(), self.right_eye.as_deref()) {
            (Some(left), Some(right)) => match (
                Diopter::parse("leftEye", left),
                Diopter::parse("rightEye", right),
            ) {
                (Ok(l), Ok(r)) => Some(EyeSight::new(l, r)),
                _ => None,
            },
            _ => None,
        };

        Profile {
            name: self.name.trim().to_string(),
            age,
            gender: self.gender,
            email: None,
            phone_number: None,
            eye_sight,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_original_shape_with_null_eyes() {
        let raw = r#"{"name":"Ana","age":"34","gender":"f","leftEye":null,"rightEye":null}"#;
        let record: LegacyVisionRecord = serde_json::from_str(raw).unwrap();
        let profile = record.into_profile();
        assert_eq!(profile.name, "Ana");
        assert!(profile.eye_sight.is_none());
    }

    #[test]
    fn upgrades_numeric_eyes() {
        let record = LegacyVisionRecord {
            name: "Ana".to_string(),
            age: "34".to_string(),
            gender: "f".to_string(),
            left_eye: Some("-1.25".to_string()),
            right_eye: Some("-1".to_string()),
        };
        let profile = record.into_profile();
        assert!(profile.is_complete());
        assert_eq!(profile.eye_sight.unwrap().left_eye.value(), -1.25);
    }

    #[test]
    fn blank_eye_strings_yield_partial_profile() {
        let record = LegacyVisionRecord {
            name: "Ana".to_string(),
            age: "34".to_string(),
            gender: String::new(),
            left_eye: Some(String::new()),
            right_eye: Some("-1".to_string()),
        };
        assert!(record.into_profile().eye_sight.is_none());
    }

    #[test]
    fn blank_or_invalid_age_is_dropped() {
        for age in ["", "old", "0"] {
            let record = LegacyVisionRecord {
                name: "Ana".to_string(),
                age: age.to_string(),
                gender: String::new(),
                left_eye: Some("-1".to_string()),
                right_eye: Some("-1".to_string()),
            };
            let profile = record.into_profile();
            assert_eq!(profile.age, None, "age {:?}", age);
            assert!(profile.is_complete());
        }
    }

    #[test]
    fn mirror_round_trips_through_upgrade() {
        let profile = Profile {
            name: "Ana".to_string(),
            age: Some(Age::try_new(34).unwrap()),
            gender: "f".to_string(),
            email: None,
            phone_number: None,
            eye_sight: Some(EyeSight::new(
                Diopter::try_new(-0.5).unwrap(),
                Diopter::try_new(-0.75).unwrap(),
            )),
        };
        let upgraded = LegacyVisionRecord::from_profile(&profile).into_profile();
        assert_eq!(upgraded, profile);
    }
}
