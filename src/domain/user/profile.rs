//! Profile - the durable record of who the user is and how they see.

use serde::{Deserialize, Deserializer, Serialize};

use super::values::{Age, Diopter, NumberOrString};

/// Refractive correction for both eyes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EyeSight {
    pub left_eye: Diopter,
    pub right_eye: Diopter,
}

impl EyeSight {
    pub fn new(left_eye: Diopter, right_eye: Diopter) -> Self {
        Self {
            left_eye,
            right_eye,
        }
    }

    /// Mean correction strength of the two eyes, sign ignored.
    pub fn average_magnitude(&self) -> f64 {
        (self.left_eye.magnitude() + self.right_eye.magnitude()) / 2.0
    }
}

/// User profile as persisted under the `profileData` key.
///
/// Created by the first completed onboarding and overwritten in place by
/// later edits. `eye_sight` may be absent while onboarding is unfinished.
///
/// Reads are lenient: older edit screens saved a blank age and free-text
/// eyesight. A blank or unparseable age reads as absent; eyesight that is not
/// numeric for both eyes reads as not yet recorded. Writes only ever come
/// from validated input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub name: String,
    #[serde(
        default,
        deserialize_with = "lenient_age",
        skip_serializing_if = "Option::is_none"
    )]
    pub age: Option<Age>,
    #[serde(default)]
    pub gender: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_eye_sight",
        skip_serializing_if = "Option::is_none"
    )]
    pub eye_sight: Option<EyeSight>,
}

impl Profile {
    /// Completeness invariant: a non-empty name and recorded eyesight.
    ///
    /// A complete profile lets the app boot straight into the main screens.
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty() && self.eye_sight.is_some()
    }
}

fn lenient_age<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Age>, D::Error> {
    let raw = Option::<NumberOrString>::deserialize(deserializer)?;
    Ok(raw.and_then(|value| Age::parse(&value.into_text()).ok()))
}

/// Eyesight exactly as stored, before the numbers are checked.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredEyeSight {
    #[serde(default)]
    left_eye: Option<NumberOrString>,
    #[serde(default)]
    right_eye: Option<NumberOrString>,
}

fn lenient_eye_sight<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<EyeSight>, D::Error> {
    let Some(stored) = Option::<StoredEyeSight>::deserialize(deserializer)? else {
        return Ok(None);
    };
    let (Some(left), Some(right)) = (stored.left_eye, stored.right_eye) else {
        return Ok(None);
    };

    let left = Diopter::parse("leftEye", &left.into_text());
    let right = Diopter::parse("rightEye", &right.into_text());
    Ok(match (left, right) {
        (Ok(l), Ok(r)) => Some(EyeSight::new(l, r)),
        _ => None,
    })
}
