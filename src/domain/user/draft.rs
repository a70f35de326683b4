//! Profile input validation and partial updates.
//!
//! `ProfileDraft` carries raw form strings exactly as typed. Nothing reaches
//! the store until `validate()` has turned it into a `Profile`.
//! `ProfileUpdate` is the field-by-field variant used by edit flows; it only
//! ever holds validated values and overwrites exactly the fields it carries.

use crate::domain::foundation::ValidationError;

use super::profile::{EyeSight, Profile};
use super::values::{Age, Diopter};

/// Raw profile form input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileDraft {
    pub name: String,
    pub age: String,
    pub gender: String,
    pub email: String,
    pub phone_number: String,
    pub left_eye: String,
    pub right_eye: String,
}

impl ProfileDraft {
    /// Validates every field, eyesight included.
    ///
    /// Checks run in form order (name, age, gender, eyesight) and the first
    /// failure is returned.
    pub fn validate(&self) -> Result<Profile, ValidationError> {
        let mut profile = self.validate_identity()?;
        profile.eye_sight = Some(parse_eye_sight(&self.left_eye, &self.right_eye)?);
        Ok(profile)
    }

    /// Validates name, age and gender only; eyesight is left unset.
    ///
    /// Used when eyesight will come from an eye test rather than the form.
    pub fn validate_identity(&self) -> Result<Profile, ValidationError> {
        let name = required("name", &self.name)?;
        let age = Some(Age::parse(&self.age)?);
        let gender = required("gender", &self.gender)?;

        Ok(Profile {
            name,
            age,
            gender,
            email: optional(&self.email),
            phone_number: optional(&self.phone_number),
            eye_sight: None,
        })
    }
}

/// A set of validated field changes for an existing profile.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileUpdate {
    name: Option<String>,
    age: Option<Age>,
    gender: Option<String>,
    email: Option<Option<String>>,
    phone_number: Option<Option<String>>,
    eye_sight: Option<EyeSight>,
}

impl ProfileUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, raw: &str) -> Result<Self, ValidationError> {
        self.name = Some(required("name", raw)?);
        Ok(self)
    }

    pub fn age(mut self, raw: &str) -> Result<Self, ValidationError> {
        self.age = Some(Age::parse(raw)?);
        Ok(self)
    }

    pub fn gender(mut self, raw: &str) -> Result<Self, ValidationError> {
        self.gender = Some(required("gender", raw)?);
        Ok(self)
    }

    /// Sets or clears (empty input) the email.
    pub fn email(mut self, raw: &str) -> Self {
        self.email = Some(optional(raw));
        self
    }

    /// Sets or clears (empty input) the phone number.
    pub fn phone_number(mut self, raw: &str) -> Self {
        self.phone_number = Some(optional(raw));
        self
    }

    pub fn eye_sight(mut self, left_raw: &str, right_raw: &str) -> Result<Self, ValidationError> {
        self.eye_sight = Some(parse_eye_sight(left_raw, right_raw)?);
        Ok(self)
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Returns `profile` with the carried fields overwritten.
    pub fn apply_to(&self, mut profile: Profile) -> Profile {
        if let Some(name) = &self.name {
            profile.name = name.clone();
        }
        if let Some(age) = self.age {
            profile.age = Some(age);
        }
        if let Some(gender) = &self.gender {
            profile.gender = gender.clone();
        }
        if let Some(email) = &self.email {
            profile.email = email.clone();
        }
        if let Some(phone) = &self.phone_number {
            profile.phone_number = phone.clone();
        }
        if let Some(eye_sight) = self.eye_sight {
            profile.eye_sight = Some(eye_sight);
        }
        profile
    }
}

fn required(field: &str, raw: &str) -> Result<String, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::empty_field(field));
    }
    Ok(trimmed.to_string())
}

fn optional(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn parse_eye_sight(left_raw: &str, right_raw: &str) -> Result<EyeSight, ValidationError> {
    let left = Diopter::parse("leftEye", left_raw)?;
    let right = Diopter::parse("rightEye", right_raw)?;
    Ok(EyeSight::new(left, right))
}
