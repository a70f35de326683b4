//! Where the app lands after launch.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::user::Profile;

/// Entry point picked at process start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryRoute {
    /// Onboarding: landing, sight details, vision profile.
    FirstRun,
    /// Home and profile tabs.
    MainApp,
}

impl EntryRoute {
    /// `MainApp` only for a profile satisfying the completeness invariant.
    pub fn for_profile(profile: Option<&Profile>) -> Self {
        match profile {
            Some(p) if p.is_complete() => EntryRoute::MainApp,
            _ => EntryRoute::FirstRun,
        }
    }
}

impl fmt::Display for EntryRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EntryRoute::FirstRun => "first_run",
            EntryRoute::MainApp => "main_app",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::{Age, Diopter, EyeSight};

    fn profile(name: &str, with_eyes: bool) -> Profile {
        Profile {
            name: name.to_string(),
            age: Some(Age::try_new(50).unwrap()),
            gender: String::new(),
            email: None,
            phone_number: None,
            eye_sight: with_eyes.then(|| EyeSight::new(Diopter::ZERO, Diopter::ZERO)),
        }
    }

    #[test]
    fn absent_profile_is_first_run() {
        assert_eq!(EntryRoute::for_profile(None), EntryRoute::FirstRun);
    }

    #[test]
    fn partial_profile_is_first_run() {
        assert_eq!(
            EntryRoute::for_profile(Some(&profile("Ana", false))),
            EntryRoute::FirstRun
        );
        assert_eq!(
            EntryRoute::for_profile(Some(&profile("", true))),
            EntryRoute::FirstRun
        );
    }

    #[test]
    fn complete_profile_is_main_app() {
        assert_eq!(
            EntryRoute::for_profile(Some(&profile("Ana", true))),
            EntryRoute::MainApp
        );
    }
}
