//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, errors, state machine)
//! - `user` - Profile, eyesight, font size and display preferences
//! - `derivation` - Pure functions from measurements to display settings
//! - `assessment` - Guided vision and hearing tests
//! - `onboarding` - Launch routing based on profile completeness

pub mod assessment;
pub mod derivation;
pub mod foundation;
pub mod onboarding;
pub mod user;
