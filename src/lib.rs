//! Clearview - Adaptive Accessibility Profile Engine
//!
//! This crate gathers self-reported sensory measurements through guided
//! assessments, derives display preferences from them, persists the user
//! profile, and pushes the derived font scale into OS display settings when
//! the user has granted permission to modify them.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
