//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, error types and the state machine trait
//! that form the vocabulary of the Clearview domain.

mod errors;
mod percentage;
mod state_machine;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use percentage::Percentage;
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
