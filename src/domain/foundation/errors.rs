//! Error types for the domain layer.

use std::collections::HashMap;
use std::error::Error;
use std::fmt;
use thiserror::Error;

/// Errors that occur during value object construction.
///
/// These are user-correctable input problems and are always raised before
/// any storage or native call is attempted.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' must be between {min} and {max}, got {actual}")]
    OutOfRange {
        field: String,
        min: i64,
        max: i64,
        actual: i64,
    },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates an out of range validation error.
    pub fn out_of_range(field: impl Into<String>, min: i64, max: i64, actual: i64) -> Self {
        ValidationError::OutOfRange {
            field: field.into(),
            min,
            max,
            actual,
        }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Name of the offending field.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::EmptyField { field }
            | ValidationError::OutOfRange { field, .. }
            | ValidationError::InvalidFormat { field, .. } => field,
        }
    }

    /// Error code matching this validation failure.
    pub fn code(&self) -> ErrorCode {
        match self {
            ValidationError::EmptyField { .. } => ErrorCode::EmptyField,
            ValidationError::OutOfRange { .. } => ErrorCode::OutOfRange,
            ValidationError::InvalidFormat { .. } => ErrorCode::InvalidFormat,
        }
    }
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    ValidationFailed,
    EmptyField,
    OutOfRange,
    InvalidFormat,

    // Not found errors
    ProfileNotFound,

    // State errors
    InvalidStateTransition,

    // Capability errors
    PermissionRequired,
    Unsupported,

    // Infrastructure errors
    StorageError,
    SerializationError,
    InternalError,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::EmptyField => "EMPTY_FIELD",
            ErrorCode::OutOfRange => "OUT_OF_RANGE",
            ErrorCode::InvalidFormat => "INVALID_FORMAT",
            ErrorCode::ProfileNotFound => "PROFILE_NOT_FOUND",
            ErrorCode::InvalidStateTransition => "INVALID_STATE_TRANSITION",
            ErrorCode::PermissionRequired => "PERMISSION_REQUIRED",
            ErrorCode::Unsupported => "UNSUPPORTED",
            ErrorCode::StorageError => "STORAGE_ERROR",
            ErrorCode::SerializationError => "SERIALIZATION_ERROR",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        };
        write!(f, "{}", s)
    }
}

/// Standard domain error with code, message, and optional details.
#[derive(Debug, Clone)]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
    pub details: HashMap<String, String>,
}

impl DomainError {
    /// Creates a new domain error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: HashMap::new(),
        }
    }

    /// Creates a validation error for a specific field.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::ValidationFailed,
            message: message.into(),
            details: HashMap::new(),
        }
        .with_detail("field", field.into())
    }

    /// Adds a detail to the error.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }

    /// Returns the human readable message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// True for user-correctable input problems.
    pub fn is_validation(&self) -> bool {
        matches!(
            self.code,
            ErrorCode::ValidationFailed
                | ErrorCode::EmptyField
                | ErrorCode::OutOfRange
                | ErrorCode::InvalidFormat
        )
    }
}

impl From<ValidationError> for DomainError {
    fn from(err: ValidationError) -> Self {
        DomainError::new(err.code(), err.to_string()).with_detail("field", err.field())
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for DomainError {}
