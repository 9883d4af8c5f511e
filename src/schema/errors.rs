//! Validation error types.

use thiserror::Error;

/// Result type for validation operations
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Errors produced while validating a creation payload
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is absent or empty
    #[error("missing required field `{0}`")]
    MissingField(String),

    /// The payload is not a JSON object
    #[error("request body must be a JSON object")]
    NotAnObject,
}

impl ValidationError {
    /// Returns the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            ValidationError::MissingField(_) => 400,
            ValidationError::NotAnObject => 400,
        }
    }
}
