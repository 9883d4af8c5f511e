//! User service error types.

use thiserror::Error;

use crate::schema::ValidationError;
use crate::store::StoreError;

/// Result type for user operations
pub type UserResult<T> = Result<T, UserError>;

/// Errors produced by user registration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserError {
    /// Payload failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Store operation failed; includes duplicate-username rejections
    #[error(transparent)]
    Storage(#[from] StoreError),

    /// Password hashing failed
    #[error("internal error: password hashing failed")]
    HashingFailed,

    /// A persisted document is missing fields the schema guarantees
    #[error("stored user document is malformed")]
    MalformedDocument,
}

impl UserError {
    /// Returns the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            UserError::Validation(e) => e.status_code(),
            UserError::Storage(e) => e.status_code(),
            UserError::HashingFailed => 500,
            UserError::MalformedDocument => 500,
        }
    }
}
