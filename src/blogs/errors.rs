//! Blog service error types.

use thiserror::Error;

use crate::schema::ValidationError;
use crate::store::StoreError;

/// Result type for blog operations
pub type BlogResult<T> = Result<T, BlogError>;

/// Errors produced by blog creation and listing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BlogError {
    /// Payload failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Store operation failed
    #[error(transparent)]
    Storage(#[from] StoreError),

    /// A persisted document is missing fields the schema guarantees
    #[error("stored blog document is malformed")]
    MalformedDocument,
}

impl BlogError {
    /// Returns the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            BlogError::Validation(e) => e.status_code(),
            BlogError::Storage(e) => e.status_code(),
            BlogError::MalformedDocument => 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_errors_map_to_400() {
        let err = BlogError::from(ValidationError::MissingField("title".to_string()));
        assert_eq!(err.status_code(), 400);
        assert!(err.to_string().contains("missing required field"));
    }

    #[test]
    fn test_malformed_document_is_server_error() {
        assert_eq!(BlogError::MalformedDocument.status_code(), 500);
    }
}
