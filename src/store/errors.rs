//! Document store error types.

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors produced by document store operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// A unique index rejected a duplicate value.
    ///
    /// The message wording is part of the external contract: clients
    /// match on the "expected `<field>` to be unique" phrase.
    #[error("expected `{field}` to be unique")]
    DuplicateKey {
        /// Field carrying the unique index
        field: String,
    },

    /// Documents must be JSON objects so the store can assign an id
    #[error("document must be a JSON object")]
    NotAnObject,

    /// Interior lock poisoned by a panicking writer
    #[error("storage error: lock poisoned")]
    LockPoisoned,
}

impl StoreError {
    /// Create a duplicate-key error for the given field
    pub fn duplicate_key(field: impl Into<String>) -> Self {
        Self::DuplicateKey {
            field: field.into(),
        }
    }

    /// Returns the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            StoreError::DuplicateKey { .. } => 400,
            StoreError::NotAnObject => 400,
            StoreError::LockPoisoned => 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_key_message_phrase() {
        let err = StoreError::duplicate_key("username");
        assert_eq!(err.to_string(), "expected `username` to be unique");
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(StoreError::duplicate_key("username").status_code(), 400);
        assert_eq!(StoreError::LockPoisoned.status_code(), 500);
    }
}
