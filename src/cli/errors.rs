//! CLI-specific error types.

use std::io;
use thiserror::Error;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// CLI errors; all are fatal to the process
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration file could not be read or parsed
    #[error("configuration error: {0}")]
    Config(String),

    /// Runtime construction or server I/O failed
    #[error("server error: {0}")]
    Server(#[from] io::Error),
}

impl CliError {
    /// Config error from any displayable cause
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_message() {
        let err = CliError::config("bad json");
        assert_eq!(err.to_string(), "configuration error: bad json");
    }
}
