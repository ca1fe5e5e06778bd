//! # Application Error Type
//!
//! Fatal errors of the CLI.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Fruit Ledger                           │
//! │                                                                         │
//! │  Bad user input ─── ValidationError ──► printed, re-prompt (NOT here)  │
//! │                                                                         │
//! │  Config file / env ─── ConfigError ──┐                                 │
//! │  File system ──────── StoreError ────┼──► AppError ──► main()          │
//! │  stdin / stdout ───── io::Error ─────┘        │                        │
//! │                                               ▼                        │
//! │                                   "Error: ..." on stderr, exit 1       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io;

use fruit_store::StoreError;
use thiserror::Error;

/// Errors that end the program.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration file or environment could not be read.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Allow-list or ledger file operation failed.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Reading stdin or writing stdout failed.
    #[error("Console I/O failed: {0}")]
    Console(#[from] io::Error),
}

/// Result type for application operations.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_store_error_is_transparent() {
        let store_err = StoreError::read(
            Path::new("allowed-fruits.txt"),
            io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
        );
        let expected = store_err.to_string();
        let err: AppError = store_err.into();

        assert!(matches!(err, AppError::Store(_)));
        assert_eq!(err.to_string(), expected);
    }

    #[test]
    fn test_console_error_message() {
        let err: AppError = io::Error::new(io::ErrorKind::BrokenPipe, "broken pipe").into();
        assert_eq!(err.to_string(), "Console I/O failed: broken pipe");
    }
}
