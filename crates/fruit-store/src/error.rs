//! # Store Error Types
//!
//! Error types for file operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io::Error                                                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← Adds the file path and the operation       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  AppError (in the CLI) ← Fatal: printed on stderr, exit status 1       │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A missing file is not an error here: loaders return `Ok(None)`.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// File operation errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading a file failed for a reason other than "not found".
    ///
    /// ## When This Occurs
    /// - Permission denied
    /// - Path is a directory
    #[error("Failed to read {}: {source}", path.display())]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Appending an entry to the ledger file failed.
    ///
    /// ## When This Occurs
    /// - Read-only file or directory
    /// - Disk full
    #[error("Failed to append to {}: {source}", path.display())]
    AppendFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl StoreError {
    /// Creates a ReadFailed error for `path`.
    pub fn read(path: &Path, source: io::Error) -> Self {
        StoreError::ReadFailed {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Creates an AppendFailed error for `path`.
    pub fn append(path: &Path, source: io::Error) -> Self {
        StoreError::AppendFailed {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
