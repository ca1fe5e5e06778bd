//! # Allow-List Repository
//!
//! Reads `allowed-fruits.txt`: one fruit name per line, any case, blank
//! lines and surrounding whitespace ignored.

use std::path::{Path, PathBuf};

use fruit_core::AllowList;
use tracing::{debug, info};

use super::read_optional;
use crate::error::StoreResult;

/// Repository for the allow-list file.
#[derive(Debug, Clone)]
pub struct AllowListRepository {
    path: PathBuf,
}

impl AllowListRepository {
    /// Creates a repository for the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        AllowListRepository { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the allow-list.
    ///
    /// ## Returns
    /// * `Ok(Some(AllowList))` - File read (the list may still be empty)
    /// * `Ok(None)` - File does not exist
    /// * `Err(StoreError)` - File exists but could not be read
    pub fn load(&self) -> StoreResult<Option<AllowList>> {
        let Some(contents) = read_optional(&self.path)? else {
            debug!(path = %self.path.display(), "Allow-list file not found");
            return Ok(None);
        };

        let allowed = AllowList::from_lines(contents.lines());
        info!(
            path = %self.path.display(),
            count = allowed.len(),
            "Allow-list loaded"
        );
        Ok(Some(allowed))
    }
}
