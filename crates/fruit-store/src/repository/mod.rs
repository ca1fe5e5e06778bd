//! # Repository Module
//!
//! File repository implementations for Fruit Ledger.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern                                   │
//! │                                                                         │
//! │  CLI                                                                   │
//! │       │  store.ledger().append(&entry)                                 │
//! │       ▼                                                                 │
//! │  LedgerRepository                                                      │
//! │  ├── load(&self)            → Option<Ledger>                           │
//! │  └── append(&self, entry)   → open, write one line, flush, close       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  fruits.csv                                                            │
//! │                                                                         │
//! │  File formats live here and nowhere else.                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`allow_list::AllowListRepository`] - Reads the allow-list
//! - [`ledger::LedgerRepository`] - Reads and appends ledger entries

pub mod allow_list;
pub mod ledger;

use std::fs;
use std::io;
use std::path::Path;

use crate::error::{StoreError, StoreResult};

/// Reads a text file, mapping "not found" to `Ok(None)`.
///
/// Invalid UTF-8 is replaced rather than rejected.
pub(crate) fn read_optional(path: &Path) -> StoreResult<Option<String>> {
    match fs::read(path) {
        Ok(bytes) => Ok(Some(String::from_utf8_lossy(&bytes).into_owned())),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(err) => Err(StoreError::read(path, err)),
    }
}
