//! # Store Handle
//!
//! File locations and repository access.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Store Startup                                  │
//! │                                                                         │
//! │  StoreConfig::default() ← allowed-fruits.txt, fruits.csv               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Store::new(config)                                                    │
//! │       │                                                                 │
//! │       ├── store.allowed_fruits() ──► AllowListRepository               │
//! │       │                                                                 │
//! │       └── store.ledger() ──────────► LedgerRepository                  │
//! │                                                                         │
//! │  Repositories hold only a path. Every call opens and closes the file,  │
//! │  so there is no handle to keep alive between entries.                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::{Path, PathBuf};

use crate::repository::allow_list::AllowListRepository;
use crate::repository::ledger::LedgerRepository;
use crate::{DEFAULT_ALLOWED_FRUITS_FILE, DEFAULT_LEDGER_FILE};

// =============================================================================
// Configuration
// =============================================================================

/// Store configuration.
///
/// ## Example
/// ```rust
/// use fruit_store::StoreConfig;
///
/// let config = StoreConfig::default()
///     .ledger_path("data/fruits.csv");
/// assert_eq!(config.allowed_fruits_path.to_str(), Some("allowed-fruits.txt"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Path to the allow-list text file.
    /// Default: `allowed-fruits.txt`
    pub allowed_fruits_path: PathBuf,

    /// Path to the ledger CSV file.
    /// Default: `fruits.csv`
    pub ledger_path: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig::new(DEFAULT_ALLOWED_FRUITS_FILE, DEFAULT_LEDGER_FILE)
    }
}

impl StoreConfig {
    /// Creates a configuration with explicit paths.
    pub fn new(allowed_fruits_path: impl Into<PathBuf>, ledger_path: impl Into<PathBuf>) -> Self {
        StoreConfig {
            allowed_fruits_path: allowed_fruits_path.into(),
            ledger_path: ledger_path.into(),
        }
    }

    /// Uses the default file names inside `dir` (handy for tests).
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        StoreConfig::new(
            dir.join(DEFAULT_ALLOWED_FRUITS_FILE),
            dir.join(DEFAULT_LEDGER_FILE),
        )
    }

    /// Sets the allow-list path.
    pub fn allowed_fruits_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.allowed_fruits_path = path.into();
        self
    }

    /// Sets the ledger path.
    pub fn ledger_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.ledger_path = path.into();
        self
    }
}

// =============================================================================
// Store
// =============================================================================

/// Handle providing repository access.
#[derive(Debug, Clone)]
pub struct Store {
    config: StoreConfig,
}

impl Store {
    /// Creates a store. Nothing is opened until a repository is used.
    pub fn new(config: StoreConfig) -> Self {
        Store { config }
    }

    /// Returns the configuration in use.
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Returns the allow-list repository.
    pub fn allowed_fruits(&self) -> AllowListRepository {
        AllowListRepository::new(self.config.allowed_fruits_path.clone())
    }

    /// Returns the ledger repository.
    pub fn ledger(&self) -> LedgerRepository {
        LedgerRepository::new(self.config.ledger_path.clone())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
