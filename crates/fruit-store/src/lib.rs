//! # fruit-store: Flat-File Persistence for Fruit Ledger
//!
//! This crate provides file access for the Fruit Ledger CLI. Both files are
//! plain text in the working directory by default.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Fruit Ledger Data Flow                            │
//! │                                                                         │
//! │  CLI startup / accepted entry                                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    fruit-store (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌──────────────────────────────────┐    │   │
//! │  │   │    Store      │    │          Repositories            │    │   │
//! │  │   │  (store.rs)   │    │                                  │    │   │
//! │  │   │               │───►│ AllowListRepository  (read)      │    │   │
//! │  │   │ StoreConfig   │    │ LedgerRepository (read, append)  │    │   │
//! │  │   └───────────────┘    └──────────────────────────────────┘    │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  allowed-fruits.txt          fruits.csv                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`store`] - Store handle and path configuration
//! - [`error`] - Store error types
//! - [`repository`] - Allow-list and ledger file repositories
//!
//! ## Usage
//!
//! ```rust,no_run
//! use fruit_store::{Store, StoreConfig};
//!
//! let store = Store::new(StoreConfig::default());
//!
//! let allowed = store.allowed_fruits().load()?.unwrap_or_default();
//! let ledger = store.ledger().load()?.unwrap_or_default();
//! # Ok::<(), fruit_store::StoreError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod repository;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{StoreError, StoreResult};
pub use store::{Store, StoreConfig};

pub use repository::allow_list::AllowListRepository;
pub use repository::ledger::LedgerRepository;

/// Default allow-list file name, relative to the working directory.
pub const DEFAULT_ALLOWED_FRUITS_FILE: &str = "allowed-fruits.txt";

/// Default ledger file name, relative to the working directory.
pub const DEFAULT_LEDGER_FILE: &str = "fruits.csv";
