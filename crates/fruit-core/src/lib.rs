//! # fruit-core: Pure Domain Logic for Fruit Ledger
//!
//! This crate is the **heart** of Fruit Ledger. It contains all domain logic
//! as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Fruit Ledger Architecture                         │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Console (apps/cli)                           │   │
//! │  │    prompt ──► read line ──► print message ──► print report     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ fruit-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   price   │  │  ledger   │  │  session  │  │  report   │  │   │
//! │  │   │   Price   │  │  Ledger   │  │  Entry    │  │  Price    │  │   │
//! │  │   │           │  │ AllowList │  │  Session  │  │  Report   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    fruit-store (flat files)                     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`price`] - Exact decimal price (user input must be >= 0)
//! - [`allow_list`] - Case-insensitive set of permitted fruit names
//! - [`ledger`] - In-memory name → price mapping
//! - [`validation`] - Name and price checks
//! - [`session`] - The interactive entry state machine
//! - [`report`] - Price-ordered report
//! - [`error`] - Validation error types
//!
//! ## Example Usage
//!
//! ```rust
//! use fruit_core::{AllowList, EntrySession, Ledger, Outcome};
//!
//! let allowed = AllowList::from_lines(["Apple", "banana"]);
//! let mut ledger = Ledger::new();
//! let mut session = EntrySession::new();
//!
//! session.handle_line("apple", &allowed, &mut ledger);
//! let outcome = session.handle_line("1.50", &allowed, &mut ledger);
//!
//! assert!(matches!(outcome, Outcome::Accepted(_)));
//! assert_eq!(ledger.len(), 1);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod allow_list;
pub mod error;
pub mod ledger;
pub mod price;
pub mod report;
pub mod session;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use allow_list::AllowList;
pub use error::{PriceRejection, ValidationError};
pub use ledger::{Ledger, LedgerEntry};
pub use price::Price;
pub use report::PriceReport;
pub use session::{EntrySession, Outcome, SessionState};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Typed at the name prompt to end the entry session (case-insensitive).
pub const DONE_COMMAND: &str = "done";
