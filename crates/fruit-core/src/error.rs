//! # Error Types
//!
//! Domain-specific error types for fruit-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  fruit-core errors (this file)                                         │
//! │  └── ValidationError  - Rejected name or price input                   │
//! │                                                                         │
//! │  fruit-store errors (separate crate)                                   │
//! │  └── StoreError       - File system failures                           │
//! │                                                                         │
//! │  CLI errors (in app)                                                   │
//! │  └── AppError         - Fatal errors reported on stderr                │
//! │                                                                         │
//! │  ValidationError is recoverable: the console prints it and re-prompts. │
//! │  StoreError and AppError end the process.                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. The `Display` text of a `ValidationError` is exactly what the user sees
//! 3. Variants carry the offending input for logging and tests

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors raised by the entry session.
///
/// Each variant sends the session back to a prompt; none of them is fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Name is not on the allow-list (compared case-insensitively).
    ///
    /// ## User Workflow
    /// ```text
    /// Enter a fruit: kiwi
    ///      │
    ///      ▼
    /// allow-list lookup("kiwi") → miss
    ///      │
    ///      ▼
    /// NotAllowed { name: "kiwi" } → back to the name prompt
    /// ```
    #[error("This fruit is not allowed. Please enter a valid fruit from the allowed list.")]
    NotAllowed { name: String },

    /// Name is already a key in the ledger (compared exactly, as typed).
    #[error("That fruit is already in the dictionary. Please enter a different fruit.")]
    Duplicate { name: String },

    /// Price input is not a non-negative decimal. Only the price is re-asked.
    #[error("Invalid price. Please enter a valid decimal number greater than or equal to 0.")]
    InvalidPrice {
        input: String,
        reason: PriceRejection,
    },
}

/// Why a price input was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceRejection {
    /// Not a decimal number at all.
    Unparseable,

    /// A decimal number below zero.
    Negative,
}

// =============================================================================
// Unit Tests
// =============================================================================
