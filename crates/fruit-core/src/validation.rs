//! # Validation Module
//!
//! Input checks applied by the entry session.
//!
//! ## Validation Order
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Name, then Price                                   │
//! │                                                                         │
//! │  Name input (trimmed)                                                  │
//! │  ├── "done" (any case)?          → end of session                      │
//! │  ├── not in allow-list?          → NotAllowed, ask for a name again    │
//! │  └── already a ledger key?       → Duplicate, ask for a name again     │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Price input                                                           │
//! │  ├── not a decimal?              → InvalidPrice, ask for price again   │
//! │  └── below zero?                 → InvalidPrice, ask for price again   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use fruit_core::validation::{validate_fruit_name, validate_price};
//! use fruit_core::{AllowList, Ledger};
//!
//! let allowed = AllowList::from_lines(["apple"]);
//! let ledger = Ledger::new();
//!
//! assert!(validate_fruit_name("Apple", &allowed, &ledger).is_ok());
//! assert!(validate_fruit_name("kiwi", &allowed, &ledger).is_err());
//! assert!(validate_price("0.99").is_ok());
//! ```

use crate::allow_list::AllowList;
use crate::error::ValidationError;
use crate::ledger::Ledger;
use crate::price::Price;
use crate::DONE_COMMAND;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// `true` when the trimmed input is the end-of-session command.
pub fn is_done_command(input: &str) -> bool {
    input.trim().eq_ignore_ascii_case(DONE_COMMAND)
}

/// Validates a fruit name against the allow-list and the ledger.
///
/// ## Rules
/// - Lower-cased name must be on the allow-list
/// - Name as typed must not already be a ledger key
///
/// The two comparisons differ on purpose: `"Apple"` is accepted even if
/// `"apple"` is already recorded.
pub fn validate_fruit_name(
    name: &str,
    allowed: &AllowList,
    ledger: &Ledger,
) -> ValidationResult<()> {
    if !allowed.contains(name) {
        return Err(ValidationError::NotAllowed {
            name: name.to_string(),
        });
    }

    if ledger.contains(name) {
        return Err(ValidationError::Duplicate {
            name: name.to_string(),
        });
    }

    Ok(())
}

/// Validates a price input.
///
/// ## Rules
/// - Must parse as a decimal (whitespace around it is fine)
/// - Must be >= 0; zero is allowed
///
/// ## Example
/// ```rust
/// use fruit_core::validation::validate_price;
///
/// assert!(validate_price("0").is_ok());
/// assert!(validate_price("-2").is_err());
/// assert!(validate_price("two").is_err());
/// ```
pub fn validate_price(input: &str) -> ValidationResult<Price> {
    Price::parse(input).map_err(|reason| ValidationError::InvalidPrice {
        input: input.to_string(),
        reason,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
