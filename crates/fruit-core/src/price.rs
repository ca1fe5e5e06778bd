//! # Price Module
//!
//! Provides the `Price` type for fruit prices.
//!
//! ## Why an Exact Decimal?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  As f64:  "1.10" parses to 1.1000000000000000888...                     │
//! │           and writes back as "1.1"                    ❌ scale lost     │
//! │                                                                         │
//! │  OUR SOLUTION: rust_decimal::Decimal                                    │
//! │    "1.10" is 110 × 10^-2, written back as "1.10"      ✅ as typed       │
//! │    Comparison is by value: 1.5 == 1.50                                  │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Two Renderings
//! - [`Price::to_ledger_string`] is the raw decimal stored in the ledger file.
//! - `Display` is the currency form shown to the user: `$1.50`.
//!
//! ## Usage
//! ```rust
//! use fruit_core::price::Price;
//!
//! let price = Price::parse("1.5").unwrap();
//! assert_eq!(price.to_string(), "$1.50");
//! assert_eq!(price.to_ledger_string(), "1.5");
//!
//! assert!(Price::parse("-1").is_err());
//! assert!(Price::parse("cheap").is_err());
//! ```

use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;
use std::str::FromStr;

use crate::error::PriceRejection;

// =============================================================================
// Price Type
// =============================================================================

/// A decimal price.
///
/// ## Design Decisions
/// - **Decimal, not cents**: the ledger file keeps whatever precision the
///   user typed, so `1.505` survives a round-trip
/// - **Private field**: prices typed by the user go through [`Price::parse`],
///   which checks `>= 0`; only [`Price::parse_persisted`] lets a negative
///   value already in the ledger file back in
/// - **Ord by value**: the report sorts on it directly
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Price(Decimal);

impl Price {
    /// Parses user or file input into a price.
    ///
    /// Surrounding whitespace and a leading sign are accepted. Negative
    /// zero is normalized to zero.
    ///
    /// ## Example
    /// ```rust
    /// use fruit_core::price::Price;
    /// use fruit_core::PriceRejection;
    ///
    /// assert_eq!(Price::parse(" 0.75 ").unwrap().to_ledger_string(), "0.75");
    /// assert_eq!(Price::parse("-0.25"), Err(PriceRejection::Negative));
    /// assert_eq!(Price::parse("1,50"), Err(PriceRejection::Unparseable));
    /// ```
    pub fn parse(input: &str) -> Result<Self, PriceRejection> {
        Price::from_decimal(parse_decimal(input)?)
    }

    /// Parses a price read back from the ledger file.
    ///
    /// Same syntax as [`Price::parse`], but a negative value is kept: an
    /// entry that is on file still occupies its name.
    ///
    /// ```rust
    /// use fruit_core::price::Price;
    ///
    /// assert_eq!(Price::parse_persisted("-1").unwrap().to_ledger_string(), "-1");
    /// assert!(Price::parse_persisted("1_5").is_err());
    /// ```
    pub fn parse_persisted(input: &str) -> Result<Self, PriceRejection> {
        Ok(Price(parse_decimal(input)?))
    }

    /// Wraps a decimal, rejecting negative values.
    pub fn from_decimal(value: Decimal) -> Result<Self, PriceRejection> {
        let value = normalize_zero(value);
        if value.is_sign_negative() {
            return Err(PriceRejection::Negative);
        }

        Ok(Price(value))
    }

    /// Returns `true` for a price below zero (only possible via
    /// [`Price::parse_persisted`]).
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative()
    }

    /// Zero price (free fruit is allowed).
    #[inline]
    pub const fn zero() -> Self {
        Price(Decimal::ZERO)
    }

    /// Returns the underlying decimal with its original scale.
    #[inline]
    pub const fn as_decimal(&self) -> Decimal {
        self.0
    }

    /// Returns the price rounded to cents, half away from zero.
    ///
    /// ## Example
    /// ```rust
    /// use fruit_core::price::Price;
    ///
    /// let price = Price::parse("1.005").unwrap();
    /// assert_eq!(price.rounded_to_cents().to_string(), "1.01");
    /// ```
    pub fn rounded_to_cents(&self) -> Decimal {
        self.0
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    }

    /// Returns the price as written to the ledger file (scale preserved).
    pub fn to_ledger_string(&self) -> String {
        self.0.to_string()
    }
}

/// Plain decimal syntax only: optional sign, digits, one optional point.
///
/// `Decimal::from_str` alone would also take `_` as a digit separator, so
/// `1_5` has to be refused here.
fn parse_decimal(input: &str) -> Result<Decimal, PriceRejection> {
    let trimmed = input.trim();
    let plain = trimmed
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'+' | b'-'));
    if !plain {
        return Err(PriceRejection::Unparseable);
    }

    Decimal::from_str(trimmed)
        .map(normalize_zero)
        .map_err(|_| PriceRejection::Unparseable)
}

fn normalize_zero(mut value: Decimal) -> Decimal {
    if value.is_zero() {
        value.set_sign_positive(true);
    }
    value
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Currency display with exactly two decimal digits: `$1.50`, `-$1.00`.
impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cents = self.rounded_to_cents();
        if cents.is_sign_negative() && !cents.is_zero() {
            write!(f, "-${:.2}", cents.abs())
        } else {
            write!(f, "${:.2}", normalize_zero(cents))
        }
    }
}

impl Default for Price {
    fn default() -> Self {
        Price::zero()
    }
}

impl FromStr for Price {
    type Err = PriceRejection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Price::parse(s)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        assert_eq!(Price::parse("1.50").unwrap().to_ledger_string(), "1.50");
        assert_eq!(Price::parse("3").unwrap().to_ledger_string(), "3");
        assert_eq!(Price::parse("  2.25\n").unwrap().to_ledger_string(), "2.25");
        assert_eq!(Price::parse("0").unwrap(), Price::zero());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(Price::parse(""), Err(PriceRejection::Unparseable));
        assert_eq!(Price::parse("   "), Err(PriceRejection::Unparseable));
        assert_eq!(Price::parse("abc"), Err(PriceRejection::Unparseable));
        assert_eq!(Price::parse("1.2.3"), Err(PriceRejection::Unparseable));
        assert_eq!(Price::parse("$1.50"), Err(PriceRejection::Unparseable));
        assert_eq!(Price::parse("1_5"), Err(PriceRejection::Unparseable));
        assert_eq!(Price::parse("1e2"), Err(PriceRejection::Unparseable));
    }

    #[test]
    fn test_parse_persisted_keeps_negative() {
        let price = Price::parse_persisted(" -1.5 ").unwrap();
        assert!(price.is_negative());
        assert_eq!(price.to_ledger_string(), "-1.5");
        assert_eq!(price.to_string(), "-$1.50");
        assert!(price < Price::zero());

        assert_eq!(Price::parse_persisted("-0").unwrap(), Price::zero());
        assert_eq!(Price::parse_persisted("x1"), Err(PriceRejection::Unparseable));
        assert_eq!(Price::parse_persisted("1_000"), Err(PriceRejection::Unparseable));
    }

    #[test]
    fn test_parse_rejects_negative() {
        assert_eq!(Price::parse("-1"), Err(PriceRejection::Negative));
        assert_eq!(Price::parse("-0.01"), Err(PriceRejection::Negative));
    }

    #[test]
    fn test_negative_zero_is_zero() {
        let price = Price::parse("-0.00").unwrap();
        assert_eq!(price, Price::zero());
        assert_eq!(price.to_string(), "$0.00");
        assert!(!price.to_ledger_string().starts_with('-'));
    }

    #[test]
    fn test_display() {
        assert_eq!(Price::parse("1.5").unwrap().to_string(), "$1.50");
        assert_eq!(Price::parse("10").unwrap().to_string(), "$10.00");
        assert_eq!(Price::parse("0.755").unwrap().to_string(), "$0.76");
        assert_eq!(Price::parse("0.754").unwrap().to_string(), "$0.75");
        assert_eq!(Price::zero().to_string(), "$0.00");
    }

    #[test]
    fn test_ordering_is_by_value() {
        let a = Price::parse("1.5").unwrap();
        let b = Price::parse("1.50").unwrap();
        let c = Price::parse("0.75").unwrap();

        assert_eq!(a, b);
        assert!(c < a);
        // Equal value, different scale in the file
        assert_ne!(a.to_ledger_string(), b.to_ledger_string());
    }

    #[test]
    fn test_from_str() {
        let price: Price = "4.20".parse().unwrap();
        assert_eq!(price.to_ledger_string(), "4.20");
    }
}
