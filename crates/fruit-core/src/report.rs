//! # Price Report
//!
//! The summary printed once the entry session ends.
//!
//! ## Output Format
//! ```text
//! (blank line)
//! Fruits and their prices, sorted by price (cheapest first):
//! banana: $0.75
//! apple: $1.50
//! cherry: $1.50
//! ```
//!
//! Ordering is ascending by price. The sort is stable, so equal prices keep
//! ledger (insertion) order. An empty ledger renders a single line instead.

use std::fmt;

use crate::ledger::{Ledger, LedgerEntry};

/// Heading printed above the sorted entries.
pub const REPORT_HEADING: &str = "Fruits and their prices, sorted by price (cheapest first):";

/// Printed instead of the report when the ledger is empty.
pub const EMPTY_REPORT: &str = "No fruits were entered.";

/// Entries of a ledger, cheapest first.
///
/// ## Example
/// ```rust
/// use fruit_core::{Ledger, Price, PriceReport};
///
/// let mut ledger = Ledger::new();
/// ledger.insert("apple", Price::parse("1.50").unwrap());
/// ledger.insert("banana", Price::parse("0.75").unwrap());
///
/// let report = PriceReport::from_ledger(&ledger);
/// assert_eq!(report.entries()[0].name, "banana");
/// assert!(report.to_string().ends_with("apple: $1.50\n"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceReport {
    entries: Vec<LedgerEntry>,
}

impl PriceReport {
    /// Builds the report from the final ledger.
    pub fn from_ledger(ledger: &Ledger) -> Self {
        let mut entries: Vec<LedgerEntry> = ledger
            .iter()
            .map(|(name, price)| LedgerEntry::new(name, price))
            .collect();
        entries.sort_by_key(|entry| entry.price);

        PriceReport { entries }
    }

    /// Sorted entries.
    pub fn entries(&self) -> &[LedgerEntry] {
        &self.entries
    }

    /// `true` when nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Display for PriceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.entries.is_empty() {
            return writeln!(f, "{EMPTY_REPORT}");
        }

        writeln!(f)?;
        writeln!(f, "{REPORT_HEADING}")?;
        for entry in &self.entries {
            writeln!(f, "{}: {}", entry.name, entry.price)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::price::Price;

    fn ledger(pairs: &[(&str, &str)]) -> Ledger {
        let mut ledger = Ledger::new();
        for (name, price) in pairs {
            ledger.insert(*name, Price::parse(price).unwrap());
        }
        ledger
    }

    #[test]
    fn test_sorted_with_stable_ties() {
        let ledger = ledger(&[("apple", "1.50"), ("banana", "0.75"), ("cherry", "1.50")]);
        let report = PriceReport::from_ledger(&ledger);

        let names: Vec<&str> = report.entries().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["banana", "apple", "cherry"]);
    }

    #[test]
    fn test_ties_compare_by_value_not_text() {
        let ledger = ledger(&[("cherry", "1.5"), ("apple", "1.50"), ("banana", "1.500")]);
        let report = PriceReport::from_ledger(&ledger);

        let names: Vec<&str> = report.entries().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["cherry", "apple", "banana"]);
    }

    #[test]
    fn test_render() {
        let ledger = ledger(&[("apple", "1.5"), ("banana", "0.75"), ("cherry", "10")]);
        let rendered = PriceReport::from_ledger(&ledger).to_string();

        assert_eq!(
            rendered,
            "\nFruits and their prices, sorted by price (cheapest first):\n\
             banana: $0.75\n\
             apple: $1.50\n\
             cherry: $10.00\n"
        );
    }

    #[test]
    fn test_render_empty() {
        let report = PriceReport::from_ledger(&Ledger::new());
        assert!(report.is_empty());
        assert_eq!(report.to_string(), "No fruits were entered.\n");
    }
}
