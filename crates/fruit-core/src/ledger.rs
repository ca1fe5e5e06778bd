//! # Ledger
//!
//! The in-memory mapping from fruit name to price.
//!
//! ## Key Semantics
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Allow-list check        case-insensitive   "Apple" ≈ "apple"          │
//! │  Ledger key              exact, as typed    "Apple" ≠ "apple"          │
//! │                                                                         │
//! │  Both "Apple" and "apple" pass the allow-list and become two entries.  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Entries keep insertion order. Re-inserting an existing name replaces the
//! price but keeps the original position, which is how the file loader
//! applies "last line wins".

use indexmap::IndexMap;

use crate::price::Price;

/// One (name, price) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerEntry {
    /// Fruit name exactly as the user typed it.
    pub name: String,

    /// Non-negative price.
    pub price: Price,
}

impl LedgerEntry {
    /// Creates a new entry.
    pub fn new(name: impl Into<String>, price: Price) -> Self {
        LedgerEntry {
            name: name.into(),
            price,
        }
    }
}

/// Insertion-ordered name → price mapping.
///
/// ## Example
/// ```rust
/// use fruit_core::{Ledger, Price};
///
/// let mut ledger = Ledger::new();
/// ledger.insert("apple", Price::parse("1.50").unwrap());
/// ledger.insert("Apple", Price::parse("2").unwrap());
///
/// assert_eq!(ledger.len(), 2);
/// assert!(ledger.contains("apple"));
/// assert!(!ledger.contains("APPLE"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ledger {
    entries: IndexMap<String, Price>,
}

impl Ledger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Ledger::default()
    }

    /// Inserts or replaces a price.
    ///
    /// Returns the previous price when the name was already present.
    pub fn insert(&mut self, name: impl Into<String>, price: Price) -> Option<Price> {
        self.entries.insert(name.into(), price)
    }

    /// Exact (case-sensitive) key lookup.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Returns the price recorded for `name`.
    pub fn get(&self, name: &str) -> Option<Price> {
        self.entries.get(name).copied()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` when nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Price)> + '_ {
        self.entries.iter().map(|(name, price)| (name.as_str(), *price))
    }
}

impl Extend<LedgerEntry> for Ledger {
    fn extend<T: IntoIterator<Item = LedgerEntry>>(&mut self, iter: T) {
        for entry in iter {
            self.insert(entry.name, entry.price);
        }
    }
}

impl FromIterator<LedgerEntry> for Ledger {
    fn from_iter<T: IntoIterator<Item = LedgerEntry>>(iter: T) -> Self {
        let mut ledger = Ledger::new();
        ledger.extend(iter);
        ledger
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn price(s: &str) -> Price {
        Price::parse(s).unwrap()
    }

    #[test]
    fn test_insert_and_get() {
        let mut ledger = Ledger::new();
        assert!(ledger.is_empty());

        assert_eq!(ledger.insert("apple", price("1.50")), None);
        assert_eq!(ledger.get("apple"), Some(price("1.5")));
        assert_eq!(ledger.get("banana"), None);
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_keys_are_case_sensitive() {
        let mut ledger = Ledger::new();
        ledger.insert("apple", price("1"));
        ledger.insert("Apple", price("2"));

        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.get("apple"), Some(price("1")));
        assert_eq!(ledger.get("Apple"), Some(price("2")));
    }

    #[test]
    fn test_replace_keeps_position() {
        let ledger: Ledger = vec![
            LedgerEntry::new("apple", price("1")),
            LedgerEntry::new("banana", price("2")),
            LedgerEntry::new("apple", price("3")),
        ]
        .into_iter()
        .collect();

        let names: Vec<&str> = ledger.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["apple", "banana"]);
        assert_eq!(ledger.get("apple"), Some(price("3")));
    }
}
