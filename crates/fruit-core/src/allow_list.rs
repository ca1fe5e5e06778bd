//! # Allow-List
//!
//! The set of fruit names a user may enter.
//!
//! Names are stored trimmed and lower-cased, so membership is
//! case-insensitive. The set is built once at startup and only read after.

use std::collections::HashSet;

/// Case-insensitive set of permitted fruit names.
///
/// ## Example
/// ```rust
/// use fruit_core::AllowList;
///
/// let allowed = AllowList::from_lines(["  Apple ", "", "BANANA", "apple"]);
/// assert_eq!(allowed.len(), 2);
/// assert!(allowed.contains("aPPle"));
/// assert!(!allowed.contains("kiwi"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllowList {
    names: HashSet<String>,
}

impl AllowList {
    /// Creates an empty allow-list.
    pub fn new() -> Self {
        AllowList::default()
    }

    /// Builds the set from raw lines: trims, lower-cases, drops blanks.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut allowed = AllowList::new();
        for line in lines {
            allowed.insert(line.as_ref());
        }
        allowed
    }

    /// Adds one name. Blank names are ignored.
    ///
    /// Returns `true` if the name was not already present.
    pub fn insert(&mut self, name: &str) -> bool {
        let name = normalize(name);
        if name.is_empty() {
            return false;
        }
        self.names.insert(name)
    }

    /// Case-insensitive membership test.
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(&normalize(name))
    }

    /// Number of distinct names.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// `true` when no name is allowed, which makes the entry loop pointless.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_lines_normalizes() {
        let allowed = AllowList::from_lines(["Apple", "  cherry  ", "\t", ""]);
        assert_eq!(allowed.len(), 2);
        assert!(allowed.contains("apple"));
        assert!(allowed.contains("CHERRY"));
        assert!(!allowed.contains(""));
    }

    #[test]
    fn test_loading_is_order_and_duplicate_insensitive() {
        let a = AllowList::from_lines(["apple", "banana", "cherry"]);
        let b = AllowList::from_lines(["Cherry", "banana", "APPLE", "apple", "banana"]);
        assert_eq!(a, b);
    }

    #[test]
    fn test_insert_reports_new_names() {
        let mut allowed = AllowList::new();
        assert!(allowed.is_empty());
        assert!(allowed.insert("Mango"));
        assert!(!allowed.insert("mango"));
        assert!(!allowed.insert("   "));
        assert_eq!(allowed.len(), 1);
    }
}
