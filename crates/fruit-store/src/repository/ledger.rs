//! # Ledger Repository
//!
//! Reads and appends `fruits.csv`.
//!
//! ## File Format
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  fruits.csv                                                             │
//! │                                                                         │
//! │  apple,1.50        ← name as typed, price with the typed scale          │
//! │  Banana,0.75                                                            │
//! │  cherry,2                                                               │
//! │                                                                         │
//! │  • No header, no quoting, one entry per line                            │
//! │  • Exactly two comma-separated fields, otherwise the line is skipped    │
//! │  • A price is any plain decimal, negatives included                     │
//! │  • Duplicate names: the last line wins                                  │
//! │  • A name containing ',' cannot be read back                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Durability
//! Each [`LedgerRepository::append`] is its own open/write/flush/close cycle.
//! A process killed mid-write can damage only the last line.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use fruit_core::{Ledger, LedgerEntry, Price};
use tracing::{debug, info};

use super::read_optional;
use crate::error::{StoreError, StoreResult};

/// Field separator of the ledger file.
pub const FIELD_SEPARATOR: char = ',';

/// Repository for the ledger file.
#[derive(Debug, Clone)]
pub struct LedgerRepository {
    path: PathBuf,
}

impl LedgerRepository {
    /// Creates a repository for the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        LedgerRepository { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads previously persisted entries.
    ///
    /// ## Returns
    /// * `Ok(Some(Ledger))` - File existed; malformed lines were skipped
    /// * `Ok(None)` - No file yet (first run)
    /// * `Err(StoreError)` - File exists but could not be read
    pub fn load(&self) -> StoreResult<Option<Ledger>> {
        let Some(contents) = read_optional(&self.path)? else {
            debug!(path = %self.path.display(), "No ledger file, starting empty");
            return Ok(None);
        };

        let mut ledger = Ledger::new();
        let mut skipped = 0usize;
        for (index, line) in contents.lines().enumerate() {
            match parse_line(line) {
                Some(entry) => {
                    ledger.insert(entry.name, entry.price);
                }
                None => {
                    skipped += 1;
                    debug!(line_number = index + 1, line = %line, "Skipping malformed ledger line");
                }
            }
        }

        info!(
            path = %self.path.display(),
            entries = ledger.len(),
            skipped,
            "Ledger loaded"
        );
        Ok(Some(ledger))
    }

    /// Appends one entry as a new line, creating the file if needed.
    ///
    /// The file is flushed and closed before this returns.
    pub fn append(&self, entry: &LedgerEntry) -> StoreResult<()> {
        let line = format_line(entry);

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|err| StoreError::append(&self.path, err))?;

        writeln!(file, "{line}").map_err(|err| StoreError::append(&self.path, err))?;
        file.flush()
            .map_err(|err| StoreError::append(&self.path, err))?;

        debug!(path = %self.path.display(), line = %line, "Ledger entry appended");
        Ok(())
    }
}

/// Parses one ledger line into an entry.
///
/// Returns `None` unless the line has exactly two fields and the second is a
/// decimal. A negative price is kept as written. The name field is kept
/// verbatim.
///
/// ## Example
/// ```rust
/// use fruit_store::repository::ledger::parse_line;
///
/// assert_eq!(parse_line("apple,1.50").unwrap().name, "apple");
/// assert!(parse_line("apple").is_none());
/// assert!(parse_line("apple,1,50").is_none());
/// assert!(parse_line("apple,-1").is_some());
/// ```
pub fn parse_line(line: &str) -> Option<LedgerEntry> {
    let mut fields = line.split(FIELD_SEPARATOR);
    let (Some(name), Some(price), None) = (fields.next(), fields.next(), fields.next()) else {
        return None;
    };

    let price = Price::parse_persisted(price).ok()?;
    Some(LedgerEntry::new(name, price))
}

/// Formats an entry as a ledger line (without the line terminator).
pub fn format_line(entry: &LedgerEntry) -> String {
    format!(
        "{}{}{}",
        entry.name,
        FIELD_SEPARATOR,
        entry.price.to_ledger_string()
    )
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn price(s: &str) -> Price {
        Price::parse(s).unwrap()
    }

    #[test]
    fn test_parse_line() {
        let entry = parse_line("apple,1.50").unwrap();
        assert_eq!(entry, LedgerEntry::new("apple", price("1.50")));

        // Price field tolerates whitespace, the name keeps it
        let entry = parse_line(" Kiwi , 2 ").unwrap();
        assert_eq!(entry.name, " Kiwi ");
        assert_eq!(entry.price, price("2"));
    }

    #[test]
    fn test_parse_line_rejects_malformed() {
        assert!(parse_line("").is_none());
        assert!(parse_line("apple").is_none());
        assert!(parse_line("apple,").is_none());
        assert!(parse_line("apple,cheap").is_none());
        assert!(parse_line("apple,1.50,extra").is_none());
        assert!(parse_line("apple,1_5").is_none());
    }

    #[test]
    fn test_parse_line_keeps_negative_price() {
        let entry = parse_line("apple,-1").unwrap();
        assert_eq!(entry.name, "apple");
        assert!(entry.price.is_negative());
        assert_eq!(format_line(&entry), "apple,-1");
    }

    #[test]
    fn test_format_line_keeps_scale() {
        let entry = LedgerEntry::new("apple", price("1.50"));
        assert_eq!(format_line(&entry), "apple,1.50");
    }

    #[test]
    fn test_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let repo = LedgerRepository::new(dir.path().join("fruits.csv"));
        assert_eq!(repo.load().unwrap(), None);
    }

    #[test]
    fn test_load_skips_malformed_and_last_wins() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fruits.csv");
        fs::write(
            &path,
            "apple,1.50\nbroken line\nbanana,0.75\r\napple,2.00\ncherry,abc\n\n",
        )
        .unwrap();

        let ledger = LedgerRepository::new(&path).load().unwrap().unwrap();
        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.get("apple"), Some(price("2")));
        assert_eq!(ledger.get("banana"), Some(price("0.75")));

        let names: Vec<&str> = ledger.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["apple", "banana"]);
    }

    #[test]
    fn test_append_creates_and_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fruits.csv");
        let repo = LedgerRepository::new(&path);

        repo.append(&LedgerEntry::new("apple", price("1.50"))).unwrap();
        repo.append(&LedgerEntry::new("banana", price("0.75"))).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "apple,1.50\nbanana,0.75\n");
    }

    #[test]
    fn test_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let repo = LedgerRepository::new(dir.path().join("fruits.csv"));

        repo.append(&LedgerEntry::new("apple", price("1.50"))).unwrap();
        repo.append(&LedgerEntry::new("Apple", price("0"))).unwrap();

        let ledger = repo.load().unwrap().unwrap();
        assert_eq!(ledger.get("apple"), Some(price("1.50")));
        assert_eq!(ledger.get("Apple"), Some(Price::zero()));
    }

    #[test]
    fn test_name_with_comma_is_lost_on_reload() {
        let dir = tempfile::tempdir().unwrap();
        let repo = LedgerRepository::new(dir.path().join("fruits.csv"));

        repo.append(&LedgerEntry::new("kiwi, gold", price("3"))).unwrap();
        let ledger = repo.load().unwrap().unwrap();
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_append_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let repo = LedgerRepository::new(dir.path().join("missing").join("fruits.csv"));

        let err = repo
            .append(&LedgerEntry::new("apple", price("1")))
            .unwrap_err();
        assert!(matches!(err, StoreError::AppendFailed { .. }));
    }
}
