//! # Console Loop
//!
//! Connects the [`EntrySession`] state machine to a line-based terminal.
//!
//! ## One Iteration
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  session.prompt() ──► write prompt, flush ──► read one line            │
//! │                                                   │                     │
//! │                              EOF ◄────────────────┤                     │
//! │                               │                   ▼                     │
//! │                               │        session.handle_line(line)       │
//! │                               ▼                   │                     │
//! │                      session.end_of_input()       ▼                     │
//! │                                                Outcome                  │
//! │   Rejected(err)   → print err                                          │
//! │   Accepted(entry) → append to fruits.csv, print confirmation           │
//! │   Finished        → leave the loop                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Generic over `BufRead`/`Write` so tests can script a whole session.

use std::io::{self, BufRead, Write};

use fruit_core::{AllowList, EntrySession, Ledger, Outcome};
use fruit_store::LedgerRepository;
use tracing::{debug, info};

use crate::error::AppResult;

/// Line-oriented console over any reader/writer pair.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Wraps an input and an output stream.
    pub fn new(input: R, output: W) -> Self {
        Console { input, output }
    }

    /// Writes `text` without a newline, flushes, then reads one line.
    ///
    /// Returns `None` at end of input. The line terminator is stripped.
    pub fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        self.read_line()
    }

    /// Writes `line` followed by a newline.
    pub fn say(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.output, "{line}")
    }

    /// Writes `text` as-is and flushes.
    pub fn write(&mut self, text: &str) -> io::Result<()> {
        write!(self.output, "{text}")?;
        self.output.flush()
    }

    /// Consumes the console and returns the output stream.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Bytes that are not valid UTF-8 become U+FFFD; bad input is the
    /// session's to reject, not a console failure.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }

        let line = String::from_utf8_lossy(&buf);
        Ok(Some(line.trim_end_matches(&['\n', '\r'][..]).to_string()))
    }
}

/// Runs the interactive entry loop until `done` or end of input.
///
/// Every accepted entry is added to `ledger` and appended to `repository`
/// before the confirmation is printed. An append failure aborts the loop.
pub fn run_entry_loop<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    allowed: &AllowList,
    ledger: &mut Ledger,
    repository: &LedgerRepository,
) -> AppResult<()> {
    let mut session = EntrySession::new();

    while let Some(prompt) = session.prompt() {
        let outcome = match console.prompt(&prompt)? {
            Some(line) => session.handle_line(&line, allowed, ledger),
            None => {
                // Keep the report off the prompt line
                console.say("")?;
                session.end_of_input()
            }
        };

        match outcome {
            Outcome::PriceRequested { name } => {
                debug!(name = %name, "Name accepted, awaiting price");
            }
            Outcome::Rejected(err) => {
                debug!(error = ?err, "Input rejected");
                console.say(&err.to_string())?;
            }
            Outcome::Accepted(entry) => {
                repository.append(&entry)?;
                info!(name = %entry.name, price = %entry.price, "Entry saved");
                console.say(&format!(
                    "Fruit '{}' with price {} saved.",
                    entry.name, entry.price
                ))?;
            }
            Outcome::Finished => {
                debug!(entries = ledger.len(), "Entry session finished");
            }
        }
    }

    Ok(())
}
