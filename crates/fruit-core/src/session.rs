//! # Entry Session
//!
//! The interactive entry loop as an explicit state machine.
//!
//! The session never touches stdin, stdout or files. The caller feeds it one
//! line at a time and acts on the returned [`Outcome`]: print a message,
//! persist an accepted entry, or stop.
//!
//! ## State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │            ┌──────────── NotAllowed / Duplicate ───────────┐           │
//! │            │                                               │           │
//! │            ▼                                               │           │
//! │   ┌──────────────────┐   valid name   ┌──────────────────┐ │           │
//! │   │  AwaitingName    │ ─────────────► │  AwaitingPrice   │─┘ (no)     │
//! │   └──────────────────┘                └──────────────────┘             │
//! │      │          ▲                        │        │    ▲               │
//! │      │ "done"   │     Accepted (commit)  │        │    │ InvalidPrice  │
//! │      │ / EOF    └────────────────────────┘        └────┘               │
//! │      ▼                                                                  │
//! │   ┌──────────────────┐                                                  │
//! │   │    Finished      │ ◄── EOF while awaiting a price                  │
//! │   └──────────────────┘                                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::mem;

use crate::allow_list::AllowList;
use crate::error::ValidationError;
use crate::ledger::{Ledger, LedgerEntry};
use crate::validation::{is_done_command, validate_fruit_name, validate_price};

/// Prompt shown while waiting for a fruit name.
pub const NAME_PROMPT: &str = "Enter a fruit (or 'done' to finish): ";

/// Where the session currently is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// Waiting for a fruit name or the `done` command.
    AwaitingName,

    /// A valid name was given; waiting for its price.
    AwaitingPrice { name: String },

    /// The user typed `done` or input ended.
    Finished,
}

/// Result of feeding one line to the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Name accepted; the next line is its price.
    PriceRequested { name: String },

    /// Input refused. The session stays on the same prompt, except that a
    /// rejected name goes back to the name prompt.
    Rejected(ValidationError),

    /// Entry committed to the ledger; the caller must persist it.
    Accepted(LedgerEntry),

    /// Session is over; the caller prints the report.
    Finished,
}

/// Drives one run of the entry loop.
///
/// ## Example
/// ```rust
/// use fruit_core::{AllowList, EntrySession, Ledger, Outcome, ValidationError};
///
/// let allowed = AllowList::from_lines(["apple"]);
/// let mut ledger = Ledger::new();
/// let mut session = EntrySession::new();
///
/// let outcome = session.handle_line("kiwi", &allowed, &mut ledger);
/// assert!(matches!(outcome, Outcome::Rejected(ValidationError::NotAllowed { .. })));
///
/// session.handle_line("apple", &allowed, &mut ledger);
/// session.handle_line("1.50", &allowed, &mut ledger);
/// assert_eq!(session.handle_line("DONE", &allowed, &mut ledger), Outcome::Finished);
/// assert!(session.is_finished());
/// ```
#[derive(Debug, Clone)]
pub struct EntrySession {
    state: SessionState,
}

impl Default for EntrySession {
    fn default() -> Self {
        EntrySession::new()
    }
}

impl EntrySession {
    /// Starts a session at the name prompt.
    pub fn new() -> Self {
        EntrySession {
            state: SessionState::AwaitingName,
        }
    }

    /// Current state.
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// `true` once `done` was entered or input ended.
    pub fn is_finished(&self) -> bool {
        self.state == SessionState::Finished
    }

    /// Prompt text for the current state, `None` when finished.
    pub fn prompt(&self) -> Option<String> {
        match &self.state {
            SessionState::AwaitingName => Some(NAME_PROMPT.to_string()),
            SessionState::AwaitingPrice { name } => Some(format!("Enter the price for {name}: ")),
            SessionState::Finished => None,
        }
    }

    /// Feeds one input line to the session.
    ///
    /// Names are trimmed before any check; the trimmed text (original case)
    /// becomes the ledger key. On a valid price the entry is inserted into
    /// `ledger` before `Accepted` is returned.
    pub fn handle_line(
        &mut self,
        line: &str,
        allowed: &AllowList,
        ledger: &mut Ledger,
    ) -> Outcome {
        match mem::replace(&mut self.state, SessionState::Finished) {
            SessionState::AwaitingName => self.handle_name(line.trim(), allowed, ledger),
            SessionState::AwaitingPrice { name } => self.handle_price(name, line, ledger),
            SessionState::Finished => Outcome::Finished,
        }
    }

    /// Ends the session because input ran out.
    ///
    /// A name still waiting for its price is dropped.
    pub fn end_of_input(&mut self) -> Outcome {
        self.state = SessionState::Finished;
        Outcome::Finished
    }

    fn handle_name(&mut self, name: &str, allowed: &AllowList, ledger: &Ledger) -> Outcome {
        if is_done_command(name) {
            self.state = SessionState::Finished;
            return Outcome::Finished;
        }

        self.state = SessionState::AwaitingName;
        match validate_fruit_name(name, allowed, ledger) {
            Ok(()) => {
                self.state = SessionState::AwaitingPrice {
                    name: name.to_string(),
                };
                Outcome::PriceRequested {
                    name: name.to_string(),
                }
            }
            Err(err) => Outcome::Rejected(err),
        }
    }

    fn handle_price(&mut self, name: String, input: &str, ledger: &mut Ledger) -> Outcome {
        match validate_price(input) {
            Ok(price) => {
                ledger.insert(name.clone(), price);
                self.state = SessionState::AwaitingName;
                Outcome::Accepted(LedgerEntry::new(name, price))
            }
            Err(err) => {
                self.state = SessionState::AwaitingPrice { name };
                Outcome::Rejected(err)
            }
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
