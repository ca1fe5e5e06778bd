//! # Fruit Ledger CLI Library
//!
//! Core library for the `fruit-ledger` binary. `main.rs` only calls [`run`].
//!
//! ## Module Organization
//! ```text
//! fruit_cli/
//! ├── lib.rs          ◄─── You are here (startup & orchestration)
//! ├── config.rs       ◄─── Layered configuration
//! ├── console.rs      ◄─── Prompt/read loop around the entry session
//! └── error.rs        ◄─── Fatal error type
//! ```
//!
//! ## Program Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  1. Allow-list ──── missing? ──► "File '…' not found…"                 │
//! │        │                              │                                 │
//! │        ├──── empty? ◄─────────────────┘                                │
//! │        │       └──► "No allowed fruits found. Exiting program." (exit 0)│
//! │        ▼                                                                │
//! │  2. Ledger ──── present? ──► "Previous fruit data loaded successfully."│
//! │        ▼                                                                │
//! │  3. Entry loop (console.rs) until "done" or EOF                        │
//! │        ▼                                                                │
//! │  4. Price report                                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod console;
pub mod error;

use std::io::{self, BufRead, Write};

use fruit_core::{AllowList, Ledger, PriceReport};
use fruit_store::Store;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;
use crate::console::{run_entry_loop, Console};
use crate::error::AppResult;

pub use crate::error::AppError;

/// Runs the program on the real stdin/stdout.
///
/// ## Startup Sequence
/// 1. Load configuration
/// 2. Initialize tracing (stderr, so prompts on stdout stay clean)
/// 3. Hand over to [`run_with`]
pub fn run() -> AppResult<()> {
    let config = AppConfig::load()?;
    init_tracing(&config.log_filter);

    info!(?config, "Starting Fruit Ledger");

    let store = Store::new(config.store_config());
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock());

    run_with(&store, &mut console)
}

/// Runs the whole program flow against `store` and `console`.
pub fn run_with<R: BufRead, W: Write>(store: &Store, console: &mut Console<R, W>) -> AppResult<()> {
    // 1. Allow-list
    let allowed_repo = store.allowed_fruits();
    let allowed = match allowed_repo.load()? {
        Some(allowed) => allowed,
        None => {
            warn!(path = %allowed_repo.path().display(), "Allow-list file missing");
            console.say(&format!(
                "File '{}' not found. Please make sure it exists.",
                allowed_repo.path().display()
            ))?;
            AllowList::new()
        }
    };

    if allowed.is_empty() {
        console.say("No allowed fruits found. Exiting program.")?;
        return Ok(());
    }

    // 2. Ledger from previous runs
    let ledger_repo = store.ledger();
    let mut ledger = match ledger_repo.load()? {
        Some(ledger) => {
            console.say("Previous fruit data loaded successfully.")?;
            ledger
        }
        None => Ledger::new(),
    };

    // 3. Entry loop
    run_entry_loop(console, &allowed, &mut ledger, &ledger_repo)?;

    // 4. Report
    console.write(&PriceReport::from_ledger(&ledger).to_string())?;

    info!(entries = ledger.len(), "Fruit Ledger finished");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=fruit_store=debug` - Show skipped ledger lines only
/// - Default: the configured filter (`warn`)
fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

// =============================================================================
// Unit Tests
// =============================================================================
