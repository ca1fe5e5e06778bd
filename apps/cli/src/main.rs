//! # Fruit Ledger Entry Point
//!
//! ## Startup Sequence
//! 1. Load configuration (defaults, `fruit-ledger.toml`, `FRUIT_*`)
//! 2. Initialize tracing (stderr)
//! 3. Load the allow-list; stop early if it is missing or empty
//! 4. Load the ledger from a previous run, if any
//! 5. Run the entry loop on stdin/stdout
//! 6. Print the report
//!
//! Fatal errors are printed on stderr and the process exits with status 1.

use std::process::ExitCode;

fn main() -> ExitCode {
    // The actual setup is in lib.rs for better testability
    match fruit_cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
