//! Ledger Engine CLI
//!
//! Command-line interface for applying balance-transfer operations from
//! a CSV file against an in-memory key-value ledger.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- operations.csv > outcomes.csv
//! cargo run -- --commit atomic operations.csv > outcomes.csv
//! ```
//!
//! The program reads operation records from the input CSV file, routes
//! each through the dispatch table, and writes one outcome row per
//! operation to stdout. Malformed records are reported on stderr and
//! skipped.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (missing arguments, file not found, output not writable)

use rust_ledger_engine::cli;
use rust_ledger_engine::core::TransferEngine;
use rust_ledger_engine::dispatch::{run_operations, Dispatcher};
use rust_ledger_engine::store::InMemoryStore;
use std::process;

fn main() {
    // Parse command-line arguments using clap
    let args = cli::parse_args();

    // The dispatch table is built once and passed by reference into the
    // request-handling path
    let dispatcher = Dispatcher::new();
    let mut engine = TransferEngine::with_commit_mode(InMemoryStore::new(), args.to_commit_mode());

    // Outcomes go to stdout
    let mut output = std::io::stdout();
    if let Err(e) = run_operations(&dispatcher, &mut engine, &args.input_file, &mut output) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
