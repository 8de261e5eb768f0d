//! Operation stream runner
//!
//! Orchestrates the complete pipeline: streams operation records from
//! the input CSV, routes each through the dispatch table, and writes one
//! outcome row per operation to the output.
//!
//! # Error Handling
//!
//! Fatal errors (input not readable, output not writable) are returned
//! immediately. A malformed input record is reported on stderr and
//! skipped. A dispatched operation that fails is not fatal either: its
//! error is rendered into the outcome row, and processing continues with
//! the next record.

use crate::core::TransferEngine;
use crate::dispatch::Dispatcher;
use crate::io::csv_format::OutcomeWriter;
use crate::io::sync_reader::OperationReader;
use crate::store::KeyValueStore;
use crate::types::LedgerError;
use std::io::Write;
use std::path::Path;

/// Apply an operation stream to the engine and write outcomes
///
/// # Arguments
///
/// * `dispatcher` - Dispatch table built at startup
/// * `engine` - Engine holding the ledger store
/// * `input_path` - Path to the input CSV of operation records
/// * `output` - Writer receiving the outcome CSV
///
/// # Errors
///
/// Returns an error if the input file cannot be opened or the output
/// cannot be written. Per-record failures never abort the run.
pub fn run_operations<S: KeyValueStore>(
    dispatcher: &Dispatcher<S>,
    engine: &mut TransferEngine<S>,
    input_path: &Path,
    output: &mut dyn Write,
) -> Result<(), LedgerError> {
    let reader = OperationReader::new(input_path)?;
    let mut writer = OutcomeWriter::new(output)?;

    for result in reader {
        match result {
            Ok(request) => {
                // Errors become the outcome payload; the tagged kind is
                // rendered to text only here, at the outermost boundary.
                let outcome = match dispatcher.dispatch(engine, &request) {
                    Ok(payload) => payload,
                    Err(err) => err.to_string(),
                };
                writer.write_outcome(&request.op, &outcome)?;
            }
            Err(err) => eprintln!("Skipping record: {}", err),
        }
    }

    writer.flush()
}
