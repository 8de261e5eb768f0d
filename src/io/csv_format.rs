//! CSV format handling for operation records and outcome output
//!
//! This module centralizes the CSV wire format:
//! - `OperationCsvRecord` for deserializing the operation stream
//! - Conversion from CSV records to [`OperationRequest`]
//! - `OutcomeWriter` for the per-operation outcome stream
//!
//! The operation stream has the header `op,arg1,arg2,arg3`; rows list
//! only the columns they use (the reader is configured as flexible).
//! The outcome stream has the header `op,result`.

use crate::types::{LedgerError, OperationRequest};
use serde::Deserialize;
use std::io::Write;

/// CSV record structure for deserialization
///
/// The argument columns are optional because operations take between
/// zero and three arguments; missing trailing columns deserialize as
/// `None`.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct OperationCsvRecord {
    pub op: String,
    pub arg1: Option<String>,
    pub arg2: Option<String>,
    pub arg3: Option<String>,
}

/// Convert an OperationCsvRecord to an OperationRequest
///
/// Collects the present argument columns into the positional argument
/// list. No validation happens here; argument counts and contents are
/// checked by the dispatch boundary, which knows the named operation.
pub fn convert_operation_record(record: OperationCsvRecord) -> OperationRequest {
    let args = [record.arg1, record.arg2, record.arg3]
        .into_iter()
        .flatten()
        .collect();
    OperationRequest {
        op: record.op,
        args,
    }
}

/// CSV writer for the per-operation outcome stream
///
/// Writes the header on construction and one `op,result` row per
/// dispatched operation. The result column carries the success payload
/// or the rendered error string.
pub struct OutcomeWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> OutcomeWriter<W> {
    /// Create a writer and emit the header row
    ///
    /// # Errors
    ///
    /// Returns an `Io` error if the header cannot be written.
    pub fn new(output: W) -> Result<Self, LedgerError> {
        let mut writer = csv::Writer::from_writer(output);
        writer
            .write_record(["op", "result"])
            .map_err(|e| LedgerError::io(format!("Failed to write outcome header: {}", e)))?;
        Ok(OutcomeWriter { writer })
    }

    /// Write one outcome row
    ///
    /// # Errors
    ///
    /// Returns an `Io` error if the row cannot be written.
    pub fn write_outcome(&mut self, op: &str, result: &str) -> Result<(), LedgerError> {
        self.writer
            .write_record([op, result])
            .map_err(|e| LedgerError::io(format!("Failed to write outcome record: {}", e)))
    }

    /// Flush buffered rows to the underlying writer
    ///
    /// # Errors
    ///
    /// Returns an `Io` error if flushing fails.
    pub fn flush(&mut self) -> Result<(), LedgerError> {
        self.writer
            .flush()
            .map_err(|e| LedgerError::io(format!("Failed to flush output: {}", e)))
    }
}
