//! I/O module
//!
//! Handles CSV parsing and output.
//!
//! # Components
//!
//! - `csv_format` - CSV wire format (record conversion, outcome stream)
//! - `sync_reader` - streaming CSV reader with iterator interface

pub mod csv_format;
pub mod sync_reader;

pub use csv_format::{convert_operation_record, OperationCsvRecord, OutcomeWriter};
pub use sync_reader::OperationReader;
