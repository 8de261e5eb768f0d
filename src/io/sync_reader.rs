//! Streaming CSV reader for the operation stream
//!
//! Provides an iterator over operation requests read from a CSV file.
//! Record-format concerns live in the `csv_format` module; this reader
//! only streams rows and attaches line numbers to parse errors.
//!
//! # Error Handling
//!
//! - Fatal errors (file not found) are returned from `new()`
//! - Individual record parse errors are yielded as `Err` items so the
//!   caller can skip them and continue

use crate::io::csv_format::{convert_operation_record, OperationCsvRecord};
use crate::types::{LedgerError, OperationRequest};
use csv::{ReaderBuilder, Trim};
use std::fs::File;
use std::path::Path;

/// Streaming reader over operation records
///
/// Reads rows one at a time; memory usage does not grow with the size
/// of the input file.
#[derive(Debug)]
pub struct OperationReader {
    reader: csv::Reader<File>,
    line_num: u64,
}

impl OperationReader {
    /// Open an operation stream for reading
    ///
    /// The CSV reader trims whitespace from all fields and accepts
    /// rows with fewer columns than the header, since operations take
    /// between zero and three arguments.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the input CSV file
    ///
    /// # Errors
    ///
    /// Returns an `Io` error if the file cannot be opened.
    pub fn new(path: &Path) -> Result<Self, LedgerError> {
        let file = File::open(path).map_err(|e| {
            LedgerError::io(format!("Failed to open file '{}': {}", path.display(), e))
        })?;

        let reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_reader(file);

        Ok(Self {
            reader,
            line_num: 0,
        })
    }
}

impl Iterator for OperationReader {
    type Item = Result<OperationRequest, LedgerError>;

    /// Get the next operation request from the CSV file
    ///
    /// # Returns
    ///
    /// * `Some(Ok(OperationRequest))` - successfully parsed record
    /// * `Some(Err(LedgerError))` - parse error with line number
    /// * `None` - end of file reached
    fn next(&mut self) -> Option<Self::Item> {
        let mut deserializer = self.reader.deserialize::<OperationCsvRecord>();

        match deserializer.next()? {
            Ok(record) => {
                self.line_num += 1;
                Some(Ok(convert_operation_record(record)))
            }
            Err(e) => {
                self.line_num += 1;
                // +1 for the header row
                Some(Err(LedgerError::parse(
                    Some(self.line_num + 1),
                    e.to_string(),
                )))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content.as_bytes())
            .expect("Failed to write to temp file");
        file.flush().expect("Failed to flush temp file");
        file
    }

    #[test]
    fn test_reader_fails_on_missing_file() {
        let result = OperationReader::new(Path::new("nonexistent.csv"));
        assert!(matches!(result, Err(LedgerError::Io { .. })));
    }

    #[test]
    fn test_reader_iterates_operations_with_varying_arity() {
        let file = create_temp_csv(
            "op,arg1,arg2,arg3\n\
             createAccounts\n\
             getBalance,acc1\n\
             createAccount,acc1,100\n\
             sendAmount,acc1,acc2,30\n",
        );

        let reader = OperationReader::new(file.path()).unwrap();
        let requests: Vec<_> = reader.map(Result::unwrap).collect();

        assert_eq!(requests.len(), 4);
        assert_eq!(requests[0], OperationRequest::new("createAccounts", vec![]));
        assert_eq!(
            requests[1],
            OperationRequest::new("getBalance", vec!["acc1".to_string()])
        );
        assert_eq!(
            requests[2],
            OperationRequest::new(
                "createAccount",
                vec!["acc1".to_string(), "100".to_string()]
            )
        );
        assert_eq!(
            requests[3],
            OperationRequest::new(
                "sendAmount",
                vec!["acc1".to_string(), "acc2".to_string(), "30".to_string()]
            )
        );
    }

    #[test]
    fn test_reader_trims_whitespace() {
        let file = create_temp_csv("op,arg1,arg2,arg3\n  createAccount , acc1 , 100 \n");

        let reader = OperationReader::new(file.path()).unwrap();
        let requests: Vec<_> = reader.map(Result::unwrap).collect();

        assert_eq!(
            requests[0],
            OperationRequest::new(
                "createAccount",
                vec!["acc1".to_string(), "100".to_string()]
            )
        );
    }

    #[test]
    fn test_reader_reports_line_numbers_for_malformed_records() {
        // the middle record is not valid UTF-8
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(b"op,arg1,arg2,arg3\ngetBalance,acc1\ngetBalance,\xffacc\ngetBalance,acc2\n")
            .expect("Failed to write to temp file");
        file.flush().expect("Failed to flush temp file");

        let reader = OperationReader::new(file.path()).unwrap();
        let results: Vec<_> = reader.collect();

        assert_eq!(results.len(), 3);
        assert!(results[0].is_ok());
        assert!(results[1].is_err());
        assert!(results[2].is_ok());

        let err = results[1].as_ref().unwrap_err();
        assert!(err.to_string().contains("at line 3"));
    }

    #[test]
    fn test_reader_handles_empty_file_after_header() {
        let file = create_temp_csv("op,arg1,arg2,arg3\n");

        let reader = OperationReader::new(file.path()).unwrap();
        assert_eq!(reader.count(), 0);
    }
}
