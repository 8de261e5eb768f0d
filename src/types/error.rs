//! Error types for the ledger engine
//!
//! This module defines all error kinds that can occur while applying
//! ledger operations. Errors carry a tagged kind with context fields
//! through the whole call chain and are rendered to a human-readable
//! string only at the outermost boundary (the operation outcome stream
//! and stderr).
//!
//! # Error Categories
//!
//! - **File I/O errors**: input file not readable, output not writable
//! - **CSV parsing errors**: malformed operation records
//! - **Dispatch errors**: unknown operation name, wrong argument count
//! - **Ledger errors**: missing accounts, unparsable balances,
//!   insufficient funds, store write failures

use crate::store::StoreError;
use rust_decimal::Decimal;
use thiserror::Error;

/// Main error type for the ledger engine
///
/// Each variant includes the context needed to diagnose the failure.
/// Every error is local to a single operation invocation and is returned
/// to the caller immediately; nothing is retried internally.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LedgerError {
    /// I/O error while reading input or writing output
    ///
    /// This is a fatal error that aborts the run.
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
    },

    /// CSV parsing error in the operation stream
    ///
    /// This is a recoverable error - the malformed record is skipped
    /// and processing continues with the next record.
    #[error("CSV parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    Parse {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },

    /// Operation name not present in the dispatch table
    #[error("no such operation: '{op}'")]
    UnknownOperation {
        /// The unrecognized operation name
        op: String,
    },

    /// Wrong number of arguments for an operation
    ///
    /// Detected by the dispatch boundary before the engine or the store
    /// is touched.
    #[error("{op} expects {expected} argument(s), got {actual}")]
    InvalidArgumentCount {
        /// Operation name
        op: String,
        /// Number of arguments the operation requires
        expected: usize,
        /// Number of arguments actually supplied
        actual: usize,
    },

    /// Transfer amount text is not a parseable decimal number
    #[error("Invalid amount '{amount}'")]
    InvalidAmount {
        /// The unparsable amount text
        amount: String,
    },

    /// No entry exists in the store for the account
    #[error("No such account: {account}")]
    AccountNotFound {
        /// The missing account identifier
        account: String,
    },

    /// Stored value for the account is not a parseable balance
    ///
    /// Balances are validated when read by a transfer, never at
    /// creation time, so an account created with arbitrary text only
    /// fails once it participates in a transfer.
    #[error("Invalid balance '{stored}' stored for account {account}")]
    InvalidAccountState {
        /// The account whose stored value is unparsable
        account: String,
        /// The stored text (lossily decoded if not UTF-8)
        stored: String,
    },

    /// Source account balance is lower than the requested amount
    ///
    /// The transfer is rejected before any write; both balances remain
    /// unchanged.
    #[error(
        "Insufficient funds for account {account}: available {available}, requested {requested}"
    )]
    InsufficientFunds {
        /// Source account identifier
        account: String,
        /// Available balance
        available: Decimal,
        /// Requested transfer amount
        requested: Decimal,
    },

    /// A store write failed
    ///
    /// Scoped to the account whose write failed. A transfer that fails
    /// on its second write after the first succeeded leaves the ledger
    /// in a partially applied state (see the engine documentation for
    /// the commit modes).
    #[error("Failed to update account {account}: {message}")]
    StoreWrite {
        /// The account whose write failed
        account: String,
        /// Store-level failure description
        message: String,
    },

    /// Balance arithmetic exceeded the numeric range of `Decimal`
    #[error("Arithmetic overflow adjusting balance for account {account}")]
    ArithmeticOverflow {
        /// The account whose new balance overflowed
        account: String,
    },
}

// Conversion from io::Error to LedgerError
impl From<std::io::Error> for LedgerError {
    fn from(error: std::io::Error) -> Self {
        LedgerError::Io {
            message: error.to_string(),
        }
    }
}

// Conversion from StoreError keeps the failing key as the error scope
impl From<StoreError> for LedgerError {
    fn from(error: StoreError) -> Self {
        LedgerError::StoreWrite {
            account: error.key,
            message: error.message,
        }
    }
}

// Helper functions for creating common errors

impl LedgerError {
    /// Create an Io error
    pub fn io(message: impl Into<String>) -> Self {
        LedgerError::Io {
            message: message.into(),
        }
    }

    /// Create a Parse error
    pub fn parse(line: Option<u64>, message: impl Into<String>) -> Self {
        LedgerError::Parse {
            line,
            message: message.into(),
        }
    }

    /// Create an UnknownOperation error
    pub fn unknown_operation(op: &str) -> Self {
        LedgerError::UnknownOperation { op: op.to_string() }
    }

    /// Create an InvalidArgumentCount error
    pub fn invalid_argument_count(op: &str, expected: usize, actual: usize) -> Self {
        LedgerError::InvalidArgumentCount {
            op: op.to_string(),
            expected,
            actual,
        }
    }

    /// Create an InvalidAmount error
    pub fn invalid_amount(amount: &str) -> Self {
        LedgerError::InvalidAmount {
            amount: amount.to_string(),
        }
    }

    /// Create an AccountNotFound error
    pub fn account_not_found(account: &str) -> Self {
        LedgerError::AccountNotFound {
            account: account.to_string(),
        }
    }

    /// Create an InvalidAccountState error
    pub fn invalid_account_state(account: &str, stored: &str) -> Self {
        LedgerError::InvalidAccountState {
            account: account.to_string(),
            stored: stored.to_string(),
        }
    }

    /// Create an InsufficientFunds error
    pub fn insufficient_funds(account: &str, available: Decimal, requested: Decimal) -> Self {
        LedgerError::InsufficientFunds {
            account: account.to_string(),
            available,
            requested,
        }
    }

    /// Create a StoreWrite error
    pub fn store_write(account: &str, message: impl Into<String>) -> Self {
        LedgerError::StoreWrite {
            account: account.to_string(),
            message: message.into(),
        }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(account: &str) -> Self {
        LedgerError::ArithmeticOverflow {
            account: account.to_string(),
        }
    }
}
