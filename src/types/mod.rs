//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `account`: account identifiers and balance text helpers
//! - `operation`: operation request shape for the dispatch boundary
//! - `error`: error types for the ledger engine

pub mod account;
pub mod error;
pub mod operation;

pub use account::{balance_text, format_balance, parse_balance, AccountId};
pub use error::LedgerError;
pub use operation::OperationRequest;
