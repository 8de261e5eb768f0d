//! Ledger Engine Library
//! # Overview
//!
//! This library provides a ledger-backed balance-transfer engine
//! operating against an external key-value store.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (account identifiers, balance text
//!   helpers, operation requests, errors)
//! - [`store`] - Key-value store collaborator (trait, in-memory backend,
//!   fault-injecting test wrapper)
//! - [`core`] - Business logic: the transfer engine and its commit modes
//! - [`dispatch`] - Operation-name to handler routing and the streaming
//!   runner
//! - [`io`] - CSV wire format for operation and outcome streams
//! - [`cli`] - CLI argument parsing
//!
//! # Operations
//!
//! The engine supports four operations:
//!
//! - **createAccount**: Write an account's balance text, overwriting any
//!   existing entry; the text is not validated as a number at creation
//! - **getBalance**: Read an account's stored balance text verbatim
//! - **sendAmount**: Transfer a decimal amount between two accounts,
//!   conserving the total of the two balances and rejecting transfers
//!   that exceed the source balance
//! - **createAccounts**: Seed 198 fixed demo accounts at balance `100`
//!
//! # Commit Modes
//!
//! A transfer writes two updated balances. In the default sequential
//! mode the writes are independent, so a failure of the second write
//! leaves the ledger partially updated; atomic mode issues both writes
//! as one batch and relies on a backend that commits batches as a unit.

// Module declarations
pub mod cli;
pub mod core;
pub mod dispatch;
pub mod io;
pub mod store;
pub mod types;

pub use core::{CommitMode, TransferEngine};
pub use dispatch::{run_operations, Dispatcher};
pub use io::{OperationReader, OutcomeWriter};
pub use store::{FaultStore, InMemoryStore, KeyValueStore, StoreError};
pub use types::{AccountId, LedgerError, OperationRequest};
