//! Key-value store collaborator
//!
//! The ledger is held by an external key-value store; the engine only
//! reads and writes individual entries through the [`KeyValueStore`]
//! trait. Persistence, durability, and isolation are the store's
//! concern, not the engine's.
//!
//! # Components
//!
//! - `memory` - in-memory store backed by a `HashMap`
//! - `fault` - deterministic write-failure wrapper for tests
//!
//! # Atomicity
//!
//! `get` and `put` operate on single entries. [`KeyValueStore::put_batch`]
//! writes several entries in one call; its default implementation applies
//! the entries one at a time and offers no atomicity. Backends that can
//! commit multiple keys together override it, which is what the engine's
//! atomic commit mode relies on.

use thiserror::Error;

pub mod fault;
pub mod memory;

pub use fault::FaultStore;
pub use memory::InMemoryStore;

/// A failed store write, scoped to the key that failed
///
/// Reads have no error channel: a missing key is an ordinary `None`,
/// which the engine maps to `AccountNotFound`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("write failed for key '{key}': {message}")]
pub struct StoreError {
    /// The key whose write failed
    pub key: String,
    /// Store-level failure description
    pub message: String,
}

impl StoreError {
    /// Create a StoreError for the given key
    pub fn new(key: impl Into<String>, message: impl Into<String>) -> Self {
        StoreError {
            key: key.into(),
            message: message.into(),
        }
    }
}

/// Key-value store contract
///
/// Values are opaque bytes; the engine layers balance-text encoding on
/// top. Implementations are synchronous: a call either returns a result
/// or fails, with no timeout or cancellation modeled.
pub trait KeyValueStore {
    /// Read the value stored under `key`
    ///
    /// Returns `None` when no entry exists. No distinction is made
    /// between an absent key and one that was never written.
    fn get(&self, key: &str) -> Option<Vec<u8>>;

    /// Write `value` under `key`, overwriting any existing entry
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] naming the key on any store-level
    /// failure (I/O, validation, quota).
    fn put(&mut self, key: &str, value: Vec<u8>) -> Result<(), StoreError>;

    /// Write several entries in one call
    ///
    /// The default implementation applies the entries sequentially with
    /// `put` and stops at the first failure, leaving earlier entries
    /// written. Backends with multi-key commit override this so that
    /// either every entry is applied or none is.
    ///
    /// # Errors
    ///
    /// Returns the [`StoreError`] of the failing entry.
    fn put_batch(&mut self, entries: Vec<(String, Vec<u8>)>) -> Result<(), StoreError> {
        for (key, value) in entries {
            self.put(&key, value)?;
        }
        Ok(())
    }
}
