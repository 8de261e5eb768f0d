//! In-memory key-value store
//!
//! Backs the ledger with a `HashMap`. Writes cannot fail, and
//! `put_batch` is trivially atomic: all entries land in one call on a
//! single thread.

use crate::store::{KeyValueStore, StoreError};
use std::collections::HashMap;

/// In-memory store backed by a `HashMap`
///
/// The default backend for the CLI and for tests. Each process run
/// starts from an empty ledger, so operation streams typically begin
/// with `createAccount` or `createAccounts` records.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    entries: HashMap<String, Vec<u8>>,
}

impl InMemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        InMemoryStore {
            entries: HashMap::new(),
        }
    }

    /// Number of entries currently stored
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for InMemoryStore {
    fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.entries.get(key).cloned()
    }

    fn put(&mut self, key: &str, value: Vec<u8>) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }

    fn put_batch(&mut self, entries: Vec<(String, Vec<u8>)>) -> Result<(), StoreError> {
        // HashMap inserts cannot fail, so applying all entries here is a
        // genuine multi-key commit.
        for (key, value) in entries {
            self.entries.insert(key, value);
        }
        Ok(())
    }
}
