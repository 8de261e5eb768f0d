//! Deterministic write-failure injection
//!
//! Wraps another store and fails `put` calls for a configured set of
//! keys. Used by tests to exercise the engine's write-failure paths,
//! in particular the partially applied transfer that sequential commit
//! mode allows and atomic commit mode prevents.
//!
//! Failures are injected by key rather than by rate so tests stay
//! deterministic.

use crate::store::{KeyValueStore, StoreError};
use std::collections::HashSet;

/// Store wrapper that fails writes to selected keys
///
/// Reads pass through untouched. `put` to a failing key returns a
/// [`StoreError`] without reaching the inner store; `put_batch` checks
/// every entry up front and applies nothing when any entry would fail,
/// honoring the all-or-nothing contract of an overriding backend.
#[derive(Debug, Default)]
pub struct FaultStore<S> {
    inner: S,
    failing_keys: HashSet<String>,
}

impl<S> FaultStore<S> {
    /// Wrap a store with no failures configured
    pub fn new(inner: S) -> Self {
        FaultStore {
            inner,
            failing_keys: HashSet::new(),
        }
    }

    /// Configure writes to `key` to fail
    pub fn fail_writes_to(mut self, key: &str) -> Self {
        self.failing_keys.insert(key.to_string());
        self
    }

    /// Access the wrapped store
    pub fn inner(&self) -> &S {
        &self.inner
    }
}

impl<S: KeyValueStore> KeyValueStore for FaultStore<S> {
    fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.inner.get(key)
    }

    fn put(&mut self, key: &str, value: Vec<u8>) -> Result<(), StoreError> {
        if self.failing_keys.contains(key) {
            return Err(StoreError::new(key, "injected write failure"));
        }
        self.inner.put(key, value)
    }

    fn put_batch(&mut self, entries: Vec<(String, Vec<u8>)>) -> Result<(), StoreError> {
        if let Some((key, _)) = entries
            .iter()
            .find(|(key, _)| self.failing_keys.contains(key))
        {
            return Err(StoreError::new(key.clone(), "injected write failure"));
        }
        self.inner.put_batch(entries)
    }
}
