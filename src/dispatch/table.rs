//! Dispatch table
//!
//! Maps operation names to typed handlers. The table is built once at
//! startup and passed by reference into the request-handling path, so
//! routing is an explicit data structure rather than string branching
//! spread across call sites.

use crate::core::TransferEngine;
use crate::dispatch::handlers;
use crate::store::KeyValueStore;
use crate::types::{LedgerError, OperationRequest};
use std::collections::HashMap;

/// A typed operation handler
///
/// Takes the engine and the positional string arguments; returns the
/// response payload or an error.
pub type Handler<S> = fn(&mut TransferEngine<S>, &[String]) -> Result<String, LedgerError>;

/// Operation-name to handler mapping
///
/// Construct once with [`Dispatcher::new`]; the registered set of
/// operations is fixed for the lifetime of the process.
pub struct Dispatcher<S> {
    handlers: HashMap<&'static str, Handler<S>>,
}

impl<S: KeyValueStore> Dispatcher<S> {
    /// Build the dispatch table with all supported operations
    pub fn new() -> Self {
        let mut table: HashMap<&'static str, Handler<S>> = HashMap::new();
        table.insert("createAccount", handlers::create_account::<S>);
        table.insert("getBalance", handlers::get_balance::<S>);
        table.insert("sendAmount", handlers::send_amount::<S>);
        table.insert("createAccounts", handlers::create_accounts::<S>);
        Dispatcher { handlers: table }
    }

    /// Route a request to its handler
    ///
    /// # Arguments
    ///
    /// * `engine` - The engine the handler operates on
    /// * `request` - Operation name and positional arguments
    ///
    /// # Returns
    ///
    /// The handler's response payload (`"success"` or a balance text).
    ///
    /// # Errors
    ///
    /// Returns `UnknownOperation` for an unregistered name; otherwise
    /// whatever the handler returns.
    pub fn dispatch(
        &self,
        engine: &mut TransferEngine<S>,
        request: &OperationRequest,
    ) -> Result<String, LedgerError> {
        let handler = self
            .handlers
            .get(request.op.as_str())
            .ok_or_else(|| LedgerError::unknown_operation(&request.op))?;
        handler(engine, &request.args)
    }

    /// Names of all registered operations, sorted
    pub fn operation_names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.handlers.keys().copied().collect();
        names.sort_unstable();
        names
    }
}

impl<S: KeyValueStore> Default for Dispatcher<S> {
    fn default() -> Self {
        Self::new()
    }
}
