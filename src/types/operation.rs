//! Operation-related types for the ledger engine
//!
//! A caller supplies an operation name and an ordered list of string
//! arguments; the dispatch boundary maps the name to a typed handler and
//! validates the arguments. This module defines the request shape shared
//! by the reader and the dispatcher.

/// A single operation request from the input stream
///
/// The operation name selects a handler in the dispatch table; the
/// arguments are positional and untyped at this level. Argument counts
/// and contents are validated by the handler for the named operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationRequest {
    /// Operation name, e.g. `createAccount` or `sendAmount`
    pub op: String,

    /// Positional string arguments for the operation
    pub args: Vec<String>,
}

impl OperationRequest {
    /// Create a request from an operation name and arguments
    pub fn new(op: impl Into<String>, args: Vec<String>) -> Self {
        OperationRequest {
            op: op.into(),
            args,
        }
    }
}
