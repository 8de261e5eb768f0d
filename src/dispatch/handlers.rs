//! Operation handlers
//!
//! One typed handler per wire operation. Handlers validate the
//! positional argument count, invoke the engine, and produce the
//! response payload: `"success"` for mutations, the stored balance text
//! for reads.

use crate::core::TransferEngine;
use crate::store::KeyValueStore;
use crate::types::LedgerError;

/// Success payload returned by mutating operations
pub const SUCCESS: &str = "success";

fn expect_args(op: &str, args: &[String], expected: usize) -> Result<(), LedgerError> {
    if args.len() != expected {
        return Err(LedgerError::invalid_argument_count(
            op,
            expected,
            args.len(),
        ));
    }
    Ok(())
}

/// `createAccount id initialBalanceText`
pub(super) fn create_account<S: KeyValueStore>(
    engine: &mut TransferEngine<S>,
    args: &[String],
) -> Result<String, LedgerError> {
    expect_args("createAccount", args, 2)?;
    engine.create_account(&args[0], &args[1])?;
    Ok(SUCCESS.to_string())
}

/// `getBalance id`
pub(super) fn get_balance<S: KeyValueStore>(
    engine: &mut TransferEngine<S>,
    args: &[String],
) -> Result<String, LedgerError> {
    expect_args("getBalance", args, 1)?;
    engine.get_balance(&args[0])
}

/// `sendAmount fromId toId amountText`
pub(super) fn send_amount<S: KeyValueStore>(
    engine: &mut TransferEngine<S>,
    args: &[String],
) -> Result<String, LedgerError> {
    expect_args("sendAmount", args, 3)?;
    engine.transfer(&args[0], &args[1], &args[2])?;
    Ok(SUCCESS.to_string())
}

/// `createAccounts` (no arguments)
pub(super) fn create_accounts<S: KeyValueStore>(
    engine: &mut TransferEngine<S>,
    args: &[String],
) -> Result<String, LedgerError> {
    expect_args("createAccounts", args, 0)?;
    engine.seed_demo_accounts()?;
    Ok(SUCCESS.to_string())
}
