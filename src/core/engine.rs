//! Balance-transfer engine
//!
//! This module provides the TransferEngine that applies ledger
//! operations against a key-value store: account creation, balance
//! reads, two-account transfers, and bulk demo-account seeding.
//!
//! The engine enforces the transfer invariants:
//! - The total of the two balances is conserved by a successful transfer
//! - A transfer never succeeds with insufficient funds, so a valid
//!   transfer cannot drive the source account negative
//!
//! # Commit Modes
//!
//! A transfer must write two updated balances. How the two writes reach
//! the store is selected by [`CommitMode`]:
//!
//! - [`CommitMode::Sequential`] issues two independent `put` calls. If
//!   the second write fails after the first succeeded, the ledger is
//!   left in a partially applied, non-conserving state. The engine does
//!   not re-attempt or revert the first write; reconciliation is the
//!   caller's responsibility.
//! - [`CommitMode::Atomic`] issues both writes as one `put_batch` call.
//!   With a backend that commits batches as a unit, either both
//!   balances are updated or neither is.
//!
//! Sequential is the default. Use atomic commit whenever the backend
//! supports it.

use crate::store::KeyValueStore;
use crate::types::account::{balance_text, format_balance, parse_balance};
use crate::types::LedgerError;
use rust_decimal::Decimal;

/// How a transfer's two balance writes are committed to the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CommitMode {
    /// Two independent writes; a second-write failure leaves the ledger
    /// partially updated
    #[default]
    Sequential,
    /// One batch write; requires a backend whose `put_batch` applies
    /// all entries or none
    Atomic,
}

/// Balance-transfer engine over a key-value store
///
/// Each operation is a single synchronous sequence of store reads and
/// writes; the engine holds no cross-call state beyond the store itself.
///
/// # Examples
///
/// ```
/// use rust_ledger_engine::core::TransferEngine;
/// use rust_ledger_engine::store::InMemoryStore;
///
/// let mut engine = TransferEngine::new(InMemoryStore::new());
/// engine.create_account("alice", "100").unwrap();
/// engine.create_account("bob", "50").unwrap();
/// engine.transfer("alice", "bob", "30").unwrap();
/// assert_eq!(engine.get_balance("alice").unwrap(), "70");
/// assert_eq!(engine.get_balance("bob").unwrap(), "80");
/// ```
pub struct TransferEngine<S> {
    store: S,
    commit_mode: CommitMode,
}

impl<S: KeyValueStore> TransferEngine<S> {
    /// Create an engine with the default sequential commit mode
    pub fn new(store: S) -> Self {
        Self::with_commit_mode(store, CommitMode::default())
    }

    /// Create an engine with an explicit commit mode
    pub fn with_commit_mode(store: S, commit_mode: CommitMode) -> Self {
        TransferEngine { store, commit_mode }
    }

    /// The commit mode this engine was configured with
    pub fn commit_mode(&self) -> CommitMode {
        self.commit_mode
    }

    /// Access the underlying store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Create an account, overwriting any existing balance
    ///
    /// The initial balance text is stored verbatim; it is not validated
    /// as a number here. Validation happens when the account is read by
    /// a transfer.
    ///
    /// # Arguments
    ///
    /// * `id` - Account identifier
    /// * `initial_balance` - Balance text to store
    ///
    /// # Errors
    ///
    /// Returns `StoreWrite` scoped to `id` if the store write fails.
    pub fn create_account(&mut self, id: &str, initial_balance: &str) -> Result<(), LedgerError> {
        self.store.put(id, initial_balance.as_bytes().to_vec())?;
        Ok(())
    }

    /// Read the stored balance text for an account
    ///
    /// Returns the stored text verbatim without parsing it as a number.
    ///
    /// # Arguments
    ///
    /// * `id` - Account identifier
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No entry exists for `id` (`AccountNotFound`)
    /// - The stored bytes are not valid UTF-8 (`InvalidAccountState`)
    pub fn get_balance(&self, id: &str) -> Result<String, LedgerError> {
        let bytes = self
            .store
            .get(id)
            .ok_or_else(|| LedgerError::account_not_found(id))?;

        match balance_text(&bytes) {
            Some(text) => Ok(text.to_string()),
            None => Err(LedgerError::invalid_account_state(
                id,
                &String::from_utf8_lossy(&bytes),
            )),
        }
    }

    /// Transfer an amount between two accounts
    ///
    /// Validates the amount and both balances, checks sufficiency of
    /// funds, and writes the two updated balances using the configured
    /// commit mode. A successful transfer conserves the total of the two
    /// balances.
    ///
    /// A self-transfer (`from == to`) runs the same validations and then
    /// succeeds without issuing any write.
    ///
    /// # Arguments
    ///
    /// * `from` - Source account identifier
    /// * `to` - Destination account identifier
    /// * `amount_text` - Amount to move, as decimal text
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `amount_text` is not a decimal number (`InvalidAmount`)
    /// - Either account has no entry (`AccountNotFound`) or an
    ///   unparsable stored balance (`InvalidAccountState`)
    /// - The source balance is lower than the amount
    ///   (`InsufficientFunds`; no write occurs)
    /// - A balance write fails (`StoreWrite`, scoped to the account
    ///   whose write failed). In sequential mode a failure on the
    ///   destination write leaves the source already debited.
    pub fn transfer(&mut self, from: &str, to: &str, amount_text: &str) -> Result<(), LedgerError> {
        let amount =
            parse_balance(amount_text).map_err(|_| LedgerError::invalid_amount(amount_text))?;

        let from_balance = self.read_parsed_balance(from)?;
        let to_balance = self.read_parsed_balance(to)?;

        if from_balance < amount {
            return Err(LedgerError::insufficient_funds(from, from_balance, amount));
        }

        // Transferring to oneself nets to a no-op; skip the writes so
        // the operation cannot partially fail.
        if from == to {
            return Ok(());
        }

        let new_from = from_balance
            .checked_sub(amount)
            .ok_or_else(|| LedgerError::arithmetic_overflow(from))?;
        let new_to = to_balance
            .checked_add(amount)
            .ok_or_else(|| LedgerError::arithmetic_overflow(to))?;

        let from_value = format_balance(&new_from).into_bytes();
        let to_value = format_balance(&new_to).into_bytes();

        match self.commit_mode {
            CommitMode::Sequential => {
                self.store.put(from, from_value)?;
                self.store.put(to, to_value)?;
            }
            CommitMode::Atomic => {
                self.store.put_batch(vec![
                    (from.to_string(), from_value),
                    (to.to_string(), to_value),
                ])?;
            }
        }

        Ok(())
    }

    /// Seed the fixed set of demo accounts
    ///
    /// Creates `accounta1`..`accounta99` and `accountb1`..`accountb99`,
    /// 198 accounts in total, each at balance `"100"`. Existing entries
    /// under those keys are overwritten.
    ///
    /// # Errors
    ///
    /// Returns `StoreWrite` scoped to the first account whose write
    /// fails; earlier seeds remain written.
    pub fn seed_demo_accounts(&mut self) -> Result<(), LedgerError> {
        for i in 1..100 {
            self.create_account(&format!("accounta{}", i), "100")?;
            self.create_account(&format!("accountb{}", i), "100")?;
        }
        Ok(())
    }

    /// Read and parse an account balance
    fn read_parsed_balance(&self, id: &str) -> Result<Decimal, LedgerError> {
        let text = self.get_balance(id)?;
        parse_balance(&text).map_err(|_| LedgerError::invalid_account_state(id, &text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{FaultStore, InMemoryStore, KeyValueStore};
    use rstest::rstest;
    use rust_decimal::Decimal;

    fn engine_with_accounts(accounts: &[(&str, &str)]) -> TransferEngine<InMemoryStore> {
        let mut engine = TransferEngine::new(InMemoryStore::new());
        for (id, balance) in accounts {
            engine.create_account(id, balance).unwrap();
        }
        engine
    }

    #[test]
    fn test_create_then_read_round_trip() {
        let engine = engine_with_accounts(&[("acc1", "100")]);
        assert_eq!(engine.get_balance("acc1").unwrap(), "100");
    }

    #[test]
    fn test_create_overwrites_existing_balance() {
        let mut engine = engine_with_accounts(&[("acc1", "100")]);
        engine.create_account("acc1", "250").unwrap();
        assert_eq!(engine.get_balance("acc1").unwrap(), "250");
    }

    #[test]
    fn test_create_does_not_validate_balance_text() {
        let engine = engine_with_accounts(&[("acc1", "notanumber")]);
        // stored verbatim; only a transfer rejects it
        assert_eq!(engine.get_balance("acc1").unwrap(), "notanumber");
    }

    #[test]
    fn test_get_balance_unknown_account() {
        let engine = TransferEngine::new(InMemoryStore::new());
        let err = engine.get_balance("nonexistent").unwrap_err();
        assert_eq!(err, LedgerError::account_not_found("nonexistent"));
    }

    #[test]
    fn test_get_balance_is_idempotent() {
        let engine = engine_with_accounts(&[("acc1", "100")]);
        let first = engine.get_balance("acc1").unwrap();
        let second = engine.get_balance("acc1").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_transfer_moves_funds() {
        let mut engine = engine_with_accounts(&[("A", "100"), ("B", "50")]);
        engine.transfer("A", "B", "30").unwrap();
        assert_eq!(engine.get_balance("A").unwrap(), "70");
        assert_eq!(engine.get_balance("B").unwrap(), "80");
    }

    #[rstest]
    #[case::integers("100", "50", "30")]
    #[case::fractional("12.75", "0.25", "4.5")]
    #[case::entire_balance("10", "0", "10")]
    fn test_transfer_conserves_total(#[case] from: &str, #[case] to: &str, #[case] amount: &str) {
        let mut engine = engine_with_accounts(&[("A", from), ("B", to)]);
        let total_before = parse_balance(from).unwrap() + parse_balance(to).unwrap();

        engine.transfer("A", "B", amount).unwrap();

        let total_after = parse_balance(&engine.get_balance("A").unwrap()).unwrap()
            + parse_balance(&engine.get_balance("B").unwrap()).unwrap();
        assert_eq!(total_after, total_before);
        assert!(parse_balance(&engine.get_balance("A").unwrap()).unwrap() >= Decimal::ZERO);
    }

    #[test]
    fn test_transfer_insufficient_funds_leaves_balances_unchanged() {
        let mut engine = engine_with_accounts(&[("A", "10"), ("B", "0")]);

        let err = engine.transfer("A", "B", "30").unwrap_err();

        assert_eq!(
            err,
            LedgerError::insufficient_funds("A", Decimal::new(10, 0), Decimal::new(30, 0))
        );
        assert_eq!(engine.get_balance("A").unwrap(), "10");
        assert_eq!(engine.get_balance("B").unwrap(), "0");
    }

    #[test]
    fn test_transfer_invalid_amount_leaves_balances_unchanged() {
        let mut engine = engine_with_accounts(&[("A", "100"), ("B", "50")]);

        let err = engine.transfer("A", "B", "notanumber").unwrap_err();

        assert_eq!(err, LedgerError::invalid_amount("notanumber"));
        assert_eq!(engine.get_balance("A").unwrap(), "100");
        assert_eq!(engine.get_balance("B").unwrap(), "50");
    }

    #[rstest]
    #[case::missing_source("ghost", "B", "ghost")]
    #[case::missing_destination("A", "ghost", "ghost")]
    fn test_transfer_missing_account(
        #[case] from: &str,
        #[case] to: &str,
        #[case] missing: &str,
    ) {
        let mut engine = engine_with_accounts(&[("A", "100"), ("B", "50")]);
        let err = engine.transfer(from, to, "30").unwrap_err();
        assert_eq!(err, LedgerError::account_not_found(missing));
    }

    #[test]
    fn test_transfer_unparsable_stored_balance() {
        let mut engine = engine_with_accounts(&[("A", "abc"), ("B", "50")]);
        let err = engine.transfer("A", "B", "30").unwrap_err();
        assert_eq!(err, LedgerError::invalid_account_state("A", "abc"));
        assert_eq!(engine.get_balance("B").unwrap(), "50");
    }

    #[test]
    fn test_self_transfer_is_a_validated_no_op() {
        let mut engine = engine_with_accounts(&[("A", "40")]);

        engine.transfer("A", "A", "15").unwrap();
        assert_eq!(engine.get_balance("A").unwrap(), "40");

        let err = engine.transfer("A", "A", "100").unwrap_err();
        assert_eq!(
            err,
            LedgerError::insufficient_funds("A", Decimal::new(40, 0), Decimal::new(100, 0))
        );
    }

    #[test]
    fn test_transfer_preserves_balance_scale() {
        let mut engine = engine_with_accounts(&[("A", "100.00"), ("B", "50")]);
        engine.transfer("A", "B", "30").unwrap();
        assert_eq!(engine.get_balance("A").unwrap(), "70.00");
        assert_eq!(engine.get_balance("B").unwrap(), "80");
    }

    #[test]
    fn test_sequential_commit_partial_failure_is_observable() {
        let mut inner = InMemoryStore::new();
        inner.put("A", b"100".to_vec()).unwrap();
        inner.put("B", b"50".to_vec()).unwrap();
        let store = FaultStore::new(inner).fail_writes_to("B");

        let mut engine = TransferEngine::with_commit_mode(store, CommitMode::Sequential);
        let err = engine.transfer("A", "B", "30").unwrap_err();

        assert_eq!(
            err,
            LedgerError::store_write("B", "injected write failure")
        );
        // the source write already landed: the ledger no longer conserves
        assert_eq!(engine.get_balance("A").unwrap(), "70");
        assert_eq!(engine.get_balance("B").unwrap(), "50");
    }

    #[test]
    fn test_sequential_commit_first_write_failure_leaves_destination_untouched() {
        let mut inner = InMemoryStore::new();
        inner.put("A", b"100".to_vec()).unwrap();
        inner.put("B", b"50".to_vec()).unwrap();
        let store = FaultStore::new(inner).fail_writes_to("A");

        let mut engine = TransferEngine::with_commit_mode(store, CommitMode::Sequential);
        let err = engine.transfer("A", "B", "30").unwrap_err();

        assert_eq!(
            err,
            LedgerError::store_write("A", "injected write failure")
        );
        assert_eq!(engine.get_balance("A").unwrap(), "100");
        assert_eq!(engine.get_balance("B").unwrap(), "50");
    }

    #[test]
    fn test_atomic_commit_closes_the_partial_failure_window() {
        let mut inner = InMemoryStore::new();
        inner.put("A", b"100".to_vec()).unwrap();
        inner.put("B", b"50".to_vec()).unwrap();
        let store = FaultStore::new(inner).fail_writes_to("B");

        let mut engine = TransferEngine::with_commit_mode(store, CommitMode::Atomic);
        let err = engine.transfer("A", "B", "30").unwrap_err();

        assert_eq!(
            err,
            LedgerError::store_write("B", "injected write failure")
        );
        // neither write was applied
        assert_eq!(engine.get_balance("A").unwrap(), "100");
        assert_eq!(engine.get_balance("B").unwrap(), "50");
    }

    #[test]
    fn test_seed_demo_accounts() {
        let mut engine = TransferEngine::new(InMemoryStore::new());
        engine.seed_demo_accounts().unwrap();

        assert_eq!(engine.store().len(), 198);
        assert_eq!(engine.get_balance("accounta1").unwrap(), "100");
        assert_eq!(engine.get_balance("accountb99").unwrap(), "100");
        assert_eq!(
            engine.get_balance("accounta100").unwrap_err(),
            LedgerError::account_not_found("accounta100")
        );
    }

    #[test]
    fn test_seeded_accounts_are_transferable() {
        let mut engine = TransferEngine::new(InMemoryStore::new());
        engine.seed_demo_accounts().unwrap();

        engine.transfer("accounta1", "accountb1", "25").unwrap();
        assert_eq!(engine.get_balance("accounta1").unwrap(), "75");
        assert_eq!(engine.get_balance("accountb1").unwrap(), "125");
    }
}
