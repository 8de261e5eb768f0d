//! Account-related types for the ledger engine
//!
//! An account is a uniquely keyed entry in the ledger store: an opaque
//! string identifier mapped to a balance stored as text. This module
//! defines the identifier type and the balance text parse/format helpers
//! used by the transfer engine.

use rust_decimal::Decimal;
use std::str::FromStr;

/// Account identifier
///
/// Opaque string key under which an account's balance is stored.
/// The engine imposes no structure on identifiers beyond uniqueness.
pub type AccountId = String;

/// Parse balance or amount text into a `Decimal`
///
/// Leading and trailing whitespace is ignored. Scientific notation is
/// not accepted; the text must be a plain decimal number such as
/// `"100"`, `"-3.5"`, or `"0.0001"`.
///
/// # Arguments
///
/// * `text` - The balance or amount text to parse
///
/// # Returns
///
/// * `Ok(Decimal)` if the text is a valid decimal number
/// * `Err(rust_decimal::Error)` otherwise
pub fn parse_balance(text: &str) -> Result<Decimal, rust_decimal::Error> {
    Decimal::from_str(text.trim())
}

/// Serialize a balance for storage
///
/// Uses the `Decimal` display form, which preserves the scale of the
/// inputs it was computed from: `"100" - "30"` serializes as `"70"`,
/// while `"100.00" - "30"` serializes as `"70.00"`. The sign of zero
/// follows `rust_decimal` semantics.
pub fn format_balance(value: &Decimal) -> String {
    value.to_string()
}

/// Decode stored bytes as balance text
///
/// Returns `None` when the stored value is not valid UTF-8, which the
/// engine reports as an invalid account state.
pub fn balance_text(bytes: &[u8]) -> Option<&str> {
    std::str::from_utf8(bytes).ok()
}
