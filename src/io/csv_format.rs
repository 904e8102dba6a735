//! CSV format handling for account output
//!
//! Writes one `id,balance` row per account. Balances keep their own scale, so
//! `70.00` is written as `70.00` and `0.125` as `0.125`.

use crate::types::{Account, LedgerError};
use std::io::Write;

/// Write account balances to CSV format
///
/// Accounts are sorted by id for deterministic output.
///
/// # Arguments
///
/// * `accounts` - Slice of accounts to write
/// * `output` - Mutable reference to a writer for outputting CSV
///
/// # Errors
///
/// Returns `LedgerError::Io` if writing or flushing fails
pub fn write_accounts_csv(accounts: &[Account], output: &mut dyn Write) -> Result<(), LedgerError> {
    let mut writer = csv::Writer::from_writer(output);

    writer.write_record(["id", "balance"])?;

    let mut sorted_accounts = accounts.to_vec();
    sorted_accounts.sort_by_key(|account| account.id);

    for account in sorted_accounts {
        writer.write_record(&[account.id.to_string(), account.balance.to_string()])?;
    }

    writer.flush()?;

    Ok(())
}
