//! Core traits for account persistence
//!
//! The store is handed to the service explicitly, so the same service code runs
//! against the in-memory backend in tests and SQLite in production.

use crate::types::{Account, AccountId, LedgerError};
use async_trait::async_trait;

/// Trait for persisting accounts
///
/// The store owns the authoritative copy of every account. Callers work on
/// clones and write them back with `save`; the most recently saved state wins.
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Persist a new account and return it with its store-assigned id
    ///
    /// The id on the incoming account is ignored. Assigned ids are positive and
    /// increase with every call.
    async fn create(&self, account: Account) -> Result<Account, LedgerError>;

    /// Fetch an account by id, `Ok(None)` when it does not exist
    async fn find_by_id(&self, id: AccountId) -> Result<Option<Account>, LedgerError>;

    /// Overwrite the stored state of an existing account
    ///
    /// Fails with `AccountNotFound` when the id was never assigned.
    async fn save(&self, account: &Account) -> Result<Account, LedgerError>;

    /// All accounts ordered by id
    async fn list(&self) -> Result<Vec<Account>, LedgerError>;
}
