//! Account service
//!
//! This module provides the `AccountService`, which orchestrates every account
//! operation as fetch → mutate → persist against an injected `AccountStore`.
//!
//! # Concurrency
//!
//! Credits and debits against the same account are serialized with a per-account
//! async mutex, so two concurrent mutations can never both read the same
//! starting balance. Mutations on different accounts do not contend, and reads
//! take no lock. Lock entries are dropped once no request holds them, including
//! requests whose future is cancelled mid-mutation.

use crate::core::traits::AccountStore;
use crate::types::{Account, AccountId, LedgerError};
use dashmap::DashMap;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Externally visible state of an account
///
/// The balance is serialized as a JSON number with its full decimal precision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountView {
    pub id: AccountId,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub balance: Decimal,
}

impl From<&Account> for AccountView {
    fn from(account: &Account) -> Self {
        AccountView {
            id: account.id,
            balance: account.balance,
        }
    }
}

/// Account operations over a shared store
pub struct AccountService {
    store: Arc<dyn AccountStore>,
    /// Per-account mutation locks, present only while a mutation is in flight
    locks: DashMap<AccountId, Arc<Mutex<()>>>,
}

impl AccountService {
    /// Create a service backed by `store`
    pub fn new(store: Arc<dyn AccountStore>) -> Self {
        AccountService {
            store,
            locks: DashMap::new(),
        }
    }

    /// Create a zero-balance account and persist it
    ///
    /// # Returns
    ///
    /// The view of the new account, carrying its store-assigned id
    pub async fn create_account(&self) -> Result<AccountView, LedgerError> {
        let account = self.store.create(Account::new(0)).await?;
        tracing::info!(account_id = account.id, "account created");
        Ok(AccountView::from(&account))
    }

    /// Credit `amount` to account `id`
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The account does not exist
    /// - The amount is negative or the balance would overflow
    /// - The store fails
    pub async fn credit(&self, id: AccountId, amount: Decimal) -> Result<AccountView, LedgerError> {
        self.mutate(id, "credit", move |account| account.credit(amount))
            .await
    }

    /// Debit `amount` from account `id`
    ///
    /// A rejected debit performs no write.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The account does not exist
    /// - The amount is negative
    /// - The balance is lower than the amount
    /// - The store fails
    pub async fn debit(&self, id: AccountId, amount: Decimal) -> Result<AccountView, LedgerError> {
        self.mutate(id, "debit", move |account| account.debit(amount))
            .await
    }

    /// Current view of account `id`
    pub async fn get_account(&self, id: AccountId) -> Result<AccountView, LedgerError> {
        let account = self.fetch(id).await?;
        Ok(AccountView::from(&account))
    }

    /// All accounts ordered by id
    pub async fn list_accounts(&self) -> Result<Vec<Account>, LedgerError> {
        self.store.list().await
    }

    async fn fetch(&self, id: AccountId) -> Result<Account, LedgerError> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| LedgerError::account_not_found(id))
    }

    /// Run one fetch → mutate → save cycle while holding the account's lock
    async fn mutate<F>(
        &self,
        id: AccountId,
        operation: &'static str,
        f: F,
    ) -> Result<AccountView, LedgerError>
    where
        F: FnOnce(&mut Account) -> Result<(), LedgerError> + Send,
    {
        let entry = LockEntry::acquire(&self.locks, id);
        let result = {
            let _guard = entry.lock.lock().await;
            self.apply(id, f).await
        };
        drop(entry);

        match &result {
            Ok(view) => tracing::debug!(
                account_id = id,
                operation,
                balance = %view.balance,
                "account updated"
            ),
            Err(e) if e.is_invalid_input() => {
                tracing::warn!(account_id = id, operation, error = %e, "operation rejected")
            }
            Err(e) => tracing::error!(account_id = id, operation, error = %e, "operation failed"),
        }

        result
    }

    async fn apply<F>(&self, id: AccountId, f: F) -> Result<AccountView, LedgerError>
    where
        F: FnOnce(&mut Account) -> Result<(), LedgerError> + Send,
    {
        let mut account = self.fetch(id).await?;
        f(&mut account)?;
        let saved = self.store.save(&account).await?;
        Ok(AccountView::from(&saved))
    }
}

/// A request's handle on an account's lock
///
/// Dropping it removes the table entry when no other request holds it. This
/// runs on every exit from `mutate`, cancellation included.
struct LockEntry<'a> {
    locks: &'a DashMap<AccountId, Arc<Mutex<()>>>,
    id: AccountId,
    lock: Arc<Mutex<()>>,
}

impl<'a> LockEntry<'a> {
    fn acquire(locks: &'a DashMap<AccountId, Arc<Mutex<()>>>, id: AccountId) -> Self {
        let lock = locks
            .entry(id)
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone();
        LockEntry { locks, id, lock }
    }
}

impl Drop for LockEntry<'_> {
    fn drop(&mut self) {
        // One reference in the table, one here
        self.locks.remove_if(&self.id, |_, lock| {
            Arc::ptr_eq(lock, &self.lock) && Arc::strong_count(lock) == 2
        });
    }
}
