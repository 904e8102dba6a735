//! In-memory account store
//!
//! Accounts live in a `DashMap`, so concurrent requests touching different
//! accounts never block each other. Ids come from an atomic sequence starting
//! at 1. Nothing survives a restart.

use crate::core::traits::AccountStore;
use crate::types::{Account, AccountId, LedgerError};
use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::atomic::{AtomicI64, Ordering};

/// Thread-safe, process-local account store
#[derive(Debug)]
pub struct InMemoryAccountStore {
    accounts: DashMap<AccountId, Account>,
    /// Last id handed out
    sequence: AtomicI64,
}

impl InMemoryAccountStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            accounts: DashMap::new(),
            sequence: AtomicI64::new(0),
        }
    }
}

impl Default for InMemoryAccountStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AccountStore for InMemoryAccountStore {
    async fn create(&self, account: Account) -> Result<Account, LedgerError> {
        let id = self.sequence.fetch_add(1, Ordering::SeqCst) + 1;
        let account = Account { id, ..account };
        self.accounts.insert(id, account.clone());
        Ok(account)
    }

    async fn find_by_id(&self, id: AccountId) -> Result<Option<Account>, LedgerError> {
        Ok(self.accounts.get(&id).map(|entry| entry.value().clone()))
    }

    async fn save(&self, account: &Account) -> Result<Account, LedgerError> {
        let mut entry = self
            .accounts
            .get_mut(&account.id)
            .ok_or_else(|| LedgerError::account_not_found(account.id))?;
        *entry.value_mut() = account.clone();
        Ok(account.clone())
    }

    async fn list(&self) -> Result<Vec<Account>, LedgerError> {
        let mut accounts: Vec<Account> = self
            .accounts
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        accounts.sort_by_key(|account| account.id);
        Ok(accounts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn test_create_ignores_incoming_id() {
        let store = InMemoryAccountStore::new();

        let created = store.create(Account::new(42)).await.unwrap();

        assert_eq!(created.id, 1);
        assert_eq!(store.find_by_id(42).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_save_overwrites_previous_state() {
        let store = InMemoryAccountStore::new();
        let mut account = store.create(Account::new(0)).await.unwrap();

        account.balance = dec!(12.34);
        store.save(&account).await.unwrap();
        account.balance = dec!(5);
        store.save(&account).await.unwrap();

        assert_eq!(
            store.find_by_id(account.id).await.unwrap().unwrap().balance,
            dec!(5)
        );
    }

    #[tokio::test]
    async fn test_fetched_copy_is_detached_from_store() {
        let store = InMemoryAccountStore::new();
        let created = store.create(Account::new(0)).await.unwrap();

        let mut copy = store.find_by_id(created.id).await.unwrap().unwrap();
        copy.balance = dec!(99);

        assert_eq!(
            store.find_by_id(created.id).await.unwrap().unwrap().balance,
            dec!(0)
        );
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_creates_get_unique_ids() {
        let store = std::sync::Arc::new(InMemoryAccountStore::new());

        let handles: Vec<_> = (0..100)
            .map(|_| {
                let store = store.clone();
                tokio::spawn(async move { store.create(Account::new(0)).await.unwrap().id })
            })
            .collect();
        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap());
        }
        ids.sort_unstable();
        ids.dedup();

        assert_eq!(ids.len(), 100);
        assert_eq!(store.list().await.unwrap().len(), 100);
    }
}
