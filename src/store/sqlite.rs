//! SQLite account store
//!
//! Balances are stored as TEXT so no precision is lost in the round trip
//! through the database. The schema is created on connect.

use crate::core::traits::AccountStore;
use crate::types::{Account, AccountId, LedgerError};
use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS accounts (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    balance TEXT NOT NULL
)";

/// Row type for the `accounts` table
#[derive(Debug, Clone, sqlx::FromRow)]
struct AccountRow {
    id: i64,
    balance: String,
}

impl TryFrom<AccountRow> for Account {
    type Error = LedgerError;

    fn try_from(row: AccountRow) -> Result<Self, Self::Error> {
        let balance = Decimal::from_str(&row.balance).map_err(|e| {
            LedgerError::storage(format!(
                "invalid balance '{}' for account {}: {}",
                row.balance, row.id, e
            ))
        })?;
        Ok(Account {
            id: row.id,
            balance,
        })
    }
}

/// Account store backed by a SQLite database
#[derive(Debug, Clone)]
pub struct SqliteAccountStore {
    pool: SqlitePool,
}

impl SqliteAccountStore {
    /// Open (creating if missing) the database at `database_url` and ensure the schema
    ///
    /// # Arguments
    ///
    /// * `database_url` - A sqlx SQLite URL, e.g. `sqlite://ledger.db` or `sqlite::memory:`
    pub async fn connect(database_url: &str) -> Result<Self, LedgerError> {
        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        let pool = pool_options(database_url).connect_with(options).await?;

        Self::from_pool(pool).await
    }

    /// Wrap an existing pool, creating the schema if needed
    pub async fn from_pool(pool: SqlitePool) -> Result<Self, LedgerError> {
        sqlx::query(SCHEMA).execute(&pool).await?;
        tracing::debug!("sqlite schema ready");
        Ok(Self { pool })
    }
}

/// An in-memory database lives and dies with its connection, so in-memory
/// pools hold exactly one connection that is never reaped or recycled.
fn pool_options(database_url: &str) -> SqlitePoolOptions {
    if database_url.contains(":memory:") || database_url.contains("mode=memory") {
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        SqlitePoolOptions::new().max_connections(5)
    }
}

#[async_trait]
impl AccountStore for SqliteAccountStore {
    async fn create(&self, account: Account) -> Result<Account, LedgerError> {
        let result = sqlx::query("INSERT INTO accounts (balance) VALUES (?)")
            .bind(account.balance.to_string())
            .execute(&self.pool)
            .await?;

        Ok(Account {
            id: result.last_insert_rowid(),
            ..account
        })
    }

    async fn find_by_id(&self, id: AccountId) -> Result<Option<Account>, LedgerError> {
        sqlx::query_as::<_, AccountRow>("SELECT id, balance FROM accounts WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .map(Account::try_from)
            .transpose()
    }

    async fn save(&self, account: &Account) -> Result<Account, LedgerError> {
        let result = sqlx::query("UPDATE accounts SET balance = ? WHERE id = ?")
            .bind(account.balance.to_string())
            .bind(account.id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(LedgerError::account_not_found(account.id));
        }
        Ok(account.clone())
    }

    async fn list(&self) -> Result<Vec<Account>, LedgerError> {
        sqlx::query_as::<_, AccountRow>("SELECT id, balance FROM accounts ORDER BY id")
            .fetch_all(&self.pool)
            .await?
            .into_iter()
            .map(Account::try_from)
            .collect()
    }
}
