//! Account store backends
//!
//! - `memory` - `DashMap`-backed store, used when no database is configured
//! - `sqlite` - sqlx/SQLite store for durable deployments

pub mod memory;
pub mod sqlite;

pub use memory::InMemoryAccountStore;
pub use sqlite::SqliteAccountStore;

use crate::core::traits::AccountStore;
use crate::types::LedgerError;
use std::sync::Arc;

/// Build the store selected by the configuration
///
/// `None` selects the in-memory store; any URL opens a SQLite database.
pub async fn connect(database_url: Option<&str>) -> Result<Arc<dyn AccountStore>, LedgerError> {
    match database_url {
        Some(url) => {
            tracing::info!(database_url = url, "using sqlite account store");
            Ok(Arc::new(SqliteAccountStore::connect(url).await?))
        }
        None => {
            tracing::info!("using in-memory account store");
            Ok(Arc::new(InMemoryAccountStore::new()))
        }
    }
}
