//! Account Ledger Library
//! # Overview
//!
//! This library provides a minimal account ledger: accounts with a single
//! non-negative decimal balance, credited and debited over HTTP and persisted
//! in a pluggable store.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Account, LedgerError)
//! - [`core`] - Business logic components:
//!   - [`core::traits`] - The `AccountStore` persistence abstraction
//!   - [`core::service`] - Fetch → mutate → persist orchestration
//! - [`store`] - In-memory and SQLite store backends
//! - [`http`] - axum routes mapping HTTP requests onto the service
//! - [`io`] - CSV export of account balances
//! - [`cli`] - CLI arguments parsing
//! - [`observability`] - Tracing setup
//!
//! # Operations
//!
//! - **Create**: Open an account with a zero balance
//! - **Credit**: Add funds to an account
//! - **Debit**: Remove funds from an account (requires sufficient balance)
//! - **Get**: Read the current balance

// Module declarations
pub mod cli;
pub mod core;
pub mod http;
pub mod io;
pub mod observability;
pub mod store;
pub mod types;

pub use core::{AccountService, AccountStore, AccountView};
pub use io::write_accounts_csv;
pub use store::{InMemoryAccountStore, SqliteAccountStore};
pub use types::{Account, AccountId, LedgerError};
