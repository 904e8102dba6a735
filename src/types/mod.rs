//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `account`: The account entity and its balance rules
//! - `error`: Error types for the account ledger

pub mod account;
pub mod error;

pub use account::{Account, AccountId};
pub use error::LedgerError;
