//! Error types for the account ledger
//!
//! This module defines every error that can surface from account operations,
//! persistence, and export.
//!
//! # Error Categories
//!
//! - **Invalid input**: Unknown account, insufficient funds, negative amount
//! - **Arithmetic Errors**: Overflow, underflow in balance calculations
//! - **Storage Errors**: Database or I/O failures in a store backend or export

use super::account::AccountId;
use rust_decimal::Decimal;
use thiserror::Error;

/// Main error type for the account ledger
///
/// Each variant carries enough context to produce a readable message for the
/// HTTP error body and the logs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LedgerError {
    /// Lookup by an id the store never assigned
    #[error("Account {id} not found")]
    AccountNotFound {
        /// The id that was requested
        id: AccountId,
    },

    /// Debit larger than the current balance
    ///
    /// The account is left unchanged and nothing is persisted.
    #[error("Insufficient funds for account {id}: balance {balance}, requested {requested}")]
    InsufficientFunds {
        /// Account id
        id: AccountId,
        /// Balance at the time of the debit
        balance: Decimal,
        /// Requested debit amount
        requested: Decimal,
    },

    /// Negative credit or debit amount
    #[error("Invalid amount '{amount}': must be non-negative")]
    InvalidAmount {
        /// The rejected amount
        amount: Decimal,
    },

    /// Arithmetic overflow would occur
    #[error("Arithmetic overflow in {operation} for account {id}")]
    ArithmeticOverflow {
        /// Operation that would overflow
        operation: String,
        /// Account id
        id: AccountId,
    },

    /// Arithmetic underflow would occur
    #[error("Arithmetic underflow in {operation} for account {id}")]
    ArithmeticUnderflow {
        /// Operation that would underflow
        operation: String,
        /// Account id
        id: AccountId,
    },

    /// Persistence backend failure
    #[error("Storage error: {message}")]
    Storage {
        /// Description of the backend failure
        message: String,
    },

    /// I/O error while writing output
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
    },
}

impl From<std::io::Error> for LedgerError {
    fn from(error: std::io::Error) -> Self {
        LedgerError::Io {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for LedgerError {
    fn from(error: csv::Error) -> Self {
        LedgerError::Io {
            message: error.to_string(),
        }
    }
}

impl From<sqlx::Error> for LedgerError {
    fn from(error: sqlx::Error) -> Self {
        LedgerError::Storage {
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl LedgerError {
    /// Create an AccountNotFound error
    pub fn account_not_found(id: AccountId) -> Self {
        LedgerError::AccountNotFound { id }
    }

    /// Create an InsufficientFunds error
    pub fn insufficient_funds(id: AccountId, balance: Decimal, requested: Decimal) -> Self {
        LedgerError::InsufficientFunds {
            id,
            balance,
            requested,
        }
    }

    /// Create an InvalidAmount error
    pub fn invalid_amount(amount: Decimal) -> Self {
        LedgerError::InvalidAmount { amount }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(operation: &str, id: AccountId) -> Self {
        LedgerError::ArithmeticOverflow {
            operation: operation.to_string(),
            id,
        }
    }

    /// Create an ArithmeticUnderflow error
    pub fn arithmetic_underflow(operation: &str, id: AccountId) -> Self {
        LedgerError::ArithmeticUnderflow {
            operation: operation.to_string(),
            id,
        }
    }

    /// Create a Storage error
    pub fn storage(message: impl Into<String>) -> Self {
        LedgerError::Storage {
            message: message.into(),
        }
    }

    /// Whether this error belongs to the "invalid input" family
    ///
    /// These are rejections of the caller's request, as opposed to failures of
    /// the service itself.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            LedgerError::AccountNotFound { .. }
                | LedgerError::InsufficientFunds { .. }
                | LedgerError::InvalidAmount { .. }
        )
    }
}
