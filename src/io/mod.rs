//! I/O module
//!
//! Handles CSV output of account balances.
//!
//! # Components
//!
//! - `csv_format` - Account output serialization

pub mod csv_format;

pub use csv_format::write_accounts_csv;
