// Core business logic module
// Contains the store abstraction and the service that drives account operations

pub mod service;
pub mod traits;

pub use service::{AccountService, AccountView};
pub use traits::AccountStore;
