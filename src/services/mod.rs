// Service exports
pub mod accounts;

pub use accounts::{AccountError, AccountStore, DEFAULT_ROLE};
