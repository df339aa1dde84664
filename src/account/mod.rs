//! Accounts: the domain model, the shared store and the pages and endpoints
//! for creating accounts and moving money.

mod balance_endpoints;
mod core;
mod create_endpoint;
mod create_page;
mod details_page;
mod history;
mod store;

pub use self::core::Pin;
#[cfg(test)]
pub(crate) use self::core::{Age, Amount};
pub use balance_endpoints::{deposit_endpoint, withdraw_endpoint};
pub use create_endpoint::create_account_endpoint;
pub use create_page::create_account_page;
pub use details_page::account_details_page;
pub use store::{AccountStore, SharedAccountStore, lock_store};
