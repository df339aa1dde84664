//! The in-memory store that owns every account in the process.

use std::{
    collections::HashMap,
    sync::{Arc, Mutex, MutexGuard},
};

use crate::{
    Error,
    account::core::{Account, Age, Pin, Salary},
};

/// The account store shared between all sessions of the server.
pub type SharedAccountStore = Arc<Mutex<AccountStore>>;

/// Maps PINs to accounts. The store is the only place that enforces PIN
/// uniqueness.
#[derive(Debug, Default)]
pub struct AccountStore {
    accounts: HashMap<Pin, Account>,
}

impl AccountStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new account with a zero balance.
    ///
    /// The checks run in order and the first one to fail decides the error.
    ///
    /// # Errors
    /// - [Error::InvalidPin] if `pin` is not exactly four digits.
    /// - [Error::EmptyName] if `name` is blank after trimming whitespace.
    /// - [Error::DuplicatePin] if an account already uses `pin`.
    pub fn create(
        &mut self,
        name: &str,
        age: Age,
        salary: Salary,
        pin: &str,
    ) -> Result<&Account, Error> {
        let pin = Pin::new(pin)?;

        if name.trim().is_empty() {
            return Err(Error::EmptyName);
        }

        if self.accounts.contains_key(&pin) {
            return Err(Error::DuplicatePin);
        }

        let account = Account::new(pin.clone(), name.to_owned(), age, salary);

        Ok(self.accounts.entry(pin).or_insert(account))
    }

    /// Get the account for `pin`, if there is one.
    pub fn find(&self, pin: &Pin) -> Option<&Account> {
        self.accounts.get(pin)
    }

    /// Get the account for `pin` for a deposit or withdrawal.
    pub fn find_mut(&mut self, pin: &Pin) -> Option<&mut Account> {
        self.accounts.get_mut(pin)
    }

    /// Check a name and PIN pair entered at log-in.
    ///
    /// The name must match the account's name exactly, including case and
    /// surrounding whitespace.
    ///
    /// # Errors
    /// Returns [Error::InvalidCredentials] if `pin` is malformed, no account
    /// uses it, or the account's name is not `name`.
    pub fn verify_credentials(&self, name: &str, pin: &str) -> Result<&Account, Error> {
        let pin = Pin::new(pin).map_err(|_| Error::InvalidCredentials)?;

        self.find(&pin)
            .filter(|account| account.name() == name)
            .ok_or(Error::InvalidCredentials)
    }

    /// The number of accounts in the store.
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

/// Lock the shared store, logging and converting a poisoned lock into
/// [Error::StoreLockError].
pub fn lock_store(store: &SharedAccountStore) -> Result<MutexGuard<'_, AccountStore>, Error> {
    store.lock().map_err(|error| {
        tracing::error!("could not acquire the account store lock: {error}");
        Error::StoreLockError
    })
}
