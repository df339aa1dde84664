//! The account domain model: PINs, profile fields, balances and transactions.

use std::{fmt::Display, str::FromStr};

use serde::Deserialize;
use time::{OffsetDateTime, format_description::BorrowedFormatItem, macros::format_description};

use crate::Error;

/// The number of digits in a PIN.
pub const PIN_LENGTH: usize = 4;

/// A 4-digit PIN that identifies an account and doubles as its credential.
///
/// PINs are stored and compared in plain text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pin(String);

impl Pin {
    /// Create a PIN from `raw`.
    ///
    /// # Errors
    /// Returns [Error::InvalidPin] if `raw` is not exactly four ASCII digits.
    pub fn new(raw: &str) -> Result<Self, Error> {
        if raw.len() == PIN_LENGTH && raw.bytes().all(|byte| byte.is_ascii_digit()) {
            Ok(Self(raw.to_owned()))
        } else {
            Err(Error::InvalidPin)
        }
    }

    /// The PIN digits.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Pin {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Pin::new(s)
    }
}

impl Display for Pin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// The account holder's age in years, between [Age::MIN] and [Age::MAX] inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "u8")]
pub struct Age(u8);

impl Age {
    /// The youngest allowed age.
    pub const MIN: u8 = 1;
    /// The oldest allowed age.
    pub const MAX: u8 = 100;

    /// # Errors
    /// Returns [Error::InvalidAge] if `years` is outside of `Age::MIN..=Age::MAX`.
    pub fn new(years: u8) -> Result<Self, Error> {
        if (Self::MIN..=Self::MAX).contains(&years) {
            Ok(Self(years))
        } else {
            Err(Error::InvalidAge(years))
        }
    }

    pub fn years(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Age {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Age::new(value)
    }
}

/// The account holder's salary. Only ever displayed.
pub type Salary = u64;

/// A deposit or withdrawal amount, always at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "u64")]
pub struct Amount(u64);

impl Amount {
    /// # Errors
    /// Returns [Error::InvalidAmount] if `value` is zero.
    pub fn new(value: u64) -> Result<Self, Error> {
        if value == 0 {
            Err(Error::InvalidAmount)
        } else {
            Ok(Self(value))
        }
    }

    pub fn get(&self) -> u64 {
        self.0
    }
}

impl TryFrom<u64> for Amount {
    type Error = Error;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Amount::new(value)
    }
}

/// Whether a transaction added money to or removed money from an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    Deposit,
    Withdraw,
}

impl TransactionKind {
    /// The title-cased label shown in the transaction history.
    pub fn label(&self) -> &'static str {
        match self {
            TransactionKind::Deposit => "Deposit",
            TransactionKind::Withdraw => "Withdraw",
        }
    }
}

/// Date time format for transaction timestamps, e.g. "2025-01-31 13:05:09".
pub const TRANSACTION_DATE_FORMAT: &[BorrowedFormatItem] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");

/// A record of one balance-changing event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    /// Deposit or withdrawal.
    pub kind: TransactionKind,
    /// How much money moved.
    pub amount: Amount,
    /// When the transaction happened, truncated to the second.
    pub date: OffsetDateTime,
    /// The account balance immediately after the transaction.
    pub balance: u64,
}

impl Transaction {
    /// The timestamp formatted with [TRANSACTION_DATE_FORMAT].
    pub fn formatted_date(&self) -> String {
        self.date
            .format(TRANSACTION_DATE_FORMAT)
            .unwrap_or_else(|error| {
                tracing::error!("could not format transaction date {:?}: {error}", self.date);
                self.date.to_string()
            })
    }
}

/// A bank account: the holder's profile, balance and transaction log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pin: Pin,
    name: String,
    age: Age,
    salary: Salary,
    balance: u64,
    transactions: Vec<Transaction>,
}

impl Account {
    /// Create an account with a zero balance and no transactions.
    pub(crate) fn new(pin: Pin, name: String, age: Age, salary: Salary) -> Self {
        Self {
            pin,
            name,
            age,
            salary,
            balance: 0,
            transactions: Vec::new(),
        }
    }

    pub fn pin(&self) -> &Pin {
        &self.pin
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> Age {
        self.age
    }

    pub fn salary(&self) -> Salary {
        self.salary
    }

    pub fn balance(&self) -> u64 {
        self.balance
    }

    /// The transactions in the order they happened, oldest first.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// The transactions from most recent to oldest.
    ///
    /// The iterator borrows the account, so it can be cloned to walk the
    /// history again.
    pub fn history(&self) -> impl ExactSizeIterator<Item = &Transaction> + Clone + '_ {
        self.transactions.iter().rev()
    }

    /// Add `amount` to the balance and record the deposit at `date`.
    ///
    /// Returns the new balance.
    ///
    /// # Errors
    /// Returns [Error::BalanceOverflow] if the new balance does not fit in a
    /// `u64`. The account is not modified in that case.
    pub fn deposit(&mut self, amount: Amount, date: OffsetDateTime) -> Result<u64, Error> {
        let balance = self
            .balance
            .checked_add(amount.get())
            .ok_or(Error::BalanceOverflow)?;

        self.record(TransactionKind::Deposit, amount, date, balance);

        Ok(balance)
    }

    /// Remove `amount` from the balance and record the withdrawal at `date`.
    ///
    /// Returns the new balance.
    ///
    /// # Errors
    /// Returns [Error::InsufficientBalance] if `amount` is larger than the
    /// current balance. The account is not modified in that case.
    pub fn withdraw(&mut self, amount: Amount, date: OffsetDateTime) -> Result<u64, Error> {
        let balance = self
            .balance
            .checked_sub(amount.get())
            .ok_or(Error::InsufficientBalance)?;

        self.record(TransactionKind::Withdraw, amount, date, balance);

        Ok(balance)
    }

    fn record(&mut self, kind: TransactionKind, amount: Amount, date: OffsetDateTime, balance: u64) {
        self.balance = balance;
        self.transactions.push(Transaction {
            kind,
            amount,
            date: date.replace_nanosecond(0).unwrap_or(date),
            balance,
        });
    }
}


#[cfg(test)]
mod age_tests {
    use crate::Error;

    use super::Age;

    #[test]
    fn accepts_bounds() {
        assert_eq!(Age::new(Age::MIN).map(|age| age.years()), Ok(1));
        assert_eq!(Age::new(Age::MAX).map(|age| age.years()), Ok(100));
    }

    #[test]
    fn rejects_out_of_range() {
        assert_eq!(Age::new(0), Err(Error::InvalidAge(0)));
        assert_eq!(Age::new(101), Err(Error::InvalidAge(101)));
    }
}
