use chrono::NaiveDateTime;
use rust_decimal::{Decimal, prelude::Zero};
use thiserror::Error;

use crate::{
    account::Account,
    command::{CommandError, CreateAccountCommand},
    transaction::{Deposit, Transaction},
};

pub mod in_memory_book;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BookError {
    #[error(transparent)]
    CommandErr(#[from] CommandError),
    #[error("Account not found.")]
    AccountNotFound { name: String },
    #[error("An account with this name already exists.")]
    DuplicateAccount { name: String },
    #[error("The resulting balance of `{name}` is out of range.")]
    BalanceOutOfRange { name: String },
    #[error("Account `{name}` still has a balance of {balance}, removal must be confirmed")]
    RemovalNotConfirmed { name: String, balance: Decimal },
}

/// Collection of accounts keyed by case-insensitive name.
pub trait AccountBook {
    fn create_account(&mut self, command: CreateAccountCommand) -> Result<&Account, BookError>;

    fn find(&self, name: &str) -> Option<&Account>;

    /// Posts the transaction to the named account and returns its new balance.
    /// Transactions pushing the balance out of [`Decimal`] range are rejected.
    fn post_transaction(
        &mut self,
        name: &str,
        transaction: Transaction,
    ) -> Result<Decimal, BookError>;

    /// Accounts holding money are only removed when `confirmed` is set.
    fn remove_account(&mut self, name: &str, confirmed: bool) -> Result<Account, BookError>;

    fn accounts(&self) -> impl Iterator<Item = &Account>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Opening balances of the demonstration accounts.
pub const DEMO_ACCOUNTS: [(&str, i64, &str); 2] = [
    ("Alice", 100000, "Bank Transfer"),
    ("Bob", 150000, "Salary Payment"),
];

/// Creates the demonstration accounts.
///
/// Each account starts empty and receives its opening balance as an
/// "Initial deposit", so the balance equals the sum of its ledger.
pub fn seed_demo_accounts<B>(book: &mut B, date: NaiveDateTime) -> Result<(), BookError>
where
    B: AccountBook,
{
    for (name, cents, source) in DEMO_ACCOUNTS {
        book.create_account(CreateAccountCommand::parse(name, Decimal::zero())?)?;
        let opening = Deposit::new(Decimal::new(cents, 2), date, "Initial deposit", source);
        book.post_transaction(name, opening.into())?;
    }
    Ok(())
}
