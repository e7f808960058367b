use rust_decimal::{Decimal, prelude::Zero};
use tracing::{debug, info};

use crate::{account::Account, command::CreateAccountCommand, transaction::Transaction};

use super::{AccountBook, BookError};

/// Keeps accounts in a `Vec`, so listing follows creation order.
#[derive(Debug, Default)]
pub struct InMemoryAccountBook {
    accounts: Vec<Account>,
}

impl InMemoryAccountBook {
    fn position(&self, name: &str) -> Option<usize> {
        let name = name.trim();
        let folded = name.to_lowercase();
        let pos = self
            .accounts
            .iter()
            .position(|acc| acc.name().to_lowercase() == folded);
        debug!(account = name, found = pos.is_some(), "account lookup");
        pos
    }
}

impl AccountBook for InMemoryAccountBook {
    fn create_account(&mut self, command: CreateAccountCommand) -> Result<&Account, BookError> {
        if self.position(&command.name).is_some() {
            return Err(BookError::DuplicateAccount { name: command.name });
        }
        info!(name = %command.name, balance = %command.initial_balance, "account created");
        self.accounts
            .push(Account::new(command.name, command.initial_balance));
        Ok(&self.accounts[self.accounts.len() - 1])
    }

    fn find(&self, name: &str) -> Option<&Account> {
        self.position(name).map(|pos| &self.accounts[pos])
    }

    fn post_transaction(
        &mut self,
        name: &str,
        transaction: Transaction,
    ) -> Result<Decimal, BookError> {
        let pos = self
            .position(name)
            .ok_or_else(|| BookError::AccountNotFound {
                name: name.to_string(),
            })?;
        let acc = &mut self.accounts[pos];
        if acc.checked_balance_after(&transaction).is_none() {
            return Err(BookError::BalanceOutOfRange {
                name: acc.name().to_string(),
            });
        }
        info!(
            name = acc.name(),
            kind = %transaction.kind(),
            amount = %transaction.amount(),
            "transaction posted"
        );
        acc.add_transaction(transaction);
        Ok(acc.balance())
    }

    fn remove_account(&mut self, name: &str, confirmed: bool) -> Result<Account, BookError> {
        let pos = self
            .position(name)
            .ok_or_else(|| BookError::AccountNotFound {
                name: name.to_string(),
            })?;
        let acc = &self.accounts[pos];
        if acc.balance() > Decimal::zero() && !confirmed {
            return Err(BookError::RemovalNotConfirmed {
                name: acc.name().to_string(),
                balance: acc.balance(),
            });
        }
        let removed = self.accounts.remove(pos);
        info!(name = removed.name(), balance = %removed.balance(), "account removed");
        Ok(removed)
    }

    fn accounts(&self) -> impl Iterator<Item = &Account> {
        self.accounts.iter()
    }

    fn len(&self) -> usize {
        self.accounts.len()
    }
}
