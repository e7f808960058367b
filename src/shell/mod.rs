//! Interactive text menu on top of [`crate::book`].
//!
//! All state for one run lives in [`Shell`]: the account book, the input it
//! reads answers from and the output it prints to.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use chrono::{Local, NaiveDateTime};
use rust_decimal::{Decimal, prelude::Zero};
use thiserror::Error;
use tracing::{debug, warn};

use crate::{
    book::{AccountBook, BookError, in_memory_book::InMemoryAccountBook, seed_demo_accounts},
    command::{
        CommandError, CreateAccountCommand, PostTransactionCommand, TransactionDetails,
        parse_kind, parse_number,
    },
    config::ShellConfig,
    transaction::{Transaction, TransactionKind},
};
use csv_printer::{DATE_FORMAT, StatementRow, print_statement};

pub mod csv_printer;

const MENU: &str = "
Welcome to Omega Cool Banking App. Please choose an option:
1. List all bank accounts
2. View bank account details and transactions
3. Add a transaction to an account
4. Remove a bank account
5. Create a new bank account
6. Export account statement as CSV
0. Exit";

/// Why a menu action stopped early.
#[derive(Debug, Error)]
enum ActionError {
    #[error(transparent)]
    Rejected(#[from] BookError),
    #[error(transparent)]
    Invalid(#[from] CommandError),
    #[error("Account removal cancelled.")]
    Cancelled,
    #[error("input closed")]
    EndOfInput,
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Output(#[from] anyhow::Error),
}

pub type Clock = Box<dyn Fn() -> NaiveDateTime>;

pub struct Shell<'w, R, W: 'w> {
    book: InMemoryAccountBook,
    input: R,
    output: &'w mut W,
    clock: Clock,
}

impl<'w, R, W> Shell<'w, R, W>
where
    R: BufRead,
    W: Write + 'w,
{
    pub fn new(input: R, output: &'w mut W, config: &ShellConfig) -> Result<Self> {
        Self::with_clock(input, output, config, Box::new(|| Local::now().naive_local()))
    }

    /// Same as [`Shell::new`], but transaction dates come from `clock`.
    pub fn with_clock(
        input: R,
        output: &'w mut W,
        config: &ShellConfig,
        clock: Clock,
    ) -> Result<Self> {
        let mut book = InMemoryAccountBook::default();
        if config.seed_demo_accounts {
            seed_demo_accounts(&mut book, clock()).context("Failed to seed demo accounts")?;
        }
        Ok(Self {
            book,
            input,
            output,
            clock,
        })
    }

    pub fn book(&self) -> &InMemoryAccountBook {
        &self.book
    }

    /// Runs the menu until the user exits or input ends.
    pub fn run(&mut self) -> Result<()> {
        loop {
            writeln!(self.output, "{MENU}")?;
            let choice = match self.prompt("Enter your choice: ") {
                Ok(choice) => choice,
                Err(ActionError::EndOfInput) => break,
                Err(err) => return Err(err).context("Failed to read menu choice"),
            };
            debug!(choice = choice.trim(), "menu choice");
            let outcome = match choice.trim().parse::<u8>() {
                Ok(0) => break,
                Ok(1) => self.list_accounts(),
                Ok(2) => self.view_account_details(),
                Ok(3) => self.add_transaction(),
                Ok(4) => self.remove_account(),
                Ok(5) => self.create_account(),
                Ok(6) => self.export_statement(),
                Ok(_) => {
                    writeln!(self.output, "Invalid option. Please try again.")?;
                    continue;
                }
                Err(_) => {
                    warn!(choice = choice.trim(), "non-numeric menu choice");
                    writeln!(self.output, "Invalid option. Please enter a number.")?;
                    continue;
                }
            };
            match outcome {
                Ok(()) => {}
                // the next menu prompt sees the closed input and exits
                Err(ActionError::EndOfInput) => {}
                Err(ActionError::Io(err)) => return Err(err).context("Shell I/O failed"),
                Err(ActionError::Output(err)) => return Err(err),
                Err(err) => {
                    warn!(%err, "action rejected");
                    writeln!(self.output, "{err}")?;
                }
            }
        }
        writeln!(self.output, "Goodbye!")?;
        Ok(())
    }

    fn prompt(&mut self, message: &str) -> Result<String, ActionError> {
        write!(self.output, "{message}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(ActionError::EndOfInput);
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    fn prompt_number(&mut self, message: &str, field: &'static str) -> Result<Decimal, ActionError> {
        let raw = self.prompt(message)?;
        Ok(parse_number(&raw, field)?)
    }

    fn require_account(&self, name: &str) -> Result<(), ActionError> {
        match self.book.find(name) {
            Some(_) => Ok(()),
            None => Err(BookError::AccountNotFound {
                name: name.to_string(),
            }
            .into()),
        }
    }

    fn list_accounts(&mut self) -> Result<(), ActionError> {
        if self.book.is_empty() {
            writeln!(self.output, "No accounts available.")?;
            return Ok(());
        }
        writeln!(self.output, "\nList of All Bank Accounts:")?;
        for acc in self.book.accounts() {
            writeln!(
                self.output,
                "Account Name: {}, Balance: {}",
                acc.name(),
                acc.balance()
            )?;
        }
        Ok(())
    }

    fn view_account_details(&mut self) -> Result<(), ActionError> {
        let name = self.prompt("Enter the name of the account to view details: ")?;
        let Some(acc) = self.book.find(&name) else {
            return Err(BookError::AccountNotFound { name }.into());
        };
        writeln!(self.output, "Account Name: {}", acc.name())?;
        writeln!(self.output, "Account Balance: {}", acc.balance())?;

        let transactions = acc.transactions();
        if transactions.is_empty() {
            writeln!(self.output, "No transactions available for this account.")?;
            return Ok(());
        }
        writeln!(self.output, "Transactions for this account:")?;
        for tx in &transactions {
            write_transaction(&mut *self.output, tx)?;
        }
        Ok(())
    }

    fn add_transaction(&mut self) -> Result<(), ActionError> {
        let name = self.prompt("Enter the name of the account: ")?;
        self.require_account(&name)?;

        let kind = parse_kind(&self.prompt("Type of transaction (Deposit/Withdrawal): ")?)?;
        let amount = self.prompt_number("Enter the amount: ", "amount")?;
        let amount = PostTransactionCommand::check_amount(amount)?;
        let description = self.prompt("Enter transaction description: ")?;
        let details = match kind {
            TransactionKind::Deposit => TransactionDetails::Deposit {
                source: self.prompt("Enter the source of the deposit: ")?,
            },
            TransactionKind::Withdrawal => {
                let method =
                    self.prompt("Enter the withdrawal method (e.g., ATM, check, online): ")?;
                let fee =
                    self.prompt_number("Enter the withdrawal fee (if any, or enter 0): ", "fee")?;
                TransactionDetails::Withdrawal { method, fee }
            }
        };

        let command = PostTransactionCommand::parse(amount, &description, details)?;
        let transaction = command.into_transaction((self.clock)());
        let balance = self.book.post_transaction(&name, transaction)?;
        writeln!(
            self.output,
            "Transaction added successfully. New Balance: {balance}"
        )?;
        Ok(())
    }

    fn remove_account(&mut self) -> Result<(), ActionError> {
        let name = self.prompt("Enter the name of the account to be removed: ")?;
        let Some(balance) = self.book.find(&name).map(|acc| acc.balance()) else {
            return Err(BookError::AccountNotFound { name }.into());
        };

        let mut confirmed = false;
        if balance > Decimal::zero() {
            writeln!(self.output, "This account still has a balance of {balance}.")?;
            let answer = self.prompt("Are you sure you want to remove this account? (yes/no): ")?;
            confirmed = answer.trim().eq_ignore_ascii_case("yes");
            if !confirmed {
                return Err(ActionError::Cancelled);
            }
        }

        self.book.remove_account(&name, confirmed)?;
        writeln!(self.output, "Account removed successfully.")?;
        Ok(())
    }

    fn create_account(&mut self) -> Result<(), ActionError> {
        let name = self.prompt("Enter the name for the new account: ")?;
        if self.book.find(&name).is_some() {
            return Err(BookError::DuplicateAccount { name }.into());
        }
        let initial_balance =
            self.prompt_number("Enter the initial balance for the new account: ", "balance")?;
        let command = CreateAccountCommand::parse(&name, initial_balance)?;
        let acc = self.book.create_account(command)?;
        writeln!(
            self.output,
            "New account created successfully: {}",
            acc.name()
        )?;
        Ok(())
    }

    fn export_statement(&mut self) -> Result<(), ActionError> {
        let name = self.prompt("Enter the name of the account to export: ")?;
        let Some(acc) = self.book.find(&name) else {
            return Err(BookError::AccountNotFound { name }.into());
        };
        let transactions = acc.transactions();
        print_statement(
            &mut *self.output,
            transactions.iter().map(StatementRow::from),
        )?;
        Ok(())
    }
}

fn write_transaction<W: Write>(output: &mut W, tx: &Transaction) -> std::io::Result<()> {
    writeln!(output, "    - Transaction Date: {}", tx.date().format(DATE_FORMAT))?;
    writeln!(output, "      Type: {}", tx.kind())?;
    writeln!(output, "      Amount: {}", tx.amount())?;
    writeln!(output, "      Description: {}", tx.description())?;
    match tx {
        Transaction::Deposit(d) => {
            writeln!(output, "      Source: {}", d.source())?;
        }
        Transaction::Withdrawal(w) => {
            writeln!(output, "      Method: {}", w.method())?;
            writeln!(output, "      Fee: {}", w.fee())?;
        }
    }
    writeln!(output)
}
