use chrono::NaiveDateTime;
use rust_decimal::{Decimal, prelude::Zero};
use thiserror::Error;

use crate::transaction::{
    Deposit, Transaction, TransactionKind, UnknownTransactionKind, Withdrawal,
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("Invalid input for {field}. Please enter a valid number.")]
    InvalidNumber { field: &'static str },
    #[error("Initial balance cannot be negative.")]
    NegativeInitialBalance,
    #[error("The amount must be greater than zero.")]
    NonPositiveAmount,
    #[error(transparent)]
    UnknownTransactionKind(#[from] UnknownTransactionKind),
}

/// Parses user supplied decimal, `field` names the value in the error message.
pub fn parse_number(raw: &str, field: &'static str) -> Result<Decimal, CommandError> {
    raw.trim()
        .parse::<Decimal>()
        .map_err(|_| CommandError::InvalidNumber { field })
}

pub fn parse_kind(raw: &str) -> Result<TransactionKind, CommandError> {
    Ok(raw.parse::<TransactionKind>()?)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateAccountCommand {
    pub name: String,
    pub initial_balance: Decimal,
}

impl CreateAccountCommand {
    pub fn parse(name: &str, initial_balance: Decimal) -> Result<Self, CommandError> {
        if initial_balance < Decimal::zero() {
            return Err(CommandError::NegativeInitialBalance);
        }
        Ok(Self {
            name: name.trim().to_string(),
            initial_balance,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionDetails {
    Deposit { source: String },
    Withdrawal { method: String, fee: Decimal },
}

impl TransactionDetails {
    pub fn kind(&self) -> TransactionKind {
        match self {
            TransactionDetails::Deposit { .. } => TransactionKind::Deposit,
            TransactionDetails::Withdrawal { .. } => TransactionKind::Withdrawal,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostTransactionCommand {
    pub amount: Decimal,
    pub description: String,
    pub details: TransactionDetails,
}

impl PostTransactionCommand {
    /// Amount has to be strictly positive. Fee is taken as is.
    pub fn check_amount(amount: Decimal) -> Result<Decimal, CommandError> {
        if amount > Decimal::zero() {
            Ok(amount)
        } else {
            Err(CommandError::NonPositiveAmount)
        }
    }

    pub fn parse(
        amount: Decimal,
        description: &str,
        details: TransactionDetails,
    ) -> Result<Self, CommandError> {
        Ok(Self {
            amount: Self::check_amount(amount)?,
            description: description.to_string(),
            details,
        })
    }

    pub fn kind(&self) -> TransactionKind {
        self.details.kind()
    }

    pub fn into_transaction(self, date: NaiveDateTime) -> Transaction {
        match self.details {
            TransactionDetails::Deposit { source } => {
                Deposit::new(self.amount, date, self.description, source).into()
            }
            TransactionDetails::Withdrawal { method, fee } => {
                Withdrawal::new(self.amount, date, self.description, method, fee).into()
            }
        }
    }
}
