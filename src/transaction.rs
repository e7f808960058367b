use std::{fmt, str::FromStr};

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    Deposit,
    Withdrawal,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Deposit => "DEPOSIT",
            TransactionKind::Withdrawal => "WITHDRAWAL",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown transaction type `{0}`")]
pub struct UnknownTransactionKind(pub String);

impl FromStr for TransactionKind {
    type Err = UnknownTransactionKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("deposit") {
            Ok(TransactionKind::Deposit)
        } else if s.eq_ignore_ascii_case("withdrawal") {
            Ok(TransactionKind::Withdrawal)
        } else {
            Err(UnknownTransactionKind(s.to_string()))
        }
    }
}

/// Money coming into an account.
#[derive(Debug, Clone, PartialEq)]
pub struct Deposit {
    amount: Decimal,
    date: NaiveDateTime,
    description: String,
    source: String,
}

impl Deposit {
    pub fn new(
        amount: Decimal,
        date: NaiveDateTime,
        description: impl Into<String>,
        source: impl Into<String>,
    ) -> Self {
        Self {
            amount,
            date,
            description: description.into(),
            source: source.into(),
        }
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn source(&self) -> &str {
        &self.source
    }
}

/// Money leaving an account. The fee is charged on top of the amount.
#[derive(Debug, Clone, PartialEq)]
pub struct Withdrawal {
    amount: Decimal,
    date: NaiveDateTime,
    description: String,
    method: String,
    fee: Decimal,
}

impl Withdrawal {
    pub fn new(
        amount: Decimal,
        date: NaiveDateTime,
        description: impl Into<String>,
        method: impl Into<String>,
        fee: Decimal,
    ) -> Self {
        Self {
            amount,
            date,
            description: description.into(),
            method: method.into(),
            fee,
        }
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn fee(&self) -> Decimal {
        self.fee
    }
}

/// One immutable ledger entry.
///
/// Values are stored exactly as given; checking that amounts are positive
/// is left to [`crate::command`].
#[derive(Debug, Clone, PartialEq)]
pub enum Transaction {
    Deposit(Deposit),
    Withdrawal(Withdrawal),
}

impl Transaction {
    pub fn kind(&self) -> TransactionKind {
        match self {
            Transaction::Deposit(_) => TransactionKind::Deposit,
            Transaction::Withdrawal(_) => TransactionKind::Withdrawal,
        }
    }

    pub fn amount(&self) -> Decimal {
        match self {
            Transaction::Deposit(d) => d.amount,
            Transaction::Withdrawal(w) => w.amount,
        }
    }

    pub fn date(&self) -> NaiveDateTime {
        match self {
            Transaction::Deposit(d) => d.date,
            Transaction::Withdrawal(w) => w.date,
        }
    }

    pub fn description(&self) -> &str {
        match self {
            Transaction::Deposit(d) => &d.description,
            Transaction::Withdrawal(w) => &w.description,
        }
    }
}

impl From<Deposit> for Transaction {
    fn from(value: Deposit) -> Self {
        Transaction::Deposit(value)
    }
}

impl From<Withdrawal> for Transaction {
    fn from(value: Withdrawal) -> Self {
        Transaction::Withdrawal(value)
    }
}
