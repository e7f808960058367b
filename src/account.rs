use rust_decimal::Decimal;

use crate::transaction::Transaction;

#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    name: String,
    balance: Decimal,
    transactions: Vec<Transaction>,
}

impl Account {
    pub fn new(name: impl Into<String>, initial_balance: Decimal) -> Self {
        Self {
            name: name.into(),
            balance: initial_balance,
            transactions: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// Snapshot of the ledger, in posting order.
    pub fn transactions(&self) -> Vec<Transaction> {
        self.transactions.clone()
    }

    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }

    /// Appends the transaction to the ledger and updates the balance.
    ///
    /// There is no overdraft check, so the balance may become negative.
    pub fn add_transaction(&mut self, transaction: Transaction) {
        // no wildcard arm: a new variant has to state its balance effect here
        match &transaction {
            Transaction::Deposit(deposit) => {
                self.balance += deposit.amount();
            }
            Transaction::Withdrawal(withdrawal) => {
                self.balance -= withdrawal.amount() + withdrawal.fee();
            }
        }
        self.transactions.push(transaction);
    }

    /// Balance the account would have after `transaction`, or `None` when it
    /// does not fit in a [`Decimal`].
    pub fn checked_balance_after(&self, transaction: &Transaction) -> Option<Decimal> {
        match transaction {
            Transaction::Deposit(deposit) => self.balance.checked_add(deposit.amount()),
            Transaction::Withdrawal(withdrawal) => withdrawal
                .amount()
                .checked_add(withdrawal.fee())
                .and_then(|total| self.balance.checked_sub(total)),
        }
    }

    /// Adjusts the balance without recording a ledger entry, after which the
    /// balance no longer equals the sum of the ledger.
    pub fn change_balance(&mut self, amount: Decimal) {
        self.balance += amount;
    }
}
