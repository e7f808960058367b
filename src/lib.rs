/// Ledger entries: deposits and withdrawals.
pub mod transaction;

/// A named account with its balance and ledger.
/// The balance only changes through posted transactions
/// (or the explicit [`account::Account::change_balance`] escape hatch).
pub mod account;

/// Validation of user input before it reaches the model.
pub mod command;

/// Account collection interface, plus "in memory" implementation.
pub mod book;

/// Settings for one shell run.
pub mod config;

/// Tracing subscriber setup for the binary.
pub mod logging;

/// Interactive menu driving the [`book`].
pub mod shell;
