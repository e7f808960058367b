use chrono::{NaiveDate, NaiveDateTime};
use omega_bank::{book::AccountBook, config::ShellConfig, shell::Shell};
use rust_decimal::Decimal;

fn fixed_date() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 15)
        .unwrap()
        .and_hms_opt(10, 30, 0)
        .unwrap()
}

/// Runs a scripted session, returns printed output plus name and balance of
/// every account left at the end.
fn run_session(input: &str, seed: bool) -> (String, Vec<(String, Decimal)>) {
    let mut output = Vec::new();
    let config = ShellConfig {
        seed_demo_accounts: seed,
    };
    let mut shell =
        Shell::with_clock(input.as_bytes(), &mut output, &config, Box::new(fixed_date)).unwrap();
    shell.run().unwrap();
    let accounts = shell
        .book()
        .accounts()
        .map(|acc| (acc.name().to_string(), acc.balance()))
        .collect();
    drop(shell);
    (String::from_utf8(output).unwrap(), accounts)
}

#[test]
fn seeded_accounts_are_listed() {
    let (output, accounts) = run_session("1\n0\n", true);
    assert!(output.contains("List of All Bank Accounts:"));
    assert!(output.contains("Account Name: Alice, Balance: 1000.00"));
    assert!(output.contains("Account Name: Bob, Balance: 1500.00"));
    assert!(output.ends_with("Goodbye!\n"));
    assert_eq!(accounts.len(), 2);
}

#[test]
fn empty_book_is_reported() {
    let (output, accounts) = run_session("1\n0\n", false);
    assert!(output.contains("No accounts available."));
    assert!(accounts.is_empty());
}

#[test]
fn seeded_account_details() {
    let (output, _) = run_session("2\nalice\n0\n", true);
    assert!(output.contains("Account Name: Alice\n"));
    assert!(output.contains("Account Balance: 1000.00\n"));
    assert!(output.contains("Transactions for this account:"));
    assert!(output.contains("    - Transaction Date: 2024-01-15 10:30:00\n"));
    assert!(output.contains("      Type: DEPOSIT\n"));
    assert!(output.contains("      Amount: 1000.00\n"));
    assert!(output.contains("      Description: Initial deposit\n"));
    assert!(output.contains("      Source: Bank Transfer\n"));
}

#[test]
fn carol_deposits_withdraws_and_is_removed() {
    let script = [
        // create Carol with nothing
        "5", "Carol", "0",
        "2", "Carol",
        // paycheck
        "3", "Carol", "Deposit", "200", "paycheck", "Employer",
        // cash from the ATM, 2 fee
        "3", "carol", "withdrawal", "50", "ATM", "ATM", "2",
        // decline removal
        "4", "Carol", "no",
        "1",
        // confirm removal
        "4", "CAROL", "YES",
        "0",
    ]
    .join("\n");
    let (output, accounts) = run_session(&script, true);

    assert!(output.contains("New account created successfully: Carol"));
    assert!(output.contains("No transactions available for this account."));
    assert!(output.contains("Transaction added successfully. New Balance: 200"));
    assert!(output.contains("Transaction added successfully. New Balance: 148"));
    assert!(output.contains("This account still has a balance of 148."));
    assert!(output.contains("Account removal cancelled."));
    assert!(output.contains("Account Name: Carol, Balance: 148"));
    assert!(output.contains("Account removed successfully."));

    let names: Vec<_> = accounts.iter().map(|(name, _)| name.as_str()).collect();
    assert_eq!(names, ["Alice", "Bob"]);
}

#[test]
fn carol_ledger_after_posting() {
    let script = [
        "5", "Carol", "0",
        "3", "Carol", "Deposit", "200", "paycheck", "Employer",
        "3", "Carol", "Withdrawal", "50", "ATM", "ATM", "2",
        "6", "Carol",
        "0",
    ]
    .join("\n");
    let (output, accounts) = run_session(&script, false);

    assert_eq!(accounts, vec![("Carol".to_string(), Decimal::from(148))]);
    let statement: Vec<_> = output
        .lines()
        .skip_while(|line| !line.ends_with("date,type,amount,description,source,method,fee"))
        .skip(1)
        .take(2)
        .collect();
    assert_eq!(
        statement,
        [
            "2024-01-15 10:30:00,DEPOSIT,200,paycheck,Employer,,",
            "2024-01-15 10:30:00,WITHDRAWAL,50,ATM,,ATM,2",
        ]
    );
}

#[test]
fn withdrawal_can_overdraw() {
    let script = ["3", "Bob", "Withdrawal", "1600", "rent", "online", "0.50", "0"].join("\n");
    let (output, accounts) = run_session(&script, true);
    assert!(output.contains("New Balance: -100.50"));
    // nothing to protect, so no confirmation is asked
    let (output, _) = run_session(
        &[
            "3", "Bob", "Withdrawal", "1600", "rent", "online", "0", "4", "bob", "0",
        ]
        .join("\n"),
        true,
    );
    assert!(!output.contains("Are you sure"));
    assert!(output.contains("Account removed successfully."));
    assert_eq!(accounts[1].1, Decimal::new(-10050, 2));
}

#[test]
fn case_insensitive_names() {
    let script = ["5", "Dave", "10", "5", "dave", "5", "DAVE", "2", "DAVE", "0"].join("\n");
    let (output, accounts) = run_session(&script, false);
    assert_eq!(
        output
            .matches("An account with this name already exists.")
            .count(),
        2
    );
    assert!(output.contains("Account Name: Dave\n"));
    assert_eq!(accounts, vec![("Dave".to_string(), Decimal::from(10))]);
}

#[test]
fn rejected_input_leaves_state_untouched() {
    let script = [
        "3", "Alice", "Deposit", "abc",
        "3", "Alice", "Loan",
        "3", "Alice", "Deposit", "-5",
        "3", "Alice", "Deposit", "0",
        "3", "Alice", "Withdrawal", "10", "cash", "ATM", "free",
        "3", "Nobody",
        "2", "Nobody",
        "5", "Eve", "-1",
        "5", "Eve", "lots",
        "9",
        "x",
        "0",
    ]
    .join("\n");
    let (output, accounts) = run_session(&script, true);

    assert!(output.contains("Invalid input for amount. Please enter a valid number."));
    assert!(output.contains("Unknown transaction type `Loan`"));
    assert_eq!(
        output.matches("The amount must be greater than zero.").count(),
        2
    );
    assert!(output.contains("Invalid input for fee. Please enter a valid number."));
    assert_eq!(output.matches("Account not found.").count(), 2);
    assert!(output.contains("Initial balance cannot be negative."));
    assert!(output.contains("Invalid input for balance. Please enter a valid number."));
    assert!(output.contains("Invalid option. Please try again."));
    assert!(output.contains("Invalid option. Please enter a number."));
    assert!(!output.contains("Transaction added successfully"));

    assert_eq!(
        accounts,
        vec![
            ("Alice".to_string(), Decimal::new(100000, 2)),
            ("Bob".to_string(), Decimal::new(150000, 2)),
        ]
    );
}

#[test]
fn input_ending_mid_action_exits_cleanly() {
    let (output, accounts) = run_session("3\nAlice\nDeposit\n", true);
    assert!(output.ends_with("Goodbye!\n"));
    assert_eq!(accounts[0].1, Decimal::new(100000, 2));
}

#[test]
fn non_ascii_names_ignore_case() {
    let script = ["5", "Zoë", "0", "5", "ZOË", "2", "zoë", "0"].join("\n");
    let (output, accounts) = run_session(&script, false);
    assert!(output.contains("An account with this name already exists."));
    assert!(output.contains("Account Name: Zoë\n"));
    assert_eq!(accounts, vec![("Zoë".to_string(), Decimal::from(0))]);
}

#[test]
fn balance_overflow_is_rejected_without_losing_state() {
    let script = [
        "5", "Max", "79228162514264337593543950335",
        "3", "Max", "Deposit", "1", "x", "y",
        "3", "Max", "Withdrawal", "79228162514264337593543950335", "x", "ATM", "1",
        "3", "Max", "Withdrawal", "1", "x", "ATM", "0",
        "0",
    ]
    .join("\n");
    let (output, accounts) = run_session(&script, false);

    assert_eq!(
        output
            .matches("The resulting balance of `Max` is out of range.")
            .count(),
        2
    );
    assert_eq!(
        output.matches("Transaction added successfully").count(),
        1
    );
    assert!(output.ends_with("Goodbye!\n"));
    assert_eq!(
        accounts,
        vec![("Max".to_string(), Decimal::MAX - Decimal::from(1))]
    );
}
