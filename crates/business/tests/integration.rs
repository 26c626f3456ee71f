//! Integration tests for Minibank
//!
//! These tests drive BankOperations the way the menu does and check the
//! balance properties that must hold across every use case.

use minibank_business::{AtmDebitPolicy, BankConfig, BankOperations, ErrorKind};
use minibank_core::{AccountNumber, SequentialGenerator, MAX_ACCOUNTS};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

const PIN: &str = "1234";

fn bank() -> BankOperations<SequentialGenerator> {
    BankOperations::with_generator(BankConfig::default(), SequentialGenerator::default())
}

fn open(ops: &mut BankOperations<SequentialGenerator>, first: &str) -> AccountNumber {
    ops.open_account(first, "Doe", "123456789")
        .unwrap()
        .account_number
}

fn balance(ops: &BankOperations<SequentialGenerator>, number: AccountNumber) -> u64 {
    ops.account_info(number, PIN).unwrap().balance_cents
}

fn cents(value: u64) -> Decimal {
    Decimal::new(value as i64, 2)
}

/// Test: full menu session - open, deposit, transfer, ATM, coins, interest, close
#[test]
fn test_full_workflow() {
    let mut ops = bank();

    // 1. Open two accounts
    let jane = open(&mut ops, "Jane");
    let john = open(&mut ops, "John");
    assert_eq!(ops.bank().len(), 2);

    // 2. Deposit and withdraw
    ops.deposit(jane, PIN, dec!(100.00)).unwrap();
    ops.withdraw(jane, PIN, dec!(25.50)).unwrap();
    assert_eq!(balance(&ops, jane), 7450);

    // 3. Transfer to John
    let receipt = ops.transfer(jane, PIN, john, PIN, dec!(50)).unwrap();
    assert_eq!(receipt.from_balance_cents, 2450);
    assert_eq!(receipt.to_balance_cents, 5000);

    // 4. Coins into John's account
    let change = ops.deposit_change(john, PIN, "qqqqx").unwrap();
    assert_eq!(change.deposited_cents, 100);
    assert_eq!(change.invalid_codes, vec!['X']);
    assert_eq!(balance(&ops, john), 5100);

    // 5. ATM (default policy leaves the balance alone)
    let atm = ops.atm_withdrawal(john, PIN, dec!(45)).unwrap();
    assert_eq!((atm.bills.twenties, atm.bills.tens, atm.bills.fives), (2, 0, 1));
    assert_eq!(balance(&ops, john), 5100);

    // 6. Interest at 12%: 1% per month
    let credits = ops.add_monthly_interest(dec!(12)).unwrap();
    assert_eq!(credits.len(), 2);
    assert_eq!(balance(&ops, jane), 2474);
    assert_eq!(balance(&ops, john), 5151);

    // 7. Close Jane, John remains
    ops.close_account(jane, PIN).unwrap();
    assert_eq!(
        ops.account_info(jane, PIN).unwrap_err().kind(),
        ErrorKind::AccountNotFound
    );
    assert_eq!(balance(&ops, john), 5151);
}

/// Test: interest at 12% on $100.00 yields $101.00
#[test]
fn test_monthly_interest_scenario() {
    let mut ops = bank();
    let number = open(&mut ops, "Jane");
    ops.deposit(number, PIN, dec!(100)).unwrap();

    let credits = ops.add_monthly_interest(dec!(12)).unwrap();

    assert_eq!(credits[0].interest_cents, 100);
    assert_eq!(balance(&ops, number), 10100);
}

/// Test: the 101st account is refused and the first 100 survive
#[test]
fn test_bank_capacity() {
    let mut ops = bank();
    let numbers: Vec<AccountNumber> = (0..MAX_ACCOUNTS).map(|_| open(&mut ops, "Jane")).collect();

    let err = ops.open_account("Late", "Comer", "987654321").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::BankFull);

    for number in &numbers {
        assert!(ops.account_info(*number, PIN).is_ok());
    }

    // Closing one frees a slot
    ops.close_account(numbers[0], PIN).unwrap();
    assert!(ops.open_account("Late", "Comer", "987654321").is_ok());
}

/// Test: every authenticated operation refuses a wrong PIN
#[test]
fn test_pin_gating() {
    let mut ops = bank();
    let jane = open(&mut ops, "Jane");
    let john = open(&mut ops, "John");
    ops.deposit(jane, PIN, dec!(500)).unwrap();
    let bad = "9999";

    let kinds = vec![
        ops.account_info(jane, bad).map(|_| ()).unwrap_err().kind(),
        ops.change_pin(jane, bad, "1111", "1111").unwrap_err().kind(),
        ops.deposit(jane, bad, dec!(1)).map(|_| ()).unwrap_err().kind(),
        ops.withdraw(jane, bad, dec!(1)).map(|_| ()).unwrap_err().kind(),
        ops.transfer(jane, bad, john, PIN, dec!(1)).map(|_| ()).unwrap_err().kind(),
        ops.transfer(jane, PIN, john, bad, dec!(1)).map(|_| ()).unwrap_err().kind(),
        ops.atm_withdrawal(jane, bad, dec!(20)).map(|_| ()).unwrap_err().kind(),
        ops.deposit_change(jane, bad, "Q").map(|_| ()).unwrap_err().kind(),
        ops.close_account(jane, bad).map(|_| ()).unwrap_err().kind(),
    ];

    assert!(kinds.iter().all(|kind| *kind == ErrorKind::InvalidPin));
    assert_eq!(balance(&ops, jane), 50000);
    assert_eq!(balance(&ops, john), 0);
}

/// Test: every authenticated operation reports an unknown account
#[test]
fn test_unknown_account_everywhere() {
    let mut ops = bank();
    let jane = open(&mut ops, "Jane");
    ops.deposit(jane, PIN, dec!(500)).unwrap();
    let ghost = AccountNumber::MAX;

    let errors = vec![
        ops.account_info(ghost, PIN).map(|_| ()).unwrap_err(),
        ops.change_pin(ghost, PIN, "1111", "1111").unwrap_err(),
        ops.deposit(ghost, PIN, dec!(1)).map(|_| ()).unwrap_err(),
        ops.withdraw(ghost, PIN, dec!(1)).map(|_| ()).unwrap_err(),
        ops.transfer(ghost, PIN, jane, PIN, dec!(1)).map(|_| ()).unwrap_err(),
        ops.transfer(jane, PIN, ghost, PIN, dec!(1)).map(|_| ()).unwrap_err(),
        ops.atm_withdrawal(ghost, PIN, dec!(20)).map(|_| ()).unwrap_err(),
        ops.deposit_change(ghost, PIN, "Q").map(|_| ()).unwrap_err(),
        ops.close_account(ghost, PIN).map(|_| ()).unwrap_err(),
    ];

    for err in &errors {
        assert_eq!(err.kind(), ErrorKind::AccountNotFound);
        assert_eq!(err.account(), Some(ghost));
    }
    assert_eq!(balance(&ops, jane), 50000);
    assert_eq!(ops.bank().len(), 1);
}

/// Test: a full account refuses further credit and a transfer into it moves nothing
#[test]
fn test_balance_ceiling_transfer() {
    let mut ops = bank();
    let jane = open(&mut ops, "Jane");
    let john = open(&mut ops, "John");
    ops.deposit(jane, PIN, dec!(10)).unwrap();
    ops.deposit(john, PIN, dec!(184467440737095516.15)).unwrap();

    assert!(ops.transfer(jane, PIN, john, PIN, dec!(5)).is_err());
    assert!(ops.deposit(john, PIN, dec!(1)).is_err());

    assert_eq!(balance(&ops, jane), 1000);
    assert_eq!(balance(&ops, john), u64::MAX);
}

/// Test: the ATM can be configured to debit the full amount
#[test]
fn test_atm_requested_policy() {
    let config = BankConfig::default().with_atm_debit_policy(AtmDebitPolicy::Requested);
    let mut ops = BankOperations::with_generator(config, SequentialGenerator::default());
    let number = open(&mut ops, "Jane");
    ops.deposit(number, PIN, dec!(1000)).unwrap();

    let atm = ops.atm_withdrawal(number, PIN, dec!(1000)).unwrap();
    assert_eq!(atm.bills.twenties, 50);
    assert_eq!(atm.new_balance_cents, 0);
}

proptest! {
    #[test]
    fn prop_deposit_adds(start in 0u64..10_000_000, amount in 1u64..10_000_000) {
        let mut ops = bank();
        let number = open(&mut ops, "Jane");
        if start > 0 {
            ops.deposit(number, PIN, cents(start)).unwrap();
        }

        let update = ops.deposit(number, PIN, cents(amount)).unwrap();
        prop_assert_eq!(update.new_balance_cents, start + amount);
    }

    #[test]
    fn prop_withdraw_never_overdraws(start in 1u64..1_000_000, amount in 1u64..2_000_000) {
        let mut ops = bank();
        let number = open(&mut ops, "Jane");
        ops.deposit(number, PIN, cents(start)).unwrap();

        match ops.withdraw(number, PIN, cents(amount)) {
            Ok(update) => {
                prop_assert!(amount <= start);
                prop_assert_eq!(update.new_balance_cents, start - amount);
            }
            Err(err) => {
                prop_assert!(amount > start);
                prop_assert_eq!(err.kind(), ErrorKind::InsufficientFunds);
                prop_assert_eq!(balance(&ops, number), start);
            }
        }
    }

    #[test]
    fn prop_transfer_conserves_money(
        from_start in 1u64..1_000_000,
        to_start in 1u64..1_000_000,
        amount in 1u64..2_000_000,
    ) {
        let mut ops = bank();
        let from = open(&mut ops, "Jane");
        let to = open(&mut ops, "John");
        ops.deposit(from, PIN, cents(from_start)).unwrap();
        ops.deposit(to, PIN, cents(to_start)).unwrap();

        let result = ops.transfer(from, PIN, to, PIN, cents(amount));

        prop_assert_eq!(result.is_ok(), amount <= from_start);
        prop_assert_eq!(balance(&ops, from) + balance(&ops, to), from_start + to_start);
    }
}
