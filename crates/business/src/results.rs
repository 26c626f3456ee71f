//! Structured results returned by [`BankOperations`](crate::BankOperations)

use crate::atm::BillBreakdown;
use minibank_core::{AccountNumber, Cents};
use serde::Serialize;

/// Single-account balance change (deposit, withdrawal)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BalanceUpdate {
    pub account_number: AccountNumber,
    pub amount_cents: Cents,
    pub new_balance_cents: Cents,
}

impl BalanceUpdate {
    pub fn new(
        account_number: AccountNumber,
        amount_cents: Cents,
        new_balance_cents: Cents,
    ) -> Self {
        Self {
            account_number,
            amount_cents,
            new_balance_cents,
        }
    }
}

/// Completed transfer between two accounts
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransferReceipt {
    pub from_account: AccountNumber,
    pub to_account: AccountNumber,
    pub amount_cents: Cents,
    pub from_balance_cents: Cents,
    pub to_balance_cents: Cents,
}

/// Cash handed out by the ATM
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AtmDispense {
    pub account_number: AccountNumber,
    pub requested_dollars: u32,
    pub bills: BillBreakdown,
    /// What was actually taken from the balance
    pub debited_cents: Cents,
    pub new_balance_cents: Cents,
}

/// Coins deposited into an account
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChangeDeposit {
    pub account_number: AccountNumber,
    pub deposited_cents: Cents,
    pub new_balance_cents: Cents,
    /// Unrecognized coin codes that were skipped
    pub invalid_codes: Vec<char>,
}

/// Interest credited to one account
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InterestCredit {
    pub account_number: AccountNumber,
    pub interest_cents: Cents,
    pub new_balance_cents: Cents,
}
