//! Text and JSON rendering of operation results

use minibank_business::{
    AtmDispense, BalanceUpdate, BusinessError, ChangeDeposit, ErrorKind, InterestCredit,
    TransferReceipt,
};
use minibank_core::{cents_to_display, AccountNumber, AccountSnapshot};
use serde::Serialize;
use serde_json::json;

/// Which account of a transfer a failure refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferSide {
    From,
    To,
}

/// Formats results for the console
#[derive(Debug, Clone, Copy, Default)]
pub struct Renderer {
    json: bool,
}

impl Renderer {
    pub fn new(json: bool) -> Self {
        Self { json }
    }

    fn to_json<T: Serialize>(value: &T) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|e| format!("{{\"error\":\"{}\"}}", e))
    }

    pub fn snapshot(&self, snapshot: &AccountSnapshot) -> String {
        if self.json {
            return Self::to_json(snapshot);
        }
        snapshot.to_string()
    }

    pub fn balance(&self, update: &BalanceUpdate) -> String {
        if self.json {
            return Self::to_json(update);
        }
        format!("New balance: ${}", cents_to_display(update.new_balance_cents))
    }

    pub fn transfer(&self, receipt: &TransferReceipt) -> String {
        if self.json {
            return Self::to_json(receipt);
        }
        format!(
            "Transfer Complete\nNew balance in account {} is: ${}\nNew balance in account {} is: ${}",
            receipt.from_account,
            cents_to_display(receipt.from_balance_cents),
            receipt.to_account,
            cents_to_display(receipt.to_balance_cents)
        )
    }

    pub fn atm(&self, dispense: &AtmDispense) -> String {
        if self.json {
            return Self::to_json(dispense);
        }
        format!(
            "Number of 20-dollar bills: {}\nNumber of 10-dollar bills: {}\nNumber of 5-dollar bills: {}\nNew balance: ${}",
            dispense.bills.twenties,
            dispense.bills.tens,
            dispense.bills.fives,
            cents_to_display(dispense.new_balance_cents)
        )
    }

    pub fn change(&self, deposit: &ChangeDeposit) -> String {
        if self.json {
            return Self::to_json(deposit);
        }
        let mut lines: Vec<String> = deposit
            .invalid_codes
            .iter()
            .map(|code| format!("Invalid coin: {}", code))
            .collect();
        lines.push(format!(
            "${} in coins deposited into account",
            cents_to_display(deposit.deposited_cents)
        ));
        lines.push(format!(
            "New balance: ${}",
            cents_to_display(deposit.new_balance_cents)
        ));
        lines.join("\n")
    }

    pub fn closed(&self, number: AccountNumber) -> String {
        if self.json {
            return Self::to_json(&json!({ "closed": number }));
        }
        format!("Account {} closed", number)
    }

    pub fn pin_updated(&self) -> String {
        if self.json {
            return Self::to_json(&json!({ "pin_updated": true }));
        }
        "PIN updated".to_string()
    }

    pub fn interest(&self, credits: &[InterestCredit]) -> String {
        if self.json {
            return Self::to_json(&credits);
        }
        credits
            .iter()
            .map(|credit| {
                format!(
                    "Deposited interest: ${} into account number:{}, new balance:${}",
                    cents_to_display(credit.interest_cents),
                    credit.account_number,
                    cents_to_display(credit.new_balance_cents)
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Error message; `side` qualifies authentication failures during a transfer
    pub fn error(&self, err: &BusinessError, side: Option<TransferSide>) -> String {
        if self.json {
            return Self::to_json(&json!({
                "error": err.kind(),
                "message": err.to_string(),
            }));
        }

        match err.kind() {
            ErrorKind::AccountNotFound | ErrorKind::InvalidPin => match side {
                Some(TransferSide::From) => {
                    "Invalid Account Number or PIN for Account to Transfer From".to_string()
                }
                Some(TransferSide::To) => {
                    "Invalid Account Number or PIN for Account to Transfer To".to_string()
                }
                None => "Invalid Account Number or PIN".to_string(),
            },
            ErrorKind::InsufficientFunds => "Insufficient funds".to_string(),
            ErrorKind::BankFull => "No more accounts available".to_string(),
            ErrorKind::InvalidInput => match err {
                BusinessError::InvalidInput(reason) => reason.clone(),
                BusinessError::Core(core) => core.to_string(),
                other => other.to_string(),
            },
            ErrorKind::Internal => err.to_string(),
        }
    }
}
