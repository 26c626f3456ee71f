//! Bank configuration
//!
//! Defaults match the classic simulator; each value can be overridden through
//! environment variables (`MINIBANK_*`) or by the CLI.

use minibank_core::MAX_ACCOUNTS;
use serde::Serialize;
use std::env;
use std::fmt;

/// Default number of retries when a generated account number is already taken
pub const DEFAULT_ACCOUNT_NUMBER_ATTEMPTS: u32 = 32;

/// How much an ATM withdrawal debits from the account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AtmDebitPolicy {
    /// Debit only what is left after the greedy $20/$10/$5 breakdown.
    /// For any accepted amount that is zero, so the balance does not move.
    #[default]
    Remainder,
    /// Debit the full requested amount
    Requested,
}

impl AtmDebitPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            AtmDebitPolicy::Remainder => "remainder",
            AtmDebitPolicy::Requested => "requested",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "remainder" => Some(AtmDebitPolicy::Remainder),
            "requested" => Some(AtmDebitPolicy::Requested),
            _ => None,
        }
    }
}

impl fmt::Display for AtmDebitPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Bank configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BankConfig {
    /// Maximum number of open accounts
    pub max_accounts: usize,
    /// Account-number generation retries before giving up
    pub account_number_attempts: u32,
    pub atm_debit_policy: AtmDebitPolicy,
}

impl Default for BankConfig {
    fn default() -> Self {
        Self {
            max_accounts: MAX_ACCOUNTS,
            account_number_attempts: DEFAULT_ACCOUNT_NUMBER_ATTEMPTS,
            atm_debit_policy: AtmDebitPolicy::default(),
        }
    }
}

impl BankConfig {
    /// Load config from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            max_accounts: lookup("MINIBANK_MAX_ACCOUNTS")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.max_accounts),
            account_number_attempts: lookup("MINIBANK_ACCOUNT_NUMBER_ATTEMPTS")
                .and_then(|v| v.trim().parse().ok())
                .filter(|attempts| *attempts > 0)
                .unwrap_or(defaults.account_number_attempts),
            atm_debit_policy: lookup("MINIBANK_ATM_DEBIT")
                .and_then(|v| AtmDebitPolicy::from_str(&v))
                .unwrap_or(defaults.atm_debit_policy),
        }
    }

    pub fn with_max_accounts(mut self, max_accounts: usize) -> Self {
        self.max_accounts = max_accounts;
        self
    }

    pub fn with_atm_debit_policy(mut self, policy: AtmDebitPolicy) -> Self {
        self.atm_debit_policy = policy;
        self
    }

    pub fn with_account_number_attempts(mut self, attempts: u32) -> Self {
        self.account_number_attempts = attempts.max(1);
        self
    }
}
