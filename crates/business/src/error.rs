//! Business layer errors
//!
//! Every failure is a recoverable value; callers branch on [`ErrorKind`]
//! rather than on message text.

use minibank_core::{AccountNumber, CoreError};
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Business operation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BusinessError {
    #[error("Invalid PIN for account {0}")]
    InvalidPin(AccountNumber),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Could not generate a unique account number after {attempts} attempts")]
    AccountNumberUnavailable { attempts: u32 },

    #[error("Core error: {0}")]
    Core(#[from] CoreError),
}

/// Result type alias for business operations
pub type BusinessResult<T> = Result<T, BusinessError>;

/// Error taxonomy exposed to callers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    BankFull,
    AccountNotFound,
    InvalidPin,
    InsufficientFunds,
    InvalidInput,
    /// Invariant breach or exhausted retries; never caused by user input alone
    Internal,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::BankFull => "bank_full",
            ErrorKind::AccountNotFound => "account_not_found",
            ErrorKind::InvalidPin => "invalid_pin",
            ErrorKind::InsufficientFunds => "insufficient_funds",
            ErrorKind::InvalidInput => "invalid_input",
            ErrorKind::Internal => "internal",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl BusinessError {
    /// Create invalid input error
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput(reason.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            BusinessError::InvalidPin(_) => ErrorKind::InvalidPin,
            BusinessError::InvalidInput(_) => ErrorKind::InvalidInput,
            BusinessError::AccountNumberUnavailable { .. } => ErrorKind::Internal,
            BusinessError::Core(core) => match core {
                CoreError::InsufficientFunds { .. } => ErrorKind::InsufficientFunds,
                CoreError::BankFull { .. } => ErrorKind::BankFull,
                CoreError::AccountNotFound(_) => ErrorKind::AccountNotFound,
                CoreError::InvalidAmount(_) | CoreError::InvalidAccountNumber(_) => {
                    ErrorKind::InvalidInput
                }
                CoreError::DuplicateAccount(_) => ErrorKind::Internal,
            },
        }
    }

    /// The account an authentication failure refers to, if any
    pub fn account(&self) -> Option<AccountNumber> {
        match self {
            BusinessError::InvalidPin(number)
            | BusinessError::Core(CoreError::AccountNotFound(number)) => Some(*number),
            _ => None,
        }
    }

    /// Account lookup or PIN check failed
    pub fn is_auth_failure(&self) -> bool {
        matches!(
            self.kind(),
            ErrorKind::AccountNotFound | ErrorKind::InvalidPin
        )
    }

    pub fn is_insufficient_funds(&self) -> bool {
        self.kind() == ErrorKind::InsufficientFunds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_mapping() {
        let number = AccountNumber::MIN;

        assert_eq!(BusinessError::InvalidPin(number).kind(), ErrorKind::InvalidPin);
        assert_eq!(
            BusinessError::from(CoreError::AccountNotFound(number)).kind(),
            ErrorKind::AccountNotFound
        );
        assert_eq!(
            BusinessError::from(CoreError::BankFull { capacity: 100 }).kind(),
            ErrorKind::BankFull
        );
        assert_eq!(
            BusinessError::from(CoreError::InsufficientFunds {
                requested: 2,
                available: 1
            })
            .kind(),
            ErrorKind::InsufficientFunds
        );
        assert_eq!(
            BusinessError::from(CoreError::InvalidAmount("x".into())).kind(),
            ErrorKind::InvalidInput
        );
        assert_eq!(
            BusinessError::AccountNumberUnavailable { attempts: 3 }.kind(),
            ErrorKind::Internal
        );
    }

    #[test]
    fn test_auth_failure_account() {
        let number = AccountNumber::MAX;
        let err = BusinessError::InvalidPin(number);
        assert!(err.is_auth_failure());
        assert_eq!(err.account(), Some(number));

        let err = BusinessError::invalid_input("bad");
        assert!(!err.is_auth_failure());
        assert_eq!(err.account(), None);
    }

    #[test]
    fn test_error_display() {
        let err = BusinessError::invalid_input("PIN must be 4 digits");
        assert_eq!(err.to_string(), "Invalid input: PIN must be 4 digits");
        assert_eq!(ErrorKind::BankFull.to_string(), "bank_full");
    }
}
