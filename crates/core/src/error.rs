//! # Error Module
//!
//! Định nghĩa các domain errors cho Minibank sử dụng thiserror.

use crate::account::AccountNumber;
use thiserror::Error;

/// Core domain errors.
///
/// Các lỗi nghiệp vụ cốt lõi của Account và Bank. Tất cả đều có thể phục hồi,
/// không có lỗi nào làm dừng chương trình.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    // === Money errors ===
    #[error("Insufficient funds: requested {requested} cents, available {available} cents")]
    InsufficientFunds { requested: u64, available: u64 },

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    // === Bank errors ===
    #[error("No more accounts available (capacity {capacity})")]
    BankFull { capacity: usize },

    #[error("Account not found for account number: {0}")]
    AccountNotFound(AccountNumber),

    #[error("Account already exists: {0}")]
    DuplicateAccount(AccountNumber),

    #[error("Invalid account number: {0}")]
    InvalidAccountNumber(String),
}

/// Result type alias với CoreError
pub type CoreResult<T> = Result<T, CoreError>;

impl CoreError {
    /// Kiểm tra có phải lỗi không đủ số dư không
    pub fn is_insufficient_funds(&self) -> bool {
        matches!(self, CoreError::InsufficientFunds { .. })
    }

    /// Kiểm tra có phải lỗi ngân hàng đầy không
    pub fn is_bank_full(&self) -> bool {
        matches!(self, CoreError::BankFull { .. })
    }
}
