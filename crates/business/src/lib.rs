//! # Minibank Business
//!
//! Business logic layer - account opening, deposits, withdrawals, transfers,
//! ATM cash, coin deposits, closing and monthly interest.

pub mod atm;
pub mod config;
pub mod error;
pub mod operations;
pub mod results;

pub use atm::{validate_atm_amount, BillBreakdown, ATM_MAX_DOLLARS, ATM_MIN_DOLLARS};
pub use config::{AtmDebitPolicy, BankConfig};
pub use error::{BusinessError, BusinessResult, ErrorKind};
pub use operations::BankOperations;
pub use results::{AtmDispense, BalanceUpdate, ChangeDeposit, InterestCredit, TransferReceipt};
