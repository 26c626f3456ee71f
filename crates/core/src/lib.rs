//! # Minibank Core
//!
//! Core domain types: Account, Bank, coin parsing và chuyển đổi dollar/cent.

pub mod account;
pub mod bank;
pub mod change;
pub mod error;
pub mod generator;
pub mod money;

pub use account::{
    is_valid_pin_format, is_valid_ssn, mask_ssn, Account, AccountNumber, AccountSnapshot,
    PIN_LENGTH, SSN_LENGTH,
};
pub use bank::{Bank, MAX_ACCOUNTS};
pub use change::{parse_change, Coin, ParsedChange};
pub use error::{CoreError, CoreResult};
pub use generator::{CredentialGenerator, RandomGenerator, SequentialGenerator};
pub use money::{cents_to_display, dollars_to_cents, Cents, CENTS_PER_DOLLAR};
