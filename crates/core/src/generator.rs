//! # Generator Module
//!
//! Sinh số tài khoản và PIN cho Account mới.
//! Production dùng `StdRng` (CSPRNG, seed từ OS); test dùng `SequentialGenerator`
//! để có kết quả xác định.

use crate::account::{AccountNumber, PIN_LENGTH};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Nguồn sinh số tài khoản và PIN, được inject vào Account/BankOperations.
pub trait CredentialGenerator {
    /// Số tài khoản ngẫu nhiên trong `[10_000_000, 99_999_999]`
    fn account_number(&mut self) -> AccountNumber;

    /// PIN gồm đúng 4 chữ số
    fn pin(&mut self) -> String;
}

/// Generator mặc định dựa trên `rand::rngs::StdRng`.
#[derive(Debug, Clone)]
pub struct RandomGenerator {
    rng: StdRng,
}

impl RandomGenerator {
    /// Seed từ entropy của hệ điều hành
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Seed cố định - cho phiên làm việc có thể lặp lại
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl CredentialGenerator for RandomGenerator {
    fn account_number(&mut self) -> AccountNumber {
        let value = self
            .rng
            .gen_range(AccountNumber::MIN.value()..=AccountNumber::MAX.value());
        AccountNumber::new_unchecked(value)
    }

    fn pin(&mut self) -> String {
        (0..PIN_LENGTH)
            .map(|_| char::from(b'0' + self.rng.gen_range(0..10u8)))
            .collect()
    }
}

/// Generator xác định: số tài khoản tăng dần từ `start`, PIN cố định.
#[derive(Debug, Clone)]
pub struct SequentialGenerator {
    next: u32,
    pin: String,
}

impl SequentialGenerator {
    pub fn new(start: AccountNumber, pin: &str) -> Self {
        Self {
            next: start.value(),
            pin: pin.to_string(),
        }
    }
}

impl Default for SequentialGenerator {
    fn default() -> Self {
        Self::new(AccountNumber::MIN, "1234")
    }
}

impl CredentialGenerator for SequentialGenerator {
    fn account_number(&mut self) -> AccountNumber {
        let number = AccountNumber::new_unchecked(self.next);
        // Quay vòng khi vượt quá 99_999_999
        self.next = if self.next >= AccountNumber::MAX.value() {
            AccountNumber::MIN.value()
        } else {
            self.next + 1
        };
        number
    }

    fn pin(&mut self) -> String {
        self.pin.clone()
    }
}
