//! # Account Module
//!
//! Định nghĩa Account - một tài khoản ngân hàng với số dư (cent) và PIN.
//! Account tự quản lý deposit/withdraw và kiểm tra PIN của chính nó.

use crate::error::{CoreError, CoreResult};
use crate::generator::CredentialGenerator;
use crate::money::{cents_to_display, Cents};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Số chữ số của PIN
pub const PIN_LENGTH: usize = 4;

/// Số chữ số của SSN
pub const SSN_LENGTH: usize = 9;

const RULE: &str = "============================================================";

/// Số tài khoản 8 chữ số, luôn nằm trong `[10_000_000, 99_999_999]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct AccountNumber(u32);

impl AccountNumber {
    pub const MIN: Self = Self(10_000_000);
    pub const MAX: Self = Self(99_999_999);

    /// Tạo AccountNumber, trả về None nếu không đủ 8 chữ số
    pub fn new(value: u32) -> Option<Self> {
        if (Self::MIN.0..=Self::MAX.0).contains(&value) {
            Some(Self(value))
        } else {
            None
        }
    }

    pub(crate) const fn new_unchecked(value: u32) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for AccountNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for AccountNumber {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u32>()
            .ok()
            .and_then(Self::new)
            .ok_or_else(|| CoreError::InvalidAccountNumber(s.trim().to_string()))
    }
}

impl TryFrom<u32> for AccountNumber {
    type Error = CoreError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| CoreError::InvalidAccountNumber(value.to_string()))
    }
}

impl From<AccountNumber> for u32 {
    fn from(number: AccountNumber) -> Self {
        number.0
    }
}

/// Kiểm tra chuỗi có đúng `len` chữ số ASCII không
pub fn is_digits(value: &str, len: usize) -> bool {
    value.len() == len && value.bytes().all(|b| b.is_ascii_digit())
}

/// Kiểm tra SSN hợp lệ (đúng 9 chữ số)
pub fn is_valid_ssn(ssn: &str) -> bool {
    is_digits(ssn, SSN_LENGTH)
}

/// Kiểm tra định dạng PIN (đúng 4 chữ số)
pub fn is_valid_pin_format(pin: &str) -> bool {
    is_digits(pin, PIN_LENGTH)
}

/// Che SSN, chỉ giữ 4 số cuối: `XXX-XX-6789`
pub fn mask_ssn(ssn: &str) -> String {
    let chars: Vec<char> = ssn.chars().collect();
    let last4: String = chars[chars.len().saturating_sub(4)..].iter().collect();
    format!("XXX-XX-{}", last4)
}

/// Tài khoản ngân hàng.
///
/// Invariant: `balance >= 0` luôn đúng (kiểu `u64`), withdraw vượt số dư bị từ chối.
#[derive(Debug, Clone)]
pub struct Account {
    number: AccountNumber,
    owner_first_name: String,
    owner_last_name: String,
    owner_ssn: String,
    pin: String,
    balance: Cents,
}

impl Account {
    /// Tạo Account mới với số dư 0. SSN đã được caller kiểm tra.
    pub fn new(
        number: AccountNumber,
        pin: String,
        first_name: &str,
        last_name: &str,
        ssn: &str,
    ) -> Self {
        Self {
            number,
            owner_first_name: first_name.to_string(),
            owner_last_name: last_name.to_string(),
            owner_ssn: ssn.to_string(),
            pin,
            balance: 0,
        }
    }

    /// Tạo Account với số tài khoản và PIN lấy từ generator
    pub fn create<G>(first_name: &str, last_name: &str, ssn: &str, generator: &mut G) -> Self
    where
        G: CredentialGenerator + ?Sized,
    {
        let number = generator.account_number();
        let pin = generator.pin();
        Self::new(number, pin, first_name, last_name, ssn)
    }

    pub fn number(&self) -> AccountNumber {
        self.number
    }

    pub fn owner_first_name(&self) -> &str {
        &self.owner_first_name
    }

    pub fn owner_last_name(&self) -> &str {
        &self.owner_last_name
    }

    pub fn pin(&self) -> &str {
        &self.pin
    }

    /// Số dư hiện tại (cent)
    pub fn balance(&self) -> Cents {
        self.balance
    }

    /// Số dư sau khi nạp `amount`, không thay đổi account
    ///
    /// # Returns
    /// - `Err(InvalidAmount)` nếu số dư vượt quá `u64::MAX` cent
    pub fn check_deposit(&self, amount: Cents) -> CoreResult<Cents> {
        self.balance.checked_add(amount).ok_or_else(|| {
            CoreError::InvalidAmount(format!(
                "Deposit of {} cents would overflow the balance of account {}",
                amount, self.number
            ))
        })
    }

    /// Nạp tiền, trả về số dư mới. Tràn số dư thì số dư giữ nguyên.
    pub fn deposit(&mut self, amount: Cents) -> CoreResult<Cents> {
        self.balance = self.check_deposit(amount)?;
        Ok(self.balance)
    }

    /// Rút tiền
    ///
    /// # Returns
    /// - `Ok(new_balance)` nếu thành công
    /// - `Err(InsufficientFunds)` nếu không đủ số dư, số dư giữ nguyên
    pub fn withdraw(&mut self, amount: Cents) -> CoreResult<Cents> {
        if amount > self.balance {
            return Err(CoreError::InsufficientFunds {
                requested: amount,
                available: self.balance,
            });
        }
        self.balance -= amount;
        Ok(self.balance)
    }

    /// So sánh PIN (so sánh chuỗi trực tiếp, không constant-time)
    pub fn is_valid_pin(&self, candidate: &str) -> bool {
        self.pin == candidate
    }

    /// Đổi PIN. Caller chịu trách nhiệm kiểm tra định dạng và xác nhận.
    pub fn set_pin(&mut self, new_pin: &str) {
        self.pin = new_pin.to_string();
    }

    /// Snapshot để hiển thị
    pub fn describe(&self) -> AccountSnapshot {
        AccountSnapshot {
            account_number: self.number,
            owner_first_name: self.owner_first_name.clone(),
            owner_last_name: self.owner_last_name.clone(),
            masked_ssn: mask_ssn(&self.owner_ssn),
            pin: self.pin.clone(),
            balance_cents: self.balance,
            balance: cents_to_display(self.balance),
        }
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.describe())
    }
}

/// Thông tin Account tại một thời điểm, SSN đã được che.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountSnapshot {
    pub account_number: AccountNumber,
    pub owner_first_name: String,
    pub owner_last_name: String,
    pub masked_ssn: String,
    pub pin: String,
    pub balance_cents: Cents,
    /// Số dư dạng "123.45"
    pub balance: String,
}

impl fmt::Display for AccountSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", RULE)?;
        writeln!(f, "Account Number: {}", self.account_number)?;
        writeln!(f, "Owner First Name: {}", self.owner_first_name)?;
        writeln!(f, "Owner Last Name: {}", self.owner_last_name)?;
        writeln!(f, "Owner SSN: {}", self.masked_ssn)?;
        writeln!(f, "PIN: {}", self.pin)?;
        writeln!(f, "Balance: ${}", self.balance)?;
        write!(f, "{}", RULE)
    }
}
