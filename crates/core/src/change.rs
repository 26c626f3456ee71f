//! # Change Module
//!
//! Đếm tiền xu: mỗi ký tự là một mã đồng xu (P, N, D, Q, H, W).
//! Mã không hợp lệ được bỏ qua và báo lại cho caller, không làm hỏng cả lượt nạp.

use crate::money::Cents;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Các loại đồng xu được chấp nhận
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Coin {
    /// P - 1 cent
    Penny,
    /// N - 5 cent
    Nickel,
    /// D - 10 cent
    Dime,
    /// Q - 25 cent
    Quarter,
    /// H - 50 cent
    HalfDollar,
    /// W - đồng 1 dollar
    WholeDollar,
}

impl Coin {
    /// Parse từ mã một ký tự (phân biệt hoa thường)
    pub fn from_code(code: char) -> Option<Self> {
        match code {
            'P' => Some(Coin::Penny),
            'N' => Some(Coin::Nickel),
            'D' => Some(Coin::Dime),
            'Q' => Some(Coin::Quarter),
            'H' => Some(Coin::HalfDollar),
            'W' => Some(Coin::WholeDollar),
            _ => None,
        }
    }

    pub fn code(&self) -> char {
        match self {
            Coin::Penny => 'P',
            Coin::Nickel => 'N',
            Coin::Dime => 'D',
            Coin::Quarter => 'Q',
            Coin::HalfDollar => 'H',
            Coin::WholeDollar => 'W',
        }
    }

    /// Giá trị (cent)
    pub fn cents(&self) -> Cents {
        match self {
            Coin::Penny => 1,
            Coin::Nickel => 5,
            Coin::Dime => 10,
            Coin::Quarter => 25,
            Coin::HalfDollar => 50,
            Coin::WholeDollar => 100,
        }
    }
}

impl fmt::Display for Coin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Kết quả đếm xu
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedChange {
    pub total_cents: Cents,
    /// Các mã không nhận diện được, theo thứ tự xuất hiện
    pub invalid_codes: Vec<char>,
}

impl ParsedChange {
    pub fn has_invalid_codes(&self) -> bool {
        !self.invalid_codes.is_empty()
    }
}

/// Cộng tổng giá trị các mã xu hợp lệ, gom lại các mã không hợp lệ.
///
/// # Examples
/// ```
/// use minibank_core::parse_change;
///
/// let parsed = parse_change("PZN");
/// assert_eq!(parsed.total_cents, 6);
/// assert_eq!(parsed.invalid_codes, vec!['Z']);
/// ```
pub fn parse_change(coins: &str) -> ParsedChange {
    coins
        .chars()
        .fold(ParsedChange::default(), |mut parsed, code| {
            match Coin::from_code(code) {
                Some(coin) => parsed.total_cents += coin.cents(),
                None => parsed.invalid_codes.push(code),
            }
            parsed
        })
}
