//! # Money Module
//!
//! Chuyển đổi giữa số tiền dạng dollar (Decimal) và đơn vị nhỏ nhất (cent).
//! Mọi số dư trong hệ thống đều là số nguyên cent để tránh sai số dấu phẩy động.

use crate::error::{CoreError, CoreResult};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// Số tiền tính bằng cent (1/100 dollar)
pub type Cents = u64;

/// Số cent trong một dollar
pub const CENTS_PER_DOLLAR: u64 = 100;

/// Chuyển dollar sang cent, cắt bỏ phần lẻ dưới 1 cent (truncate, không làm tròn).
///
/// # Examples
/// ```
/// use minibank_core::dollars_to_cents;
/// use rust_decimal::Decimal;
///
/// assert_eq!(dollars_to_cents(Decimal::new(1050, 2)).unwrap(), 1050);
/// assert_eq!(dollars_to_cents(Decimal::new(12345, 4)).unwrap(), 123);
/// ```
pub fn dollars_to_cents(amount: Decimal) -> CoreResult<Cents> {
    if amount < Decimal::ZERO {
        return Err(CoreError::InvalidAmount(format!(
            "Amount cannot be negative: {}",
            amount
        )));
    }

    amount
        .checked_mul(Decimal::from(CENTS_PER_DOLLAR))
        .map(|cents| cents.trunc())
        .and_then(|cents| cents.to_u64())
        .ok_or_else(|| CoreError::InvalidAmount(format!("Amount too large: {}", amount)))
}

/// Hiển thị cent dưới dạng dollar với đúng 2 chữ số thập phân (`257` -> `"2.57"`)
pub fn cents_to_display(cents: Cents) -> String {
    format!("{}.{:02}", cents / CENTS_PER_DOLLAR, cents % CENTS_PER_DOLLAR)
}
