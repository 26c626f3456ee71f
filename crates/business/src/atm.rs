//! ATM cash dispensing
//!
//! Amount validation and the greedy $20/$10/$5 bill breakdown.

use crate::error::{BusinessError, BusinessResult};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::Serialize;

/// Smallest ATM withdrawal in dollars
pub const ATM_MIN_DOLLARS: u32 = 5;
/// Largest ATM withdrawal in dollars
pub const ATM_MAX_DOLLARS: u32 = 1000;
/// ATM amounts must be a multiple of this many dollars
pub const ATM_STEP_DOLLARS: u32 = 5;

/// Bill counts for a dispensed amount
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct BillBreakdown {
    pub twenties: u32,
    pub tens: u32,
    pub fives: u32,
    /// Dollars that could not be covered by bills
    pub remainder: u32,
}

impl BillBreakdown {
    /// Largest denomination first
    pub fn greedy(dollars: u32) -> Self {
        let twenties = dollars / 20;
        let rest = dollars % 20;
        let tens = rest / 10;
        let rest = rest % 10;
        let fives = rest / 5;
        let remainder = rest % 5;

        Self {
            twenties,
            tens,
            fives,
            remainder,
        }
    }

    /// Dollars covered by bills
    pub fn dispensed(&self) -> u32 {
        self.twenties * 20 + self.tens * 10 + self.fives * 5
    }
}

/// Validate an ATM request: whole dollars, within limits, multiple of $5
pub fn validate_atm_amount(amount: Decimal) -> BusinessResult<u32> {
    let invalid = || {
        BusinessError::invalid_input(format!(
            "Amount must be a multiple of ${} between ${} and ${}",
            ATM_STEP_DOLLARS, ATM_MIN_DOLLARS, ATM_MAX_DOLLARS
        ))
    };

    if !amount.fract().is_zero() {
        return Err(invalid());
    }

    let dollars = amount.to_u32().ok_or_else(invalid)?;
    if !(ATM_MIN_DOLLARS..=ATM_MAX_DOLLARS).contains(&dollars) || dollars % ATM_STEP_DOLLARS != 0
    {
        return Err(invalid());
    }

    Ok(dollars)
}
