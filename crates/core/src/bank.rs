//! # Bank Module
//!
//! Bank - sổ đăng ký Account theo số tài khoản, có giới hạn số lượng (mặc định 100).
//! Bank sở hữu hoàn toàn các Account; bên ngoài chỉ mượn tham chiếu theo từng lần gọi.

use crate::account::{Account, AccountNumber};
use crate::error::{CoreError, CoreResult};
use std::collections::BTreeMap;

/// Số tài khoản tối đa mặc định
pub const MAX_ACCOUNTS: usize = 100;

/// Ngân hàng trong bộ nhớ.
///
/// Invariant:
/// - `len() <= capacity()`
/// - Không có hai Account trùng số tài khoản (key của map)
#[derive(Debug, Clone)]
pub struct Bank {
    accounts: BTreeMap<AccountNumber, Account>,
    capacity: usize,
}

impl Bank {
    /// Tạo Bank rỗng với capacity mặc định `MAX_ACCOUNTS`
    pub fn new() -> Self {
        Self::with_capacity(MAX_ACCOUNTS)
    }

    /// Tạo Bank rỗng với capacity tùy chỉnh
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            accounts: BTreeMap::new(),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.accounts.len() >= self.capacity
    }

    pub fn contains(&self, number: AccountNumber) -> bool {
        self.accounts.contains_key(&number)
    }

    /// Thêm Account vào Bank
    ///
    /// # Errors
    /// - `BankFull` nếu đã đủ `capacity` accounts
    /// - `DuplicateAccount` nếu số tài khoản đã tồn tại
    pub fn add_account(&mut self, account: Account) -> CoreResult<()> {
        if self.is_full() {
            return Err(CoreError::BankFull {
                capacity: self.capacity,
            });
        }

        let number = account.number();
        if self.contains(number) {
            return Err(CoreError::DuplicateAccount(number));
        }

        self.accounts.insert(number, account);
        Ok(())
    }

    /// Xóa Account khỏi Bank, trả lại Account đã xóa
    pub fn remove_account(&mut self, number: AccountNumber) -> CoreResult<Account> {
        self.accounts
            .remove(&number)
            .ok_or(CoreError::AccountNotFound(number))
    }

    pub fn find_account(&self, number: AccountNumber) -> Option<&Account> {
        self.accounts.get(&number)
    }

    pub fn find_account_mut(&mut self, number: AccountNumber) -> Option<&mut Account> {
        self.accounts.get_mut(&number)
    }

    /// Duyệt accounts theo thứ tự số tài khoản tăng dần
    pub fn accounts(&self) -> impl Iterator<Item = &Account> {
        self.accounts.values()
    }
}

impl Default for Bank {
    fn default() -> Self {
        Self::new()
    }
}
