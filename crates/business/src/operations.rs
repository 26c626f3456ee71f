//! Bank operations - the use cases behind the menu
//!
//! BankOperations owns the [`Bank`] and implements every use case in terms of
//! Bank lookups and Account mutations. Authenticated operations always run
//! lookup -> PIN check -> input validation -> apply, so a wrong PIN is reported
//! before anything else is looked at.

use crate::atm::{validate_atm_amount, BillBreakdown};
use crate::config::{AtmDebitPolicy, BankConfig};
use crate::error::{BusinessError, BusinessResult};
use crate::results::{AtmDispense, BalanceUpdate, ChangeDeposit, InterestCredit, TransferReceipt};
use minibank_core::{
    dollars_to_cents, is_valid_pin_format, is_valid_ssn, parse_change, Account, AccountNumber,
    AccountSnapshot, Bank, Cents, CoreError, CredentialGenerator, RandomGenerator,
    CENTS_PER_DOLLAR,
};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use tracing::{debug, info, warn};

/// Annual rate is a percentage spread over twelve months
const MONTHLY_RATE_DIVISOR: u32 = 12 * 100;

/// Banking use cases over a single in-memory [`Bank`]
pub struct BankOperations<G = RandomGenerator> {
    bank: Bank,
    generator: G,
    config: BankConfig,
}

impl BankOperations<RandomGenerator> {
    /// Create with an OS-seeded random generator
    pub fn new(config: BankConfig) -> Self {
        Self::with_generator(config, RandomGenerator::new())
    }
}

impl<G: CredentialGenerator> BankOperations<G> {
    pub fn with_generator(config: BankConfig, generator: G) -> Self {
        Self {
            bank: Bank::with_capacity(config.max_accounts),
            generator,
            config,
        }
    }

    pub fn bank(&self) -> &Bank {
        &self.bank
    }

    fn authenticate(&self, number: AccountNumber, pin: &str) -> BusinessResult<&Account> {
        debug!(account = %number, "Looking up account");
        let account = self
            .bank
            .find_account(number)
            .ok_or(CoreError::AccountNotFound(number))?;

        if !account.is_valid_pin(pin) {
            warn!(account = %number, "PIN rejected");
            return Err(BusinessError::InvalidPin(number));
        }
        Ok(account)
    }

    fn authenticate_mut(
        &mut self,
        number: AccountNumber,
        pin: &str,
    ) -> BusinessResult<&mut Account> {
        self.authenticate(number, pin)?;
        Ok(self
            .bank
            .find_account_mut(number)
            .ok_or(CoreError::AccountNotFound(number))?)
    }

    fn account_mut(&mut self, number: AccountNumber) -> BusinessResult<&mut Account> {
        Ok(self
            .bank
            .find_account_mut(number)
            .ok_or(CoreError::AccountNotFound(number))?)
    }

    /// Create accounts from the generator until one has a number free in this bank
    fn create_unique_account(
        &mut self,
        first_name: &str,
        last_name: &str,
        ssn: &str,
    ) -> BusinessResult<Account> {
        let attempts = self.config.account_number_attempts.max(1);
        for attempt in 1..=attempts {
            let account = Account::create(first_name, last_name, ssn, &mut self.generator);
            if !self.bank.contains(account.number()) {
                return Ok(account);
            }
            debug!(
                account = %account.number(),
                attempt,
                "Account number already taken, retrying"
            );
        }
        Err(BusinessError::AccountNumberUnavailable { attempts })
    }

    /// Open a new account with a generated number and PIN
    pub fn open_account(
        &mut self,
        first_name: &str,
        last_name: &str,
        ssn: &str,
    ) -> BusinessResult<AccountSnapshot> {
        if !is_valid_ssn(ssn) {
            return Err(BusinessError::invalid_input(
                "Social Security Number must be 9 digits",
            ));
        }

        if self.bank.is_full() {
            warn!(capacity = self.bank.capacity(), "Bank is full, account not opened");
            return Err(CoreError::BankFull {
                capacity: self.bank.capacity(),
            }
            .into());
        }

        let account = self.create_unique_account(first_name, last_name, ssn)?;
        let number = account.number();
        let snapshot = account.describe();

        self.bank.add_account(account)?;
        info!(account = %number, open_accounts = self.bank.len(), "Account opened");

        Ok(snapshot)
    }

    /// Account details and balance
    pub fn account_info(
        &self,
        number: AccountNumber,
        pin: &str,
    ) -> BusinessResult<AccountSnapshot> {
        Ok(self.authenticate(number, pin)?.describe())
    }

    /// Change the PIN; `confirm_pin` must repeat `new_pin`
    pub fn change_pin(
        &mut self,
        number: AccountNumber,
        pin: &str,
        new_pin: &str,
        confirm_pin: &str,
    ) -> BusinessResult<()> {
        let account = self.authenticate_mut(number, pin)?;

        if !is_valid_pin_format(new_pin) {
            return Err(BusinessError::invalid_input("PIN must be 4 digits"));
        }
        if new_pin != confirm_pin {
            return Err(BusinessError::invalid_input("PINs do not match"));
        }

        account.set_pin(new_pin);
        info!(account = %number, "PIN updated");
        Ok(())
    }

    /// Deposit a dollar amount (truncated to whole cents)
    pub fn deposit(
        &mut self,
        number: AccountNumber,
        pin: &str,
        amount: Decimal,
    ) -> BusinessResult<BalanceUpdate> {
        self.authenticate(number, pin)?;
        let cents = positive_cents(amount)?;

        let new_balance = self.account_mut(number)?.deposit(cents)?;
        info!(account = %number, amount_cents = cents, new_balance, "Deposit applied");

        Ok(BalanceUpdate::new(number, cents, new_balance))
    }

    /// Withdraw a dollar amount; fails without side effects on insufficient funds
    pub fn withdraw(
        &mut self,
        number: AccountNumber,
        pin: &str,
        amount: Decimal,
    ) -> BusinessResult<BalanceUpdate> {
        self.authenticate(number, pin)?;
        let cents = positive_cents(amount)?;

        let new_balance = self.account_mut(number)?.withdraw(cents)?;
        info!(account = %number, amount_cents = cents, new_balance, "Withdrawal applied");

        Ok(BalanceUpdate::new(number, cents, new_balance))
    }

    /// Move money between two accounts, each authenticated with its own PIN.
    ///
    /// Both sides are checked before anything moves, so either both balances
    /// change or neither does.
    pub fn transfer(
        &mut self,
        from: AccountNumber,
        from_pin: &str,
        to: AccountNumber,
        to_pin: &str,
        amount: Decimal,
    ) -> BusinessResult<TransferReceipt> {
        self.authenticate(from, from_pin)?;
        self.authenticate(to, to_pin)?;
        let cents = positive_cents(amount)?;

        if from != to {
            self.account_mut(to)?.check_deposit(cents)?;
        }
        let from_balance = self.account_mut(from)?.withdraw(cents)?;
        let to_balance = self.account_mut(to)?.deposit(cents)?;
        // Same-account transfers end where they started
        let from_balance = if from == to { to_balance } else { from_balance };

        info!(
            from = %from,
            to = %to,
            amount_cents = cents,
            "Transfer complete"
        );

        Ok(TransferReceipt {
            from_account: from,
            to_account: to,
            amount_cents: cents,
            from_balance_cents: from_balance,
            to_balance_cents: to_balance,
        })
    }

    /// Dispense whole-dollar cash as $20/$10/$5 bills.
    ///
    /// The debit follows [`AtmDebitPolicy`]; with the default `Remainder`
    /// policy only the undispensed remainder is taken from the balance.
    pub fn atm_withdrawal(
        &mut self,
        number: AccountNumber,
        pin: &str,
        amount: Decimal,
    ) -> BusinessResult<AtmDispense> {
        self.authenticate(number, pin)?;
        let dollars = validate_atm_amount(amount)?;

        let bills = BillBreakdown::greedy(dollars);
        let debit_dollars = match self.config.atm_debit_policy {
            AtmDebitPolicy::Remainder => bills.remainder,
            AtmDebitPolicy::Requested => dollars,
        };
        let debited = u64::from(debit_dollars) * CENTS_PER_DOLLAR;

        let new_balance = self.account_mut(number)?.withdraw(debited)?;
        info!(
            account = %number,
            dollars,
            twenties = bills.twenties,
            tens = bills.tens,
            fives = bills.fives,
            debited_cents = debited,
            policy = %self.config.atm_debit_policy,
            "ATM withdrawal"
        );

        Ok(AtmDispense {
            account_number: number,
            requested_dollars: dollars,
            bills,
            debited_cents: debited,
            new_balance_cents: new_balance,
        })
    }

    /// Deposit coins given as codes (`P N D Q H W`, any case)
    pub fn deposit_change(
        &mut self,
        number: AccountNumber,
        pin: &str,
        coins: &str,
    ) -> BusinessResult<ChangeDeposit> {
        self.authenticate(number, pin)?;

        let parsed = parse_change(&coins.to_uppercase());
        if parsed.has_invalid_codes() {
            warn!(account = %number, invalid = ?parsed.invalid_codes, "Skipped invalid coins");
        }

        let new_balance = self.account_mut(number)?.deposit(parsed.total_cents)?;
        info!(
            account = %number,
            amount_cents = parsed.total_cents,
            new_balance,
            "Change deposited"
        );

        Ok(ChangeDeposit {
            account_number: number,
            deposited_cents: parsed.total_cents,
            new_balance_cents: new_balance,
            invalid_codes: parsed.invalid_codes,
        })
    }

    /// Close the account; its slot becomes free
    pub fn close_account(
        &mut self,
        number: AccountNumber,
        pin: &str,
    ) -> BusinessResult<AccountNumber> {
        self.authenticate(number, pin)?;
        self.bank.remove_account(number)?;
        info!(account = %number, open_accounts = self.bank.len(), "Account closed");
        Ok(number)
    }

    /// Credit one month of interest to every account.
    ///
    /// `interest = trunc(annual_rate / 12 / 100 * balance)` cents. Every credit
    /// is computed and checked before any balance changes.
    pub fn add_monthly_interest(
        &mut self,
        annual_rate: Decimal,
    ) -> BusinessResult<Vec<InterestCredit>> {
        if annual_rate <= Decimal::ZERO {
            return Err(BusinessError::invalid_input(
                "Interest rate must be positive",
            ));
        }

        let interest: Vec<(AccountNumber, Cents)> = self
            .bank
            .accounts()
            .map(|account| -> BusinessResult<(AccountNumber, Cents)> {
                let cents = monthly_interest(annual_rate, account.balance())?;
                account.check_deposit(cents)?;
                Ok((account.number(), cents))
            })
            .collect::<BusinessResult<_>>()?;

        let mut credits = Vec::with_capacity(interest.len());
        for (number, cents) in interest {
            let new_balance = self.account_mut(number)?.deposit(cents)?;
            info!(account = %number, interest_cents = cents, new_balance, "Interest deposited");
            credits.push(InterestCredit {
                account_number: number,
                interest_cents: cents,
                new_balance_cents: new_balance,
            });
        }

        Ok(credits)
    }
}

/// Convert dollars to cents, requiring at least one cent
fn positive_cents(amount: Decimal) -> BusinessResult<Cents> {
    if amount <= Decimal::ZERO {
        return Err(BusinessError::invalid_input("Amount must be positive"));
    }
    match dollars_to_cents(amount)? {
        0 => Err(BusinessError::invalid_input("Amount is less than one cent")),
        cents => Ok(cents),
    }
}

fn monthly_interest(annual_rate: Decimal, balance: Cents) -> BusinessResult<Cents> {
    annual_rate
        .checked_mul(Decimal::from(balance))
        .and_then(|scaled| scaled.checked_div(Decimal::from(MONTHLY_RATE_DIVISOR)))
        .and_then(|interest| interest.trunc().to_u64())
        .ok_or_else(|| {
            BusinessError::invalid_input(format!("Interest rate too large: {}", annual_rate))
        })
}
