//! Interactive menu loop
//!
//! Prompts in the classic order: account number and PIN first, checked before
//! anything else is asked, then the operation's own inputs.

use crate::prompt::Prompter;
use crate::render::{Renderer, TransferSide};
use minibank_business::{validate_atm_amount, BankOperations, BusinessError};
use minibank_core::{is_valid_pin_format, AccountNumber, CredentialGenerator};
use rust_decimal::Decimal;
use std::io::{self, BufRead, Write};

const RULE: &str = "============================================================";

const MENU: &[&str] = &[
    "1. Open an account",
    "2. Get account information and balance",
    "3. Change PIN",
    "4. Deposit money in account",
    "5. Transfer money between accounts",
    "6. Withdraw money from account",
    "7. ATM withdrawal",
    "8. Deposit change",
    "9. Close an account",
    "10. Add monthly interest to all accounts",
    "11. End Program",
];

/// What the user picked from the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    OpenAccount,
    AccountInfo,
    ChangePin,
    Deposit,
    Transfer,
    Withdraw,
    AtmWithdrawal,
    DepositChange,
    CloseAccount,
    MonthlyInterest,
    Exit,
}

impl MenuChoice {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim() {
            "1" => Some(MenuChoice::OpenAccount),
            "2" => Some(MenuChoice::AccountInfo),
            "3" => Some(MenuChoice::ChangePin),
            "4" => Some(MenuChoice::Deposit),
            "5" => Some(MenuChoice::Transfer),
            "6" => Some(MenuChoice::Withdraw),
            "7" => Some(MenuChoice::AtmWithdrawal),
            "8" => Some(MenuChoice::DepositChange),
            "9" => Some(MenuChoice::CloseAccount),
            "10" => Some(MenuChoice::MonthlyInterest),
            "11" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// One interactive session over a bank
pub struct Session<R, W, G> {
    ops: BankOperations<G>,
    prompter: Prompter<R, W>,
    renderer: Renderer,
}

impl<R: BufRead, W: Write, G: CredentialGenerator> Session<R, W, G> {
    pub fn new(ops: BankOperations<G>, input: R, output: W, renderer: Renderer) -> Self {
        Self {
            ops,
            prompter: Prompter::new(input, output),
            renderer,
        }
    }

    #[cfg(test)]
    pub fn into_parts(self) -> (BankOperations<G>, W) {
        (self.ops, self.prompter.into_output())
    }

    /// Run until "End Program" or end of input
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.print_menu()?;
            let choice = match self.prompter.string("Enter your choice: ") {
                Ok(choice) => choice,
                Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => break,
                Err(e) => return Err(e),
            };

            let Some(choice) = MenuChoice::from_str(&choice) else {
                self.prompter.say("Invalid choice")?;
                continue;
            };
            if choice == MenuChoice::Exit {
                break;
            }

            match self.dispatch(choice) {
                Ok(()) => {}
                Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
                    self.prompter.say("")?;
                    self.prompter.say("Operation interrupted.")?;
                    break;
                }
                Err(e) => return Err(e),
            }
        }

        self.prompter.say("Exiting program. Goodbye!")
    }

    fn print_menu(&mut self) -> io::Result<()> {
        self.prompter.say(RULE)?;
        self.prompter.say("What do you want to do?")?;
        for line in MENU {
            self.prompter.say(line)?;
        }
        self.prompter.say(RULE)
    }

    fn dispatch(&mut self, choice: MenuChoice) -> io::Result<()> {
        match choice {
            MenuChoice::OpenAccount => self.open_account(),
            MenuChoice::AccountInfo => self.account_info(),
            MenuChoice::ChangePin => self.change_pin(),
            MenuChoice::Deposit => self.deposit(),
            MenuChoice::Transfer => self.transfer(),
            MenuChoice::Withdraw => self.withdraw(),
            MenuChoice::AtmWithdrawal => self.atm_withdrawal(),
            MenuChoice::DepositChange => self.deposit_change(),
            MenuChoice::CloseAccount => self.close_account(),
            MenuChoice::MonthlyInterest => self.monthly_interest(),
            MenuChoice::Exit => Ok(()),
        }
    }

    fn report(&mut self, message: String) -> io::Result<()> {
        self.prompter.say(message)
    }

    fn report_error(&mut self, err: &BusinessError, side: Option<TransferSide>) -> io::Result<()> {
        let message = self.renderer.error(err, side);
        self.prompter.say(message)
    }

    /// Ask for account number and PIN and check them before going further
    fn login(&mut self, side: Option<TransferSide>) -> io::Result<Option<(AccountNumber, String)>> {
        let number_prompt = match side {
            Some(TransferSide::From) => "Enter Account Number to Transfer From: ",
            Some(TransferSide::To) => "Enter Account Number to Transfer To: ",
            None => "Enter Account Number: ",
        };
        let number = self.prompter.account_number(number_prompt)?;
        let pin = self.prompter.string("Enter PIN: ")?;

        match self.ops.account_info(number, &pin) {
            Ok(_) => Ok(Some((number, pin))),
            Err(err) => {
                self.report_error(&err, side)?;
                Ok(None)
            }
        }
    }

    fn open_account(&mut self) -> io::Result<()> {
        self.prompter.say("OPEN ACCOUNT")?;
        let first = self.prompter.string("Enter Account Owner's First Name: ")?;
        let last = self.prompter.string("Enter Account Owner's Last Name: ")?;
        let ssn = self.prompter.ssn("Enter Account Owner's SSN (9 digits): ")?;

        match self.ops.open_account(&first, &last, &ssn) {
            Ok(snapshot) => self.report(self.renderer.snapshot(&snapshot)),
            Err(err) => self.report_error(&err, None),
        }
    }

    fn account_info(&mut self) -> io::Result<()> {
        self.prompter.say("Get Account Information and Balance")?;
        let number = self.prompter.account_number("Enter Account Number: ")?;
        let pin = self.prompter.string("Enter PIN: ")?;

        match self.ops.account_info(number, &pin) {
            Ok(snapshot) => self.report(self.renderer.snapshot(&snapshot)),
            Err(err) => self.report_error(&err, None),
        }
    }

    fn change_pin(&mut self) -> io::Result<()> {
        self.prompter.say("Change PIN")?;
        let Some((number, pin)) = self.login(None)? else {
            return Ok(());
        };

        let new_pin = self.prompter.string("Enter new PIN: ")?;
        if !is_valid_pin_format(&new_pin) {
            return self.prompter.say("PIN must be 4 digits, try again.");
        }
        let confirm = self.prompter.string("Enter new PIN again to confirm: ")?;

        match self.ops.change_pin(number, &pin, &new_pin, &confirm) {
            Ok(()) => self.report(self.renderer.pin_updated()),
            Err(BusinessError::InvalidInput(_)) => {
                self.prompter.say("PINs do not match, try again.")
            }
            Err(err) => self.report_error(&err, None),
        }
    }

    fn deposit(&mut self) -> io::Result<()> {
        self.prompter.say("Deposit Money into Account")?;
        let Some((number, pin)) = self.login(None)? else {
            return Ok(());
        };

        let amount = self
            .prompter
            .positive_number("Enter amount to deposit in dollars and cents (e.g. 2.57): ")?;
        match self.ops.deposit(number, &pin, amount) {
            Ok(update) => self.report(self.renderer.balance(&update)),
            Err(err) => self.report_error(&err, None),
        }
    }

    fn transfer(&mut self) -> io::Result<()> {
        self.prompter.say("Transfer Money Between Accounts")?;
        let Some((from, from_pin)) = self.login(Some(TransferSide::From))? else {
            return Ok(());
        };
        let Some((to, to_pin)) = self.login(Some(TransferSide::To))? else {
            return Ok(());
        };

        let amount = self
            .prompter
            .positive_number("Enter amount to transfer in dollars and cents (e.g. 2.57): ")?;
        match self.ops.transfer(from, &from_pin, to, &to_pin, amount) {
            Ok(receipt) => self.report(self.renderer.transfer(&receipt)),
            Err(err) => {
                let side = match err.account() {
                    Some(number) if number == to && number != from => Some(TransferSide::To),
                    Some(_) => Some(TransferSide::From),
                    None => None,
                };
                self.report_error(&err, side)
            }
        }
    }

    fn withdraw(&mut self) -> io::Result<()> {
        self.prompter.say("Withdraw Money from Account")?;
        let Some((number, pin)) = self.login(None)? else {
            return Ok(());
        };

        let amount = self
            .prompter
            .positive_number("Enter amount to withdraw in dollars and cents (e.g. 2.57): ")?;
        match self.ops.withdraw(number, &pin, amount) {
            Ok(update) => self.report(self.renderer.balance(&update)),
            Err(err) => self.report_error(&err, None),
        }
    }

    fn atm_withdrawal(&mut self) -> io::Result<()> {
        self.prompter.say("Make an ATM withdrawal from Account")?;
        let Some((number, pin)) = self.login(None)? else {
            return Ok(());
        };

        let mut prompt =
            "Enter amount to withdraw in dollars (no cents) in multiples of $5 (limit $1000): ";
        let amount = loop {
            let answer = self.prompter.string(prompt)?;
            let parsed = answer
                .parse::<Decimal>()
                .ok()
                .filter(|amount| validate_atm_amount(*amount).is_ok());
            match parsed {
                Some(amount) => break amount,
                None => {
                    self.prompter.say(
                        "Invalid amount. Amount must be a multiple of $5 between $5 and $1000.",
                    )?;
                    prompt = "Enter amount to withdraw: ";
                }
            }
        };

        match self.ops.atm_withdrawal(number, &pin, amount) {
            Ok(dispense) => self.report(self.renderer.atm(&dispense)),
            Err(err) => self.report_error(&err, None),
        }
    }

    fn deposit_change(&mut self) -> io::Result<()> {
        self.prompter.say("Deposit Change into Account")?;
        let Some((number, pin)) = self.login(None)? else {
            return Ok(());
        };

        let coins = self.prompter.string("Deposit coins: ")?;
        match self.ops.deposit_change(number, &pin, &coins) {
            Ok(deposit) => self.report(self.renderer.change(&deposit)),
            Err(err) => self.report_error(&err, None),
        }
    }

    fn close_account(&mut self) -> io::Result<()> {
        self.prompter.say("Close an Account")?;
        let number = self.prompter.account_number("Enter Account Number: ")?;
        let pin = self.prompter.string("Enter PIN: ")?;

        match self.ops.close_account(number, &pin) {
            Ok(closed) => self.report(self.renderer.closed(closed)),
            Err(err) => self.report_error(&err, None),
        }
    }

    fn monthly_interest(&mut self) -> io::Result<()> {
        self.prompter.say("Add Monthly Interest to All Accounts")?;
        let rate = self.prompter.positive_number(
            "Enter annual interest rate percentage (e.g. 2.75 for 2.75%): ",
        )?;

        match self.ops.add_monthly_interest(rate) {
            Ok(credits) if credits.is_empty() => self.prompter.say("No accounts open"),
            Ok(credits) => self.report(self.renderer.interest(&credits)),
            Err(err) => self.report_error(&err, None),
        }
    }
}
