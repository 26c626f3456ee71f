//! Line-oriented prompts with re-prompt loops for malformed input

use minibank_core::{is_valid_ssn, AccountNumber};
use rust_decimal::Decimal;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

/// Digits with at most one decimal point (`"3.14"`, `"10"`, not `"-1"` or `"1e5"`)
pub fn is_numeric(s: &str) -> bool {
    let digits = s.replacen('.', "", 1);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Reads answers from `input`, echoing prompts to `output`.
///
/// End of input surfaces as `io::ErrorKind::UnexpectedEof`.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    /// Print a line
    pub fn say(&mut self, message: impl AsRef<str>) -> io::Result<()> {
        writeln!(self.output, "{}", message.as_ref())
    }

    /// One trimmed line of input
    pub fn string(&mut self, prompt: &str) -> io::Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "end of input"));
        }
        Ok(line.trim().to_string())
    }

    /// 9-digit SSN, asked again until well formed
    pub fn ssn(&mut self, prompt: &str) -> io::Result<String> {
        loop {
            let ssn = self.string(prompt)?;
            if is_valid_ssn(&ssn) {
                return Ok(ssn);
            }
            self.say("Social Security Number must be 9 digits")?;
        }
    }

    /// 8-digit account number, asked again until well formed
    pub fn account_number(&mut self, prompt: &str) -> io::Result<AccountNumber> {
        loop {
            match self.string(prompt)?.parse::<AccountNumber>() {
                Ok(number) => return Ok(number),
                Err(_) => self.say("Account number must be 8 digits")?,
            }
        }
    }

    /// Positive decimal number, asked again until valid
    pub fn positive_number(&mut self, prompt: &str) -> io::Result<Decimal> {
        loop {
            let answer = self.string(prompt)?;
            if is_numeric(&answer) {
                if let Ok(value) = Decimal::from_str(&answer) {
                    if value > Decimal::ZERO {
                        return Ok(value);
                    }
                }
            }
            self.say("Amount cannot be negative. Try again.")?;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_is_numeric() {
        assert!(is_numeric("123"));
        assert!(is_numeric("3.14"));
        assert!(is_numeric(".5"));
        assert!(!is_numeric("abc"));
        assert!(!is_numeric("1.2.3"));
        assert!(!is_numeric("-1"));
        assert!(!is_numeric(""));
        assert!(!is_numeric("."));
    }

    #[test]
    fn test_positive_number_reprompts() {
        let mut p = prompter("abc\n0\n2.57\n");
        assert_eq!(p.positive_number("Amount: ").unwrap(), dec!(2.57));

        let output = String::from_utf8(p.into_output()).unwrap();
        assert_eq!(output.matches("Amount cannot be negative").count(), 2);
    }

    #[test]
    fn test_ssn_reprompts() {
        let mut p = prompter("1234\n123456789\n");
        assert_eq!(p.ssn("SSN: ").unwrap(), "123456789");
    }

    #[test]
    fn test_account_number_reprompts() {
        let mut p = prompter("twelve\n12345678\n");
        assert_eq!(p.account_number("No: ").unwrap().value(), 12345678);
    }

    #[test]
    fn test_end_of_input() {
        let mut p = prompter("");
        let err = p.string("? ").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }
}
