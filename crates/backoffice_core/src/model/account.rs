//! Bank account domain model.
//!
//! # Responsibility
//! - Hold one account's identity, holder and balance.
//! - Apply deposits and withdrawals with amount/balance checks.
//!
//! # Invariants
//! - `account_number` is assigned once and never changes.
//! - `balance` is never negative; it only moves through `deposit`/`withdraw`.
//! - A failed transaction leaves the balance untouched.

use crate::model::validation::{require_positive_amount, require_text, ValidationError};
use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Prefix of every generated account number.
pub const ACCOUNT_NUMBER_PREFIX: &str = "ACC";

static ACCOUNT_NUMBER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^ACC[0-9]+$").expect("valid account number regex"));

/// Transaction failure on one account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountError {
    /// Amount or holder input is malformed.
    Validation(ValidationError),
    /// Withdrawal larger than the current balance.
    InsufficientBalance {
        requested: Decimal,
        available: Decimal,
    },
}

impl Display for AccountError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::InsufficientBalance {
                requested,
                available,
            } => write!(
                f,
                "insufficient balance: requested {requested}, available {available}"
            ),
        }
    }
}

impl Error for AccountError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::InsufficientBalance { .. } => None,
        }
    }
}

impl From<ValidationError> for AccountError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

/// One bank account.
///
/// Fields are private so the balance cannot be edited around the
/// transaction methods. Deserialization re-validates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "AccountRecord")]
pub struct Account {
    account_number: String,
    account_holder_name: String,
    balance: Decimal,
}

/// Unvalidated wire shape used only for deserialization.
#[derive(Deserialize)]
struct AccountRecord {
    account_number: String,
    account_holder_name: String,
    balance: Decimal,
}

impl TryFrom<AccountRecord> for Account {
    type Error = ValidationError;

    fn try_from(value: AccountRecord) -> Result<Self, Self::Error> {
        let mut account = Self::new(value.account_number, value.account_holder_name.as_str())?;
        if value.balance < Decimal::ZERO {
            return Err(ValidationError::NegativeBalance {
                balance: value.balance,
            });
        }
        account.balance = value.balance;
        Ok(account)
    }
}

impl Account {
    /// Opens an account with a zero balance.
    ///
    /// # Errors
    /// - `Blank` when the number or the holder name is empty.
    pub fn new(
        account_number: impl Into<String>,
        account_holder_name: &str,
    ) -> Result<Self, ValidationError> {
        let account_number: String = account_number.into();
        let account_number = require_text("account number", &account_number)?;
        let account_holder_name = require_text("account holder name", account_holder_name)?;
        Ok(Self {
            account_number,
            account_holder_name,
            balance: Decimal::ZERO,
        })
    }

    pub fn account_number(&self) -> &str {
        &self.account_number
    }

    pub fn account_holder_name(&self) -> &str {
        &self.account_holder_name
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// Renames the holder. Blank names are rejected.
    pub fn set_account_holder_name(&mut self, name: &str) -> Result<(), ValidationError> {
        self.account_holder_name = require_text("account holder name", name)?;
        Ok(())
    }

    /// Adds `amount` and returns the new balance.
    pub fn deposit(&mut self, amount: Decimal) -> Result<Decimal, AccountError> {
        require_positive_amount(amount)?;
        self.balance += amount;
        Ok(self.balance)
    }

    /// Removes `amount` and returns the new balance.
    ///
    /// # Errors
    /// - `Validation` when `amount <= 0`.
    /// - `InsufficientBalance` when `amount > balance`.
    pub fn withdraw(&mut self, amount: Decimal) -> Result<Decimal, AccountError> {
        require_positive_amount(amount)?;
        if amount > self.balance {
            return Err(AccountError::InsufficientBalance {
                requested: amount,
                available: self.balance,
            });
        }
        self.balance -= amount;
        Ok(self.balance)
    }
}

/// Formats the account number for a sequence value, e.g. `ACC1000`.
pub fn format_account_number(sequence: u32) -> String {
    format!("{ACCOUNT_NUMBER_PREFIX}{sequence}")
}

/// Normalizes user-typed account numbers for lookup.
///
/// Returns `None` for blank input or anything not shaped like `ACC<digits>`.
pub fn normalize_account_number(input: &str) -> Option<String> {
    let candidate = input.trim().to_ascii_uppercase();
    if ACCOUNT_NUMBER_RE.is_match(&candidate) {
        Some(candidate)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::{format_account_number, normalize_account_number};

    #[test]
    fn account_numbers_use_prefix() {
        assert_eq!(format_account_number(1000), "ACC1000");
    }

    #[test]
    fn normalize_accepts_case_and_padding() {
        assert_eq!(
            normalize_account_number("  acc1001 ").as_deref(),
            Some("ACC1001")
        );
        assert_eq!(normalize_account_number(""), None);
        assert_eq!(normalize_account_number("ACC"), None);
        assert_eq!(normalize_account_number("XYZ1000"), None);
    }
}
