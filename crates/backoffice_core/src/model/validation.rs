//! Field-level validation shared by every entity.
//!
//! # Responsibility
//! - Define one typed error for malformed entity input.
//! - Provide small reusable checks used by constructors and mutators.
//!
//! # Invariants
//! - Checks never mutate; callers assign only after a check succeeds.
//! - Text checks operate on trimmed values and count chars, not bytes.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Malformed input rejected at an entity boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Text field is empty or whitespace only.
    Blank { field: &'static str },
    /// Trimmed text length falls outside `min..=max`.
    LengthOutOfRange {
        field: &'static str,
        min: usize,
        max: usize,
        actual: usize,
    },
    /// Identifier must be greater than zero.
    NonPositiveId { field: &'static str },
    /// Transaction amount must be greater than zero.
    NonPositiveAmount { amount: Decimal },
    /// Stored balance below zero.
    NegativeBalance { balance: Decimal },
    /// Salary outside the accepted band.
    SalaryOutOfRange { salary: Decimal },
    /// Hire date before the epoch or in the future.
    HireDateOutOfRange { hire_date: NaiveDate },
    /// Vacation day count outside `0..=365`.
    VacationDaysOutOfRange { days: u32 },
    /// Used vacation days exceed the available allocation.
    VacationDaysUsedExceedsAvailable { used: u32, available: u32 },
    /// Email lacks an `@`.
    InvalidEmail { email: String },
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Blank { field } => write!(f, "{field} cannot be empty"),
            Self::LengthOutOfRange {
                field,
                min,
                max,
                actual,
            } => write!(
                f,
                "{field} must be {min}-{max} characters, got {actual}"
            ),
            Self::NonPositiveId { field } => write!(f, "{field} must be positive"),
            Self::NonPositiveAmount { amount } => {
                write!(f, "amount must be greater than 0, got {amount}")
            }
            Self::NegativeBalance { balance } => {
                write!(f, "balance cannot be negative, got {balance}")
            }
            Self::SalaryOutOfRange { salary } => write!(
                f,
                "salary must be between {} and {}, got {salary}",
                super::employee::MIN_SALARY,
                super::employee::MAX_SALARY
            ),
            Self::HireDateOutOfRange { hire_date } => write!(
                f,
                "hire date must be between 1900-01-01 and today, got {hire_date}"
            ),
            Self::VacationDaysOutOfRange { days } => {
                write!(f, "vacation days must be 0-365, got {days}")
            }
            Self::VacationDaysUsedExceedsAvailable { used, available } => write!(
                f,
                "vacation days used ({used}) must be <= available ({available})"
            ),
            Self::InvalidEmail { email } => write!(f, "email `{email}` must contain '@'"),
        }
    }
}

impl Error for ValidationError {}

/// Trims `value` and rejects blank input.
pub(crate) fn require_text(field: &'static str, value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Blank { field });
    }
    Ok(trimmed.to_string())
}

/// Trims `value` and enforces a char-count window.
pub(crate) fn require_text_len(
    field: &'static str,
    value: &str,
    min: usize,
    max: usize,
) -> Result<String, ValidationError> {
    let trimmed = require_text(field, value)?;
    let actual = trimmed.chars().count();
    if actual < min || actual > max {
        return Err(ValidationError::LengthOutOfRange {
            field,
            min,
            max,
            actual,
        });
    }
    Ok(trimmed)
}

pub(crate) fn require_positive_amount(amount: Decimal) -> Result<(), ValidationError> {
    if amount <= Decimal::ZERO {
        return Err(ValidationError::NonPositiveAmount { amount });
    }
    Ok(())
}

pub(crate) fn require_positive_id(field: &'static str, id: u32) -> Result<(), ValidationError> {
    if id == 0 {
        return Err(ValidationError::NonPositiveId { field });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{require_text, require_text_len, ValidationError};

    #[test]
    fn require_text_trims_and_rejects_whitespace() {
        assert_eq!(require_text("title", "  Dune ").unwrap(), "Dune");
        assert_eq!(
            require_text("title", " \t ").unwrap_err(),
            ValidationError::Blank { field: "title" }
        );
    }

    #[test]
    fn require_text_len_counts_chars_after_trim() {
        assert_eq!(require_text_len("first name", " Li ", 2, 50).unwrap(), "Li");
        let err = require_text_len("first name", "  X  ", 2, 50).unwrap_err();
        assert_eq!(
            err,
            ValidationError::LengthOutOfRange {
                field: "first name",
                min: 2,
                max: 50,
                actual: 1,
            }
        );
        assert!(require_text_len("first name", "Zoë", 2, 3).is_ok());
    }
}
