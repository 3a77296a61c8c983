//! Employee domain model.
//!
//! # Responsibility
//! - Hold validated employee profile, compensation and vacation balance.
//! - Re-check every invariant on each mutation.
//!
//! # Invariants
//! - `id` is positive and never changes after construction.
//! - Names are trimmed and 2-50 chars long.
//! - `salary` stays within `MIN_SALARY..=MAX_SALARY`.
//! - `hire_date` stays within `HIRE_DATE_EPOCH..=today`.
//! - `vacation_days_used <= vacation_days_available <= 365`.

use crate::model::validation::{require_positive_id, require_text_len, ValidationError};
use crate::service::format::format_amount;
use chrono::{Datelike, Local, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Repository-assigned employee identifier.
pub type EmployeeId = u32;

pub const NAME_MIN_CHARS: usize = 2;
pub const NAME_MAX_CHARS: usize = 50;
pub const MIN_SALARY: Decimal = Decimal::from_parts(10_000, 0, 0, false, 0);
pub const MAX_SALARY: Decimal = Decimal::from_parts(1_000_000, 0, 0, false, 0);
pub const MAX_VACATION_DAYS: u32 = 365;

/// Earliest accepted hire date.
pub fn hire_date_epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(1900, 1, 1).unwrap_or(NaiveDate::MIN)
}

/// Organisation unit an employee belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Department {
    HumanResources,
    Engineering,
    Marketing,
    Finance,
    Operations,
}

impl Department {
    /// Every department, in menu order.
    pub const ALL: [Department; 5] = [
        Self::HumanResources,
        Self::Engineering,
        Self::Marketing,
        Self::Finance,
        Self::Operations,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::HumanResources => "HumanResources",
            Self::Engineering => "Engineering",
            Self::Marketing => "Marketing",
            Self::Finance => "Finance",
            Self::Operations => "Operations",
        }
    }
}

impl Display for Department {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Input for creating or updating an employee.
///
/// The repository assigns the id; `vacation_days` becomes the initial
/// available allocation on create and is ignored by profile updates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeDraft {
    pub first_name: String,
    pub last_name: String,
    pub department: Department,
    pub salary: Decimal,
    pub hire_date: NaiveDate,
    pub vacation_days: u32,
}

/// One validated employee record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "EmployeeRecord")]
pub struct Employee {
    id: EmployeeId,
    first_name: String,
    last_name: String,
    department: Department,
    salary: Decimal,
    hire_date: NaiveDate,
    vacation_days_available: u32,
    vacation_days_used: u32,
}

#[derive(Deserialize)]
struct EmployeeRecord {
    id: EmployeeId,
    first_name: String,
    last_name: String,
    department: Department,
    salary: Decimal,
    hire_date: NaiveDate,
    vacation_days_available: u32,
    vacation_days_used: u32,
}

impl TryFrom<EmployeeRecord> for Employee {
    type Error = ValidationError;

    fn try_from(value: EmployeeRecord) -> Result<Self, Self::Error> {
        let mut employee = Self::new(
            value.id,
            &EmployeeDraft {
                first_name: value.first_name,
                last_name: value.last_name,
                department: value.department,
                salary: value.salary,
                hire_date: value.hire_date,
                vacation_days: value.vacation_days_available,
            },
        )?;
        if value.vacation_days_used > employee.vacation_days_available {
            return Err(ValidationError::VacationDaysUsedExceedsAvailable {
                used: value.vacation_days_used,
                available: employee.vacation_days_available,
            });
        }
        employee.vacation_days_used = value.vacation_days_used;
        Ok(employee)
    }
}

impl Employee {
    /// Builds an employee with zero used vacation days.
    ///
    /// # Errors
    /// Returns the first violated field rule, checked in declaration order.
    pub fn new(id: EmployeeId, draft: &EmployeeDraft) -> Result<Self, ValidationError> {
        require_positive_id("employee id", id)?;
        let first_name = validate_name("first name", &draft.first_name)?;
        let last_name = validate_name("last name", &draft.last_name)?;
        validate_salary(draft.salary)?;
        validate_hire_date(draft.hire_date)?;
        validate_vacation_days(draft.vacation_days)?;

        Ok(Self {
            id,
            first_name,
            last_name,
            department: draft.department,
            salary: draft.salary,
            hire_date: draft.hire_date,
            vacation_days_available: draft.vacation_days,
            vacation_days_used: 0,
        })
    }

    pub fn id(&self) -> EmployeeId {
        self.id
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn department(&self) -> Department {
        self.department
    }

    pub fn salary(&self) -> Decimal {
        self.salary
    }

    pub fn hire_date(&self) -> NaiveDate {
        self.hire_date
    }

    pub fn vacation_days_available(&self) -> u32 {
        self.vacation_days_available
    }

    pub fn vacation_days_used(&self) -> u32 {
        self.vacation_days_used
    }

    pub fn remaining_vacation_days(&self) -> u32 {
        self.vacation_days_available - self.vacation_days_used
    }

    /// Calendar-year difference between today and the hire year.
    pub fn years_of_service(&self) -> i32 {
        self.years_of_service_on(Local::now().date_naive())
    }

    pub fn years_of_service_on(&self, today: NaiveDate) -> i32 {
        today.year() - self.hire_date.year()
    }

    pub fn set_first_name(&mut self, value: &str) -> Result<(), ValidationError> {
        self.first_name = validate_name("first name", value)?;
        Ok(())
    }

    pub fn set_last_name(&mut self, value: &str) -> Result<(), ValidationError> {
        self.last_name = validate_name("last name", value)?;
        Ok(())
    }

    pub fn set_department(&mut self, value: Department) {
        self.department = value;
    }

    pub fn set_salary(&mut self, value: Decimal) -> Result<(), ValidationError> {
        validate_salary(value)?;
        self.salary = value;
        Ok(())
    }

    pub fn set_hire_date(&mut self, value: NaiveDate) -> Result<(), ValidationError> {
        validate_hire_date(value)?;
        self.hire_date = value;
        Ok(())
    }

    /// Grows the available allocation by `days`.
    ///
    /// # Errors
    /// - `VacationDaysOutOfRange` when the new total would exceed 365.
    pub fn add_vacation_days(&mut self, days: u32) -> Result<(), ValidationError> {
        let total = self.vacation_days_available.saturating_add(days);
        validate_vacation_days(total)?;
        self.vacation_days_available = total;
        Ok(())
    }

    /// Consumes `days` from the remaining balance.
    ///
    /// Returns `false` without changing state when `days` exceeds the
    /// remaining balance.
    pub fn use_vacation_days(&mut self, days: u32) -> bool {
        if days > self.remaining_vacation_days() {
            return false;
        }
        self.vacation_days_used += days;
        true
    }

    /// Copies the profile fields of `other`; id and vacation stay as-is.
    pub(crate) fn apply_profile(&mut self, other: &Employee) {
        self.first_name.clone_from(&other.first_name);
        self.last_name.clone_from(&other.last_name);
        self.department = other.department;
        self.salary = other.salary;
        self.hire_date = other.hire_date;
    }

    pub(crate) fn apply_vacation_balance(&mut self, other: &Employee) {
        self.vacation_days_available = other.vacation_days_available;
        self.vacation_days_used = other.vacation_days_used;
    }

    /// Case-insensitive substring match on first or last name.
    pub(crate) fn name_matches(&self, lowered_term: &str) -> bool {
        self.first_name.to_lowercase().contains(lowered_term)
            || self.last_name.to_lowercase().contains(lowered_term)
    }
}

impl Display for Employee {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ID: {:<5} Name: {:<20} Dept: {:<14} Salary: {:>12} Hire Date: {} Tenure: {}y Vacation: {}/{}/{}",
            self.id,
            self.full_name(),
            self.department.as_str(),
            format_amount(self.salary),
            self.hire_date.format("%m/%d/%Y"),
            self.years_of_service(),
            self.vacation_days_available,
            self.vacation_days_used,
            self.remaining_vacation_days()
        )
    }
}

fn validate_name(field: &'static str, value: &str) -> Result<String, ValidationError> {
    require_text_len(field, value, NAME_MIN_CHARS, NAME_MAX_CHARS)
}

fn validate_salary(salary: Decimal) -> Result<(), ValidationError> {
    if salary < MIN_SALARY || salary > MAX_SALARY {
        return Err(ValidationError::SalaryOutOfRange { salary });
    }
    Ok(())
}

fn validate_hire_date(hire_date: NaiveDate) -> Result<(), ValidationError> {
    if hire_date < hire_date_epoch() || hire_date > Local::now().date_naive() {
        return Err(ValidationError::HireDateOutOfRange { hire_date });
    }
    Ok(())
}

fn validate_vacation_days(days: u32) -> Result<(), ValidationError> {
    if days > MAX_VACATION_DAYS {
        return Err(ValidationError::VacationDaysOutOfRange { days });
    }
    Ok(())
}
