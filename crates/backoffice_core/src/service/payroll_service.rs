//! Payroll calculation and reporting.
//!
//! # Responsibility
//! - Derive gross/tax/net pay figures from an employee's salary.
//! - Render per-employee payroll reports.
//!
//! # Invariants
//! - Read-only: never writes to the repository.
//! - Figures are exact decimals; rounding happens only when rendering.

use crate::model::employee::{Employee, EmployeeId};
use crate::repo::employee_repo::EmployeeRepository;
use crate::service::format::{format_amount, render_lines};
use chrono::{Local, NaiveDate};
use rust_decimal::Decimal;
use std::error::Error;
use std::fmt::{Display, Formatter};

const MONTHS_PER_YEAR: Decimal = Decimal::from_parts(12, 0, 0, false, 0);

/// Message returned by `all_reports` when there is nobody to pay.
pub const NO_PAYROLL_MESSAGE: &str = "No employees to generate payroll for.";

/// Flat tax rates applied to annual gross pay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaxRates {
    pub federal: Decimal,
    pub state: Decimal,
}

impl Default for TaxRates {
    fn default() -> Self {
        Self {
            federal: Decimal::new(22, 2),
            state: Decimal::new(5, 2),
        }
    }
}

impl TaxRates {
    pub fn combined(&self) -> Decimal {
        self.federal + self.state
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayrollError {
    EmployeeNotFound(EmployeeId),
}

impl Display for PayrollError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmployeeNotFound(id) => write!(f, "employee not found: {id}"),
        }
    }
}

impl Error for PayrollError {}

/// Payroll calculator reading from an employee repository.
pub struct PayrollService<'r, R: EmployeeRepository> {
    repo: &'r R,
    rates: TaxRates,
}

impl<'r, R: EmployeeRepository> PayrollService<'r, R> {
    pub fn new(repo: &'r R) -> Self {
        Self::with_rates(repo, TaxRates::default())
    }

    pub fn with_rates(repo: &'r R, rates: TaxRates) -> Self {
        Self { repo, rates }
    }

    pub fn rates(&self) -> TaxRates {
        self.rates
    }

    pub fn annual_gross(&self, employee: &Employee) -> Decimal {
        employee.salary()
    }

    pub fn monthly_gross(&self, employee: &Employee) -> Decimal {
        self.annual_gross(employee) / MONTHS_PER_YEAR
    }

    /// Annual tax: gross times the combined federal + state rate.
    pub fn tax_deduction(&self, employee: &Employee) -> Decimal {
        self.annual_gross(employee) * self.rates.combined()
    }

    pub fn annual_net(&self, employee: &Employee) -> Decimal {
        self.annual_gross(employee) - self.tax_deduction(employee)
    }

    pub fn net_monthly(&self, employee: &Employee) -> Decimal {
        self.annual_net(employee) / MONTHS_PER_YEAR
    }

    /// Payroll report dated today.
    pub fn report(&self, employee: &Employee) -> String {
        self.report_on(employee, Local::now().date_naive())
    }

    /// Payroll report with tenure and pay period computed for `today`.
    pub fn report_on(&self, employee: &Employee, today: NaiveDate) -> String {
        render_lines(&[
            "=== PAYROLL REPORT ===".to_string(),
            format!("Employee: {} (ID: {})", employee.full_name(), employee.id()),
            format!(
                "Department: {} | Tenure: {} Years",
                employee.department(),
                employee.years_of_service_on(today)
            ),
            String::new(),
            money_line("Annual Gross:  ", self.annual_gross(employee)),
            money_line("Annual Taxes:  ", self.tax_deduction(employee)),
            money_line("Annual Net:    ", self.annual_net(employee)),
            String::new(),
            money_line("Monthly Gross: ", self.monthly_gross(employee)),
            money_line("Monthly Net:   ", self.net_monthly(employee)),
            format!("Pay Period: {}", today.format("%B %Y")),
            "======================".to_string(),
        ])
    }

    /// Report for a stored employee.
    pub fn report_by_id(&self, id: EmployeeId) -> Result<String, PayrollError> {
        self.repo
            .get_employee(id)
            .map(|employee| self.report(&employee))
            .ok_or(PayrollError::EmployeeNotFound(id))
    }

    /// One report per employee in id order, or a single notice when empty.
    pub fn all_reports(&self) -> Vec<String> {
        let employees = self.repo.list_employees();
        if employees.is_empty() {
            return vec![NO_PAYROLL_MESSAGE.to_string()];
        }
        employees
            .iter()
            .map(|employee| self.report(employee))
            .collect()
    }
}

fn money_line(label: &str, amount: Decimal) -> String {
    format!("{label}${:>12}", format_amount(amount))
}
