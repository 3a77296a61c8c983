//! Vacation balance management and reporting.
//!
//! # Responsibility
//! - Grant and consume vacation days for stored employees.
//! - Render per-employee vacation reports.
//!
//! # Invariants
//! - Grants outside `0..=365`, or pushing the allocation past 365, are hard
//!   validation errors; the stored balance is left unchanged.
//! - Unknown employees and over-requests report `false`/`None`.

use crate::model::employee::{EmployeeId, MAX_VACATION_DAYS};
use crate::model::validation::ValidationError;
use crate::repo::employee_repo::EmployeeRepository;
use crate::service::format::render_lines;
use chrono::{Local, NaiveDate};
use log::{info, warn};

/// Message returned by `all_reports` when there are no employees.
pub const NO_VACATION_MESSAGE: &str = "No employees to generate vacation reports for.";

/// Vacation operations writing through an employee repository.
pub struct VacationService<'r, R: EmployeeRepository> {
    repo: &'r mut R,
}

impl<'r, R: EmployeeRepository> VacationService<'r, R> {
    pub fn new(repo: &'r mut R) -> Self {
        Self { repo }
    }

    /// Grants `days` extra vacation days.
    ///
    /// Returns `Ok(false)` when the employee does not exist.
    ///
    /// # Errors
    /// - `VacationDaysOutOfRange` when `days > 365` or the new allocation
    ///   would exceed 365.
    pub fn add_days(&mut self, id: EmployeeId, days: u32) -> Result<bool, ValidationError> {
        if days > MAX_VACATION_DAYS {
            return Err(ValidationError::VacationDaysOutOfRange { days });
        }
        let Some(mut employee) = self.repo.get_employee(id) else {
            return Ok(false);
        };
        if let Err(err) = employee.add_vacation_days(days) {
            warn!("event=vacation_grant module=employee status=rejected employee_id={id} days={days}");
            return Err(err);
        }
        let saved = self.repo.save_vacation_balance(&employee);
        info!("event=vacation_grant module=employee status=ok employee_id={id} days={days}");
        Ok(saved)
    }

    /// Consumes `days`; returns `false` for unknown ids or over-requests.
    pub fn use_days(&mut self, id: EmployeeId, days: u32) -> bool {
        let Some(mut employee) = self.repo.get_employee(id) else {
            return false;
        };
        if !employee.use_vacation_days(days) {
            warn!("event=vacation_use module=employee status=rejected employee_id={id} days={days}");
            return false;
        }
        let saved = self.repo.save_vacation_balance(&employee);
        info!("event=vacation_use module=employee status=ok employee_id={id} days={days}");
        saved
    }

    /// Remaining days, or `None` for unknown ids.
    pub fn remaining(&self, id: EmployeeId) -> Option<u32> {
        self.repo
            .get_employee(id)
            .map(|employee| employee.remaining_vacation_days())
    }

    pub fn report(&self, id: EmployeeId) -> String {
        self.report_on(id, Local::now().date_naive())
    }

    /// Vacation report; unknown ids render a not-found block.
    pub fn report_on(&self, id: EmployeeId, today: NaiveDate) -> String {
        let Some(employee) = self.repo.get_employee(id) else {
            return render_lines(&[
                "=== VACATION REPORT ===".to_string(),
                "Employee not found.".to_string(),
                "=======================".to_string(),
            ]);
        };

        render_lines(&[
            "=== VACATION REPORT ===".to_string(),
            format!("Employee: {} (ID: {})", employee.full_name(), employee.id()),
            format!(
                "Department: {} | Tenure: {} Years",
                employee.department(),
                employee.years_of_service_on(today)
            ),
            String::new(),
            format!("Total Allocated: {:>5}", employee.vacation_days_available()),
            format!("Days Used:       {:>5}", employee.vacation_days_used()),
            format!("Remaining:       {:>5}", employee.remaining_vacation_days()),
            "=======================".to_string(),
        ])
    }

    /// One report per employee in id order, or a single notice when empty.
    pub fn all_reports(&self) -> Vec<String> {
        let employees = self.repo.list_employees();
        if employees.is_empty() {
            return vec![NO_VACATION_MESSAGE.to_string()];
        }
        employees
            .iter()
            .map(|employee| self.report(employee.id()))
            .collect()
    }
}
