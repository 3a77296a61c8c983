//! Employee repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Assign sequential employee ids starting at 1.
//! - Keep profile updates and vacation-balance writes as separate paths.
//!
//! # Invariants
//! - Ids are unique; `next_available_id` never returns a stored id.
//! - `update_employee` leaves vacation fields untouched.
//! - Listings are sorted by ascending id.

use crate::model::employee::{Department, Employee, EmployeeDraft, EmployeeId};
use crate::repo::{next_in_sequence, normalize_search_term, RepoError, RepoResult};
use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Repository interface for employee records.
pub trait EmployeeRepository {
    /// Reserves and returns the next id.
    ///
    /// # Errors
    /// - `IdsExhausted` once the id space is spent.
    fn next_available_id(&mut self) -> RepoResult<EmployeeId>;
    /// Validates `draft`, assigns the next id and stores the result.
    fn create_employee(&mut self, draft: &EmployeeDraft) -> RepoResult<Employee>;
    /// Stores a pre-built employee; rejects an id that is already taken.
    fn add_employee(&mut self, employee: Employee) -> RepoResult<()>;
    fn get_employee(&self, id: EmployeeId) -> Option<Employee>;
    fn list_employees(&self) -> Vec<Employee>;
    /// Case-insensitive substring match on first/last name; blank term
    /// yields an empty list.
    fn search_by_name(&self, term: &str) -> Vec<Employee>;
    /// Overwrites name, department, salary and hire date.
    fn update_employee(&mut self, employee: &Employee) -> bool;
    /// Overwrites available/used vacation days.
    fn save_vacation_balance(&mut self, employee: &Employee) -> bool;
    fn delete_employee(&mut self, id: EmployeeId) -> bool;
    fn employee_exists(&self, id: EmployeeId) -> bool;
}

/// Vec-backed employee store.
#[derive(Debug, Clone)]
pub struct InMemoryEmployeeRepository {
    employees: Vec<Employee>,
    next_id: EmployeeId,
}

impl Default for InMemoryEmployeeRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryEmployeeRepository {
    pub fn new() -> Self {
        Self {
            employees: Vec::new(),
            next_id: 1,
        }
    }

    /// Repository pre-filled with the two sample employees.
    pub fn seeded() -> RepoResult<Self> {
        let mut repo = Self::new();
        for draft in sample_drafts() {
            repo.create_employee(&draft)?;
        }
        Ok(repo)
    }

    fn find_mut(&mut self, id: EmployeeId) -> Option<&mut Employee> {
        self.employees.iter_mut().find(|employee| employee.id() == id)
    }

    fn sorted(mut employees: Vec<Employee>) -> Vec<Employee> {
        employees.sort_by_key(Employee::id);
        employees
    }
}

impl EmployeeRepository for InMemoryEmployeeRepository {
    fn next_available_id(&mut self) -> RepoResult<EmployeeId> {
        let id = self.next_id;
        self.next_id = next_in_sequence(id, "employee")?;
        Ok(id)
    }

    fn create_employee(&mut self, draft: &EmployeeDraft) -> RepoResult<Employee> {
        let following = next_in_sequence(self.next_id, "employee")?;
        let employee = Employee::new(self.next_id, draft)?;
        self.next_id = following;
        self.employees.push(employee.clone());
        Ok(employee)
    }

    fn add_employee(&mut self, employee: Employee) -> RepoResult<()> {
        if self.employee_exists(employee.id()) {
            return Err(RepoError::DuplicateId(employee.id().to_string()));
        }
        self.next_id = self.next_id.max(employee.id().saturating_add(1));
        self.employees.push(employee);
        Ok(())
    }

    fn get_employee(&self, id: EmployeeId) -> Option<Employee> {
        self.employees
            .iter()
            .find(|employee| employee.id() == id)
            .cloned()
    }

    fn list_employees(&self) -> Vec<Employee> {
        Self::sorted(self.employees.clone())
    }

    fn search_by_name(&self, term: &str) -> Vec<Employee> {
        let Some(term) = normalize_search_term(term) else {
            return Vec::new();
        };
        Self::sorted(
            self.employees
                .iter()
                .filter(|employee| employee.name_matches(&term))
                .cloned()
                .collect(),
        )
    }

    fn update_employee(&mut self, employee: &Employee) -> bool {
        match self.find_mut(employee.id()) {
            Some(existing) => {
                existing.apply_profile(employee);
                true
            }
            None => false,
        }
    }

    fn save_vacation_balance(&mut self, employee: &Employee) -> bool {
        match self.find_mut(employee.id()) {
            Some(existing) => {
                existing.apply_vacation_balance(employee);
                true
            }
            None => false,
        }
    }

    fn delete_employee(&mut self, id: EmployeeId) -> bool {
        let before = self.employees.len();
        self.employees.retain(|employee| employee.id() != id);
        self.employees.len() != before
    }

    fn employee_exists(&self, id: EmployeeId) -> bool {
        self.employees.iter().any(|employee| employee.id() == id)
    }
}

fn sample_drafts() -> Vec<EmployeeDraft> {
    [
        ("Wang", "Haochen", Department::Engineering, 20_000, (2020, 10, 20), 15),
        ("Hridoy", "Hawladar", Department::Finance, 25_000, (2021, 5, 15), 20),
    ]
    .into_iter()
    .filter_map(
        |(first_name, last_name, department, salary, (year, month, day), vacation_days)| {
            Some(EmployeeDraft {
                first_name: first_name.to_string(),
                last_name: last_name.to_string(),
                department,
                salary: Decimal::new(salary * 100, 2),
                hire_date: NaiveDate::from_ymd_opt(year, month, day)?,
                vacation_days,
            })
        },
    )
    .collect()
}
