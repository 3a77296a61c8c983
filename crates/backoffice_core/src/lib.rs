//! Core domain logic for the banking, employee and library back offices.
//! This crate is the single source of truth for entity invariants; UIs call
//! into the repository and service layers and never mutate entities directly.

pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::account::{Account, AccountError};
pub use model::book::{Book, BookId, BookStatus};
pub use model::borrow_record::{BorrowRecord, RecordId};
pub use model::employee::{Department, Employee, EmployeeDraft, EmployeeId};
pub use model::member::{Member, MemberId};
pub use model::validation::ValidationError;
pub use repo::account_repo::{AccountRepository, InMemoryAccountRepository};
pub use repo::employee_repo::{EmployeeRepository, InMemoryEmployeeRepository};
pub use repo::library_repo::{InMemoryLibraryRepository, LibraryRepository, LoanError};
pub use repo::{RepoError, RepoResult};
pub use service::bank_service::{BankService, BankServiceError};
pub use service::library_service::{BorrowedBook, LibraryEvent, LibraryService};
pub use service::payroll_service::{PayrollError, PayrollService, TaxRates};
pub use service::vacation_service::VacationService;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
