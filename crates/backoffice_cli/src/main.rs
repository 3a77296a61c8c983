//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `backoffice_core` linkage with a short scripted run per domain.
//! - Keep output deterministic for quick local sanity checks.

use backoffice_core::{
    AccountRepository, BankService, Department, EmployeeDraft, EmployeeRepository,
    InMemoryAccountRepository, InMemoryEmployeeRepository, InMemoryLibraryRepository,
    LibraryService, PayrollService,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    println!("backoffice_core ping={}", backoffice_core::ping());
    println!("backoffice_core version={}", backoffice_core::core_version());

    let mut bank = BankService::new(InMemoryAccountRepository::new());
    let account = bank.open_account("Alice")?;
    bank.deposit(account.account_number(), Decimal::new(10_000, 2))?;
    let overdraw_rejected = bank
        .withdraw(account.account_number(), Decimal::new(15_000, 2))
        .is_err();
    let account = bank.withdraw(account.account_number(), Decimal::new(5_000, 2))?;
    println!(
        "bank account={} balance={} overdraw_rejected={overdraw_rejected} accounts={}",
        account.account_number(),
        account.balance(),
        bank.repo().list_accounts().len()
    );

    let mut employees = InMemoryEmployeeRepository::seeded()?;
    let hire_date = NaiveDate::from_ymd_opt(2022, 3, 1).ok_or("invalid hire date")?;
    let employee = employees.create_employee(&EmployeeDraft {
        first_name: "Carol".to_string(),
        last_name: "Smith".to_string(),
        department: Department::Marketing,
        salary: Decimal::new(60_000, 0),
        hire_date,
        vacation_days: 10,
    })?;
    let payroll = PayrollService::new(&employees);
    println!(
        "payroll employee_id={} tax={} net_monthly={} employees={}",
        employee.id(),
        payroll.tax_deduction(&employee).round_dp(2),
        payroll.net_monthly(&employee).round_dp(2),
        employees.list_employees().len()
    );

    let mut library = LibraryService::new(InMemoryLibraryRepository::new());
    library.subscribe(|event| println!("notice {}", event.message()));
    let book = library.add_book("Dune", "Herbert")?;
    let member = library.add_member("Bob", "bob@example.com")?;
    library.borrow_book(member.id(), book.id())?;
    let double_borrow_rejected = library.borrow_book(member.id(), book.id()).is_err();
    library.return_book(member.id(), book.id())?;
    println!(
        "library double_borrow_rejected={double_borrow_rejected} borrowed_now={}",
        library.borrowed_books().len()
    );

    Ok(())
}
