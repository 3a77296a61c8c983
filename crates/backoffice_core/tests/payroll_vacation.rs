use backoffice_core::service::payroll_service::NO_PAYROLL_MESSAGE;
use backoffice_core::service::vacation_service::NO_VACATION_MESSAGE;
use backoffice_core::{
    Department, EmployeeDraft, EmployeeRepository, InMemoryEmployeeRepository, PayrollError,
    PayrollService, TaxRates, VacationService, ValidationError,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;

fn draft(salary: i64, vacation_days: u32) -> EmployeeDraft {
    EmployeeDraft {
        first_name: "Carol".to_string(),
        last_name: "Smith".to_string(),
        department: Department::Marketing,
        salary: Decimal::new(salary, 0),
        hire_date: NaiveDate::from_ymd_opt(2015, 9, 1).unwrap(),
        vacation_days,
    }
}

#[test]
fn payroll_figures_for_60000_salary() {
    let mut repo = InMemoryEmployeeRepository::new();
    let employee = repo.create_employee(&draft(60_000, 10)).unwrap();
    let payroll = PayrollService::new(&repo);

    assert_eq!(payroll.annual_gross(&employee), Decimal::new(60_000, 0));
    assert_eq!(payroll.monthly_gross(&employee), Decimal::new(5_000, 0));
    assert_eq!(payroll.tax_deduction(&employee), Decimal::new(16_200, 0));
    assert_eq!(payroll.annual_net(&employee), Decimal::new(43_800, 0));
    assert_eq!(payroll.net_monthly(&employee), Decimal::new(365_000, 2));
}

#[test]
fn custom_rates_override_defaults() {
    let mut repo = InMemoryEmployeeRepository::new();
    let employee = repo.create_employee(&draft(100_000, 0)).unwrap();
    let rates = TaxRates {
        federal: Decimal::new(10, 2),
        state: Decimal::ZERO,
    };
    let payroll = PayrollService::with_rates(&repo, rates);

    assert_eq!(TaxRates::default().combined(), Decimal::new(27, 2));
    assert_eq!(payroll.tax_deduction(&employee), Decimal::new(10_000, 0));
    assert_eq!(payroll.net_monthly(&employee), Decimal::new(7_500, 0));
}

#[test]
fn payroll_report_lists_rounded_figures() {
    let mut repo = InMemoryEmployeeRepository::new();
    let employee = repo.create_employee(&draft(20_000, 0)).unwrap();
    let payroll = PayrollService::new(&repo);

    let report = payroll.report_on(&employee, NaiveDate::from_ymd_opt(2026, 10, 17).unwrap());
    assert!(report.starts_with("=== PAYROLL REPORT ===\n"));
    assert!(report.contains("Employee: Carol Smith (ID: 1)"));
    assert!(report.contains("Department: Marketing | Tenure: 11 Years"));
    assert!(report.contains("Annual Gross:  $   20,000.00"));
    assert!(report.contains("Annual Taxes:  $    5,400.00"));
    assert!(report.contains("Monthly Gross: $    1,666.67"));
    assert!(report.contains("Monthly Net:   $    1,216.67"));
    assert!(report.contains("Pay Period: October 2026"));
}

#[test]
fn payroll_report_by_id_and_all_reports() {
    let mut repo = InMemoryEmployeeRepository::new();
    assert_eq!(
        PayrollService::new(&repo).all_reports(),
        vec![NO_PAYROLL_MESSAGE.to_string()]
    );

    repo.create_employee(&draft(30_000, 0)).unwrap();
    repo.create_employee(&draft(40_000, 0)).unwrap();
    let payroll = PayrollService::new(&repo);

    assert_eq!(payroll.report_by_id(9), Err(PayrollError::EmployeeNotFound(9)));
    assert!(payroll.report_by_id(2).unwrap().contains("(ID: 2)"));

    let reports = payroll.all_reports();
    assert_eq!(reports.len(), 2);
    assert!(reports[0].contains("(ID: 1)"));
    assert!(reports[1].contains("(ID: 2)"));
}

#[test]
fn add_days_grants_and_enforces_cap() {
    let mut repo = InMemoryEmployeeRepository::new();
    let id = repo.create_employee(&draft(50_000, 360)).unwrap().id();
    let mut vacation = VacationService::new(&mut repo);

    assert_eq!(vacation.add_days(id, 5), Ok(true));
    assert_eq!(vacation.remaining(id), Some(365));

    assert_eq!(
        vacation.add_days(id, 1),
        Err(ValidationError::VacationDaysOutOfRange { days: 366 })
    );
    assert_eq!(
        vacation.add_days(id, 400),
        Err(ValidationError::VacationDaysOutOfRange { days: 400 })
    );
    assert_eq!(vacation.remaining(id), Some(365));
    assert_eq!(vacation.add_days(99, 1), Ok(false));
}

#[test]
fn use_days_rejects_over_requests_without_change() {
    let mut repo = InMemoryEmployeeRepository::new();
    let id = repo.create_employee(&draft(50_000, 10)).unwrap().id();
    let mut vacation = VacationService::new(&mut repo);

    assert!(vacation.use_days(id, 4));
    assert!(!vacation.use_days(id, 7));
    assert_eq!(vacation.remaining(id), Some(6));
    assert!(vacation.use_days(id, 0));
    assert!(!vacation.use_days(99, 1));
    assert_eq!(vacation.remaining(99), None);

    let stored = repo.get_employee(id).unwrap();
    assert_eq!(stored.vacation_days_used(), 4);
    assert!(stored.vacation_days_used() <= stored.vacation_days_available());
}

#[test]
fn vacation_reports() {
    let mut repo = InMemoryEmployeeRepository::new();
    assert_eq!(
        VacationService::new(&mut repo).all_reports(),
        vec![NO_VACATION_MESSAGE.to_string()]
    );

    let id = repo.create_employee(&draft(50_000, 20)).unwrap().id();
    let mut vacation = VacationService::new(&mut repo);
    vacation.use_days(id, 3);

    let report = vacation.report_on(id, NaiveDate::from_ymd_opt(2026, 1, 1).unwrap());
    assert!(report.contains("=== VACATION REPORT ==="));
    assert!(report.contains("Total Allocated:    20"));
    assert!(report.contains("Days Used:           3"));
    assert!(report.contains("Remaining:          17"));
    assert!(vacation.report(42).contains("Employee not found."));
    assert_eq!(vacation.all_reports().len(), 1);
}
