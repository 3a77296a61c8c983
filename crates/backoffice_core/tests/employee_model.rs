use backoffice_core::{Department, Employee, EmployeeDraft, ValidationError};
use chrono::{Duration, Local, NaiveDate};
use rust_decimal::Decimal;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn draft() -> EmployeeDraft {
    EmployeeDraft {
        first_name: "  Ada ".to_string(),
        last_name: "Lovelace".to_string(),
        department: Department::Engineering,
        salary: Decimal::new(60_000, 0),
        hire_date: date(2019, 4, 1),
        vacation_days: 20,
    }
}

#[test]
fn new_trims_names_and_starts_with_no_used_days() {
    let employee = Employee::new(7, &draft()).unwrap();

    assert_eq!(employee.id(), 7);
    assert_eq!(employee.first_name(), "Ada");
    assert_eq!(employee.full_name(), "Ada Lovelace");
    assert_eq!(employee.vacation_days_available(), 20);
    assert_eq!(employee.vacation_days_used(), 0);
    assert_eq!(employee.remaining_vacation_days(), 20);
    assert_eq!(employee.years_of_service_on(date(2026, 1, 2)), 7);
}

#[test]
fn zero_id_is_rejected() {
    let err = Employee::new(0, &draft()).unwrap_err();
    assert_eq!(err, ValidationError::NonPositiveId { field: "employee id" });
}

#[test]
fn name_length_bounds_are_enforced() {
    let mut short = draft();
    short.first_name = " A ".to_string();
    assert!(matches!(
        Employee::new(1, &short).unwrap_err(),
        ValidationError::LengthOutOfRange { field: "first name", actual: 1, .. }
    ));

    let mut long = draft();
    long.last_name = "x".repeat(51);
    assert!(Employee::new(1, &long).is_err());

    let mut edge = draft();
    edge.last_name = "x".repeat(50);
    assert!(Employee::new(1, &edge).is_ok());
}

#[test]
fn salary_band_is_inclusive() {
    for (salary, ok) in [
        (Decimal::new(9_999, 0), false),
        (Decimal::new(10_000, 0), true),
        (Decimal::new(1_000_000, 0), true),
        (Decimal::new(100_000_001, 2), false),
    ] {
        let mut input = draft();
        input.salary = salary;
        assert_eq!(Employee::new(1, &input).is_ok(), ok, "salary {salary}");
    }
}

#[test]
fn hire_date_must_be_between_epoch_and_today() {
    let mut future = draft();
    future.hire_date = Local::now().date_naive() + Duration::days(2);
    assert!(matches!(
        Employee::new(1, &future).unwrap_err(),
        ValidationError::HireDateOutOfRange { .. }
    ));

    let mut ancient = draft();
    ancient.hire_date = date(1899, 12, 31);
    assert!(Employee::new(1, &ancient).is_err());

    let mut epoch = draft();
    epoch.hire_date = date(1900, 1, 1);
    assert!(Employee::new(1, &epoch).is_ok());
}

#[test]
fn setters_revalidate_and_keep_state_on_failure() {
    let mut employee = Employee::new(1, &draft()).unwrap();

    assert!(employee.set_salary(Decimal::new(5, 0)).is_err());
    assert_eq!(employee.salary(), Decimal::new(60_000, 0));

    assert!(employee.set_first_name("").is_err());
    assert_eq!(employee.first_name(), "Ada");

    employee.set_last_name("  Byron ").unwrap();
    employee.set_department(Department::Finance);
    assert_eq!(employee.last_name(), "Byron");
    assert_eq!(employee.department(), Department::Finance);
}

#[test]
fn vacation_usage_never_exceeds_allocation() {
    let mut employee = Employee::new(1, &draft()).unwrap();

    assert!(employee.use_vacation_days(15));
    assert!(!employee.use_vacation_days(6));
    assert_eq!(employee.vacation_days_used(), 15);
    assert!(employee.use_vacation_days(5));
    assert_eq!(employee.remaining_vacation_days(), 0);
    assert!(employee.vacation_days_used() <= employee.vacation_days_available());
}

#[test]
fn vacation_allocation_caps_at_365() {
    let mut employee = Employee::new(1, &draft()).unwrap();

    employee.add_vacation_days(345).unwrap();
    assert_eq!(employee.vacation_days_available(), 365);
    assert_eq!(
        employee.add_vacation_days(1).unwrap_err(),
        ValidationError::VacationDaysOutOfRange { days: 366 }
    );
    assert_eq!(employee.vacation_days_available(), 365);
}

#[test]
fn serialization_uses_snake_case_and_revalidates() {
    let mut employee = Employee::new(3, &draft()).unwrap();
    employee.use_vacation_days(4);

    let json = serde_json::to_value(&employee).unwrap();
    assert_eq!(json["department"], "engineering");
    assert_eq!(json["hire_date"], "2019-04-01");
    assert_eq!(json["salary"], "60000");
    assert_eq!(json["vacation_days_used"], 4);
    let decoded: Employee = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, employee);

    let overdrawn = serde_json::json!({
        "id": 3,
        "first_name": "Ada",
        "last_name": "Lovelace",
        "department": "human_resources",
        "salary": "60000",
        "hire_date": "2019-04-01",
        "vacation_days_available": 2,
        "vacation_days_used": 5
    });
    let err = serde_json::from_value::<Employee>(overdrawn).unwrap_err();
    assert!(
        err.to_string()
            .contains("vacation days used (5) must be <= available (2)"),
        "unexpected error: {err}"
    );
}

#[test]
fn department_display_matches_variant_names() {
    let names: Vec<String> = Department::ALL.iter().map(ToString::to_string).collect();
    assert_eq!(
        names,
        ["HumanResources", "Engineering", "Marketing", "Finance", "Operations"]
    );
}

#[test]
fn display_groups_salary_thousands() {
    let employee = Employee::new(7, &draft()).unwrap();
    let line = employee.to_string();
    assert!(line.contains("Salary:    60,000.00"));
    assert!(line.contains("Name: Ada Lovelace"));
    assert!(line.contains("Hire Date: 04/01/2019"));
}
