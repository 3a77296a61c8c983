use backoffice_core::{
    Department, Employee, EmployeeDraft, EmployeeRepository, InMemoryEmployeeRepository,
    RepoError,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;

fn draft(first: &str, last: &str) -> EmployeeDraft {
    EmployeeDraft {
        first_name: first.to_string(),
        last_name: last.to_string(),
        department: Department::Operations,
        salary: Decimal::new(45_000, 0),
        hire_date: NaiveDate::from_ymd_opt(2018, 6, 30).unwrap(),
        vacation_days: 12,
    }
}

#[test]
fn create_then_get_returns_submitted_fields() {
    let mut repo = InMemoryEmployeeRepository::new();
    let created = repo.create_employee(&draft("Grace", "Hopper")).unwrap();

    let loaded = repo.get_employee(created.id()).unwrap();
    assert_eq!(loaded.id(), 1);
    assert_eq!(loaded.first_name(), "Grace");
    assert_eq!(loaded.last_name(), "Hopper");
    assert_eq!(loaded.department(), Department::Operations);
    assert_eq!(loaded.salary(), Decimal::new(45_000, 0));
    assert_eq!(loaded.hire_date(), NaiveDate::from_ymd_opt(2018, 6, 30).unwrap());
    assert_eq!(loaded.vacation_days_available(), 12);
}

#[test]
fn delete_removes_record() {
    let mut repo = InMemoryEmployeeRepository::new();
    let id = repo.create_employee(&draft("Grace", "Hopper")).unwrap().id();

    assert!(repo.delete_employee(id));
    assert!(repo.get_employee(id).is_none());
    assert!(!repo.employee_exists(id));
    assert!(!repo.delete_employee(id));
}

#[test]
fn invalid_draft_is_rejected_and_id_not_consumed() {
    let mut repo = InMemoryEmployeeRepository::new();
    let err = repo.create_employee(&draft("G", "Hopper")).unwrap_err();
    assert!(matches!(err, RepoError::Validation(_)));

    let created = repo.create_employee(&draft("Grace", "Hopper")).unwrap();
    assert_eq!(created.id(), 1);
}

#[test]
fn search_is_case_insensitive_and_blank_returns_nothing() {
    let mut repo = InMemoryEmployeeRepository::new();
    repo.create_employee(&draft("Grace", "Hopper")).unwrap();
    repo.create_employee(&draft("Alan", "Turing")).unwrap();
    repo.create_employee(&draft("Margaret", "Hamilton")).unwrap();

    let ids: Vec<u32> = repo.search_by_name("HA").iter().map(Employee::id).collect();
    assert_eq!(ids, vec![3]);
    let ids: Vec<u32> = repo.search_by_name(" r ").iter().map(Employee::id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
    assert!(repo.search_by_name("   ").is_empty());
    assert!(repo.search_by_name("").is_empty());
}

#[test]
fn update_overwrites_profile_but_not_vacation() {
    let mut repo = InMemoryEmployeeRepository::new();
    let mut employee = repo.create_employee(&draft("Grace", "Hopper")).unwrap();

    employee.set_salary(Decimal::new(90_000, 0)).unwrap();
    employee.set_department(Department::Engineering);
    employee.use_vacation_days(5);
    assert!(repo.update_employee(&employee));

    let loaded = repo.get_employee(employee.id()).unwrap();
    assert_eq!(loaded.salary(), Decimal::new(90_000, 0));
    assert_eq!(loaded.department(), Department::Engineering);
    assert_eq!(loaded.vacation_days_used(), 0);
}

#[test]
fn update_of_missing_employee_reports_false() {
    let mut repo = InMemoryEmployeeRepository::new();
    let stranger = Employee::new(42, &draft("Grace", "Hopper")).unwrap();
    assert!(!repo.update_employee(&stranger));
    assert!(!repo.save_vacation_balance(&stranger));
}

#[test]
fn list_is_sorted_snapshot() {
    let mut repo = InMemoryEmployeeRepository::new();
    repo.add_employee(Employee::new(5, &draft("Eve", "Five")).unwrap())
        .unwrap();
    repo.create_employee(&draft("Sam", "Six")).unwrap();
    repo.add_employee(Employee::new(2, &draft("Tom", "Two")).unwrap())
        .unwrap();

    let mut snapshot = repo.list_employees();
    let ids: Vec<u32> = snapshot.iter().map(Employee::id).collect();
    assert_eq!(ids, vec![2, 5, 6]);

    snapshot[0].set_first_name("Mutated").unwrap();
    snapshot.clear();
    assert_eq!(repo.get_employee(2).unwrap().first_name(), "Tom");
    assert_eq!(repo.list_employees().len(), 3);
}

#[test]
fn add_employee_rejects_duplicate_id() {
    let mut repo = InMemoryEmployeeRepository::new();
    let id = repo.next_available_id().unwrap();
    repo.add_employee(Employee::new(id, &draft("Grace", "Hopper")).unwrap())
        .unwrap();

    let err = repo
        .add_employee(Employee::new(id, &draft("Alan", "Turing")).unwrap())
        .unwrap_err();
    assert_eq!(err, RepoError::DuplicateId(id.to_string()));
    assert_eq!(repo.next_available_id().unwrap(), 2);
}

#[test]
fn max_id_insert_exhausts_sequence_without_panicking() {
    let mut repo = InMemoryEmployeeRepository::new();
    repo.add_employee(Employee::new(u32::MAX, &draft("Max", "Value")).unwrap())
        .unwrap();
    assert!(repo.employee_exists(u32::MAX));

    let err = repo.create_employee(&draft("Next", "One")).unwrap_err();
    assert_eq!(err, RepoError::IdsExhausted("employee"));
    assert_eq!(
        repo.next_available_id().unwrap_err(),
        RepoError::IdsExhausted("employee")
    );
    assert_eq!(repo.list_employees().len(), 1);
}

#[test]
fn seeded_repository_has_sample_employees() {
    let repo = InMemoryEmployeeRepository::seeded().unwrap();
    let employees = repo.list_employees();

    assert_eq!(employees.len(), 2);
    assert_eq!(employees[0].full_name(), "Wang Haochen");
    assert_eq!(employees[0].department(), Department::Engineering);
    assert_eq!(employees[0].vacation_days_available(), 15);
    assert_eq!(employees[1].full_name(), "Hridoy Hawladar");
    assert_eq!(employees[1].salary(), Decimal::new(25_000, 0));
}
