use chrono::NaiveDate;
use salesdesk_core::db::open_db_in_memory;
use salesdesk_core::{
    Department, DepartmentRepository, RepoError, Seller, SellerRepository,
    SqliteDepartmentRepository, SqliteSellerRepository, ValidationError,
};
use std::rc::Rc;

#[test]
fn insert_assigns_generated_id() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteDepartmentRepository::new(&conn);

    let mut department = Department::new("Sales");
    let id = repo.insert(&mut department).unwrap();

    assert_eq!(department.id, Some(id));
    assert!(department.is_persisted());
}

#[test]
fn insert_and_find_roundtrip() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteDepartmentRepository::new(&conn);

    let mut department = Department::new("IT");
    let id = repo.insert(&mut department).unwrap();

    let loaded = repo.find_by_id(id).unwrap().unwrap();
    assert_eq!(loaded, department);
}

#[test]
fn insert_rejects_blank_name() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteDepartmentRepository::new(&conn);

    let mut department = Department::new("  ");
    let err = repo.insert(&mut department).unwrap_err();

    assert!(matches!(
        err,
        RepoError::Validation(ValidationError::EmptyDepartmentName)
    ));
    assert_eq!(department.id, None);
}

#[test]
fn update_replaces_name_and_keeps_id() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteDepartmentRepository::new(&conn);

    let mut department = Department::new("Salse");
    let id = repo.insert(&mut department).unwrap();

    department.name = "Sales".to_string();
    repo.update(&department).unwrap();

    let loaded = repo.find_by_id(id).unwrap().unwrap();
    assert_eq!(loaded.id, Some(id));
    assert_eq!(loaded.name, "Sales");
}

#[test]
fn update_without_id_is_rejected() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteDepartmentRepository::new(&conn);

    let department = Department::new("Sales");
    let err = repo.update(&department).unwrap_err();

    assert!(matches!(err, RepoError::MissingId("department")));
}

#[test]
fn update_unknown_id_returns_not_found() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteDepartmentRepository::new(&conn);

    let department = Department::with_id(99, "Ghost");
    let err = repo.update(&department).unwrap_err();

    assert!(matches!(
        err,
        RepoError::NotFound {
            entity: "department",
            id: 99
        }
    ));
}

#[test]
fn find_by_id_returns_none_for_missing_row() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteDepartmentRepository::new(&conn);

    assert!(repo.find_by_id(42).unwrap().is_none());
}

#[test]
fn find_all_is_empty_vec_on_empty_table() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteDepartmentRepository::new(&conn);

    let departments = repo.find_all().unwrap();
    assert!(departments.is_empty());
}

#[test]
fn find_all_orders_by_name_ascending() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteDepartmentRepository::new(&conn);

    for name in ["Sales", "HR", "IT"] {
        repo.insert(&mut Department::new(name)).unwrap();
    }

    let names: Vec<String> = repo
        .find_all()
        .unwrap()
        .into_iter()
        .map(|department| department.name)
        .collect();
    assert_eq!(names, ["HR", "IT", "Sales"]);
}

#[test]
fn delete_unreferenced_department_succeeds() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteDepartmentRepository::new(&conn);

    let mut department = Department::new("Temp");
    let id = repo.insert(&mut department).unwrap();

    repo.delete_by_id(id).unwrap();
    assert!(repo.find_by_id(id).unwrap().is_none());
}

#[test]
fn delete_unknown_id_returns_not_found() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteDepartmentRepository::new(&conn);

    let err = repo.delete_by_id(123).unwrap_err();
    assert!(matches!(
        err,
        RepoError::NotFound {
            entity: "department",
            id: 123
        }
    ));
}

#[test]
fn delete_referenced_department_fails_and_leaves_row_intact() {
    let conn = open_db_in_memory().unwrap();
    let departments = SqliteDepartmentRepository::new(&conn);
    let sellers = SqliteSellerRepository::new(&conn);

    let mut department = Department::new("IT");
    let department_id = departments.insert(&mut department).unwrap();

    let mut seller = Seller::new(
        "Bob",
        "b@x.com",
        NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
        "3000.00".parse().unwrap(),
        Rc::new(department.clone()),
    );
    sellers.insert(&mut seller).unwrap();

    let err = departments.delete_by_id(department_id).unwrap_err();
    assert!(matches!(err, RepoError::HasDependents(id) if id == department_id));

    let still_there = departments.find_by_id(department_id).unwrap().unwrap();
    assert_eq!(still_there.name, "IT");
}
