use chrono::NaiveDate;
use rust_decimal::Decimal;
use salesdesk_core::{Department, Seller, ValidationError};
use std::rc::Rc;

fn birth_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1990, 1, 1).unwrap()
}

fn salary(text: &str) -> Decimal {
    text.parse().unwrap()
}

#[test]
fn new_department_is_transient() {
    let department = Department::new("Sales");

    assert_eq!(department.id, None);
    assert!(!department.is_persisted());
    assert_eq!(department.name, "Sales");
}

#[test]
fn department_with_id_is_persisted() {
    let department = Department::with_id(7, "IT");

    assert_eq!(department.id, Some(7));
    assert!(department.is_persisted());
}

#[test]
fn department_validate_rejects_blank_name() {
    let department = Department::new("   ");

    assert_eq!(
        department.validate(),
        Err(ValidationError::EmptyDepartmentName)
    );
}

#[test]
fn new_seller_is_transient_and_keeps_all_fields() {
    let department = Rc::new(Department::with_id(1, "IT"));
    let seller = Seller::new(
        "Bob",
        "bob@example.com",
        birth_date(),
        salary("3000.00"),
        Rc::clone(&department),
    );

    assert_eq!(seller.id, None);
    assert!(!seller.is_persisted());
    assert_eq!(seller.name, "Bob");
    assert_eq!(seller.email, "bob@example.com");
    assert_eq!(seller.birth_date, birth_date());
    assert_eq!(seller.base_salary, salary("3000.00"));
    assert!(Rc::ptr_eq(&seller.department, &department));
}

#[test]
fn seller_validate_rejects_blank_name_and_email() {
    let department = Rc::new(Department::with_id(1, "IT"));

    let blank_name = Seller::new(
        " ",
        "bob@example.com",
        birth_date(),
        salary("3000.00"),
        Rc::clone(&department),
    );
    assert_eq!(blank_name.validate(), Err(ValidationError::EmptySellerName));

    let blank_email = Seller::new(
        "Bob",
        "",
        birth_date(),
        salary("3000.00"),
        department,
    );
    assert_eq!(
        blank_email.validate(),
        Err(ValidationError::EmptySellerEmail)
    );
}

#[test]
fn seller_validate_rejects_transient_department() {
    let department = Rc::new(Department::new("not saved yet"));
    let seller = Seller::new(
        "Bob",
        "bob@example.com",
        birth_date(),
        salary("3000.00"),
        department,
    );

    assert_eq!(
        seller.validate(),
        Err(ValidationError::TransientDepartment)
    );
}

#[test]
fn base_salary_keeps_decimal_exactness() {
    // 0.1 + 0.2 style drift must not appear in salary arithmetic.
    let a = salary("1000.10");
    let b = salary("2000.20");

    assert_eq!(a + b, salary("3000.30"));
}
