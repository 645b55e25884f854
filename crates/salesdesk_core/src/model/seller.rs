//! Seller domain record.
//!
//! # Invariants
//! - `id` is `None` until the row is inserted, `Some` forever after.
//! - `department` is an immutable projection shared by reference among
//!   sellers hydrated from the same result set; it is never mutated after
//!   construction.

use super::department::Department;
use super::ValidationError;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::rc::Rc;

/// Database-generated seller key.
pub type SellerId = i64;

/// Sales employee assigned to exactly one department.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seller {
    /// `None` for a transient (not yet inserted) seller.
    pub id: Option<SellerId>,
    pub name: String,
    pub email: String,
    pub birth_date: NaiveDate,
    /// Exact decimal; never stored or compared as a binary float.
    pub base_salary: Decimal,
    /// Shared immutable department projection (id + name).
    pub department: Rc<Department>,
}

impl Seller {
    /// Creates a transient seller awaiting insertion.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        birth_date: NaiveDate,
        base_salary: Decimal,
        department: Rc<Department>,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            email: email.into(),
            birth_date,
            base_salary,
            department,
        }
    }

    /// Reconstructs a seller from a persisted row.
    pub fn with_id(
        id: SellerId,
        name: impl Into<String>,
        email: impl Into<String>,
        birth_date: NaiveDate,
        base_salary: Decimal,
        department: Rc<Department>,
    ) -> Self {
        Self {
            id: Some(id),
            ..Self::new(name, email, birth_date, base_salary, department)
        }
    }

    /// Returns whether this seller has been assigned a database id.
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    /// Checks write-path invariants before any SQL mutation.
    ///
    /// # Contract
    /// - The referenced department must already be persisted; repositories
    ///   never cascade-insert a transient department.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptySellerName);
        }
        if self.email.trim().is_empty() {
            return Err(ValidationError::EmptySellerEmail);
        }
        if !self.department.is_persisted() {
            return Err(ValidationError::TransientDepartment);
        }
        Ok(())
    }
}
