//! Domain entities for the sales management core.
//!
//! # Responsibility
//! - Define the canonical `Department` and `Seller` records.
//! - Provide write-path validation shared by every repository.
//!
//! # Invariants
//! - A persisted entity's `id` is immutable and unique.
//! - A `Seller` always points at a department projection; persistence
//!   additionally requires that projection to carry an id.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod department;
pub mod seller;

/// Write-path validation failure for domain entities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Department name is empty or whitespace-only.
    EmptyDepartmentName,
    /// Seller name is empty or whitespace-only.
    EmptySellerName,
    /// Seller email is empty or whitespace-only.
    EmptySellerEmail,
    /// Seller references a department that was never persisted (no id).
    TransientDepartment,
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyDepartmentName => write!(f, "department name must not be empty"),
            Self::EmptySellerName => write!(f, "seller name must not be empty"),
            Self::EmptySellerEmail => write!(f, "seller email must not be empty"),
            Self::TransientDepartment => {
                write!(f, "seller department must be persisted before the seller")
            }
        }
    }
}

impl Error for ValidationError {}
