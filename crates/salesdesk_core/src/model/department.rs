//! Department domain record.
//!
//! # Invariants
//! - `id` is `None` until the row is inserted, `Some` forever after.
//! - The persisted id is assigned by the database and never reused.

use super::ValidationError;
use serde::{Deserialize, Serialize};

/// Database-generated department key.
pub type DepartmentId = i64;

/// Organizational unit sellers belong to.
///
/// When hydrated through a seller join this is a minimal projection
/// (id + name) copied out of the row, not a live link into any cache.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    /// `None` for a transient (not yet inserted) department.
    pub id: Option<DepartmentId>,
    pub name: String,
}

impl Department {
    /// Creates a transient department awaiting insertion.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
        }
    }

    /// Reconstructs a department from a persisted row.
    pub fn with_id(id: DepartmentId, name: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            name: name.into(),
        }
    }

    /// Returns whether this department has been assigned a database id.
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    /// Checks write-path invariants before any SQL mutation.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyDepartmentName);
        }
        Ok(())
    }
}
