//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts for departments and
//!   sellers.
//! - Isolate SQL query details from service/business orchestration.
//!
//! # Invariants
//! - Repository writes must enforce entity `validate()` before persistence.
//! - Repository APIs return semantic errors (`NotFound`, `HasDependents`)
//!   in addition to DB transport errors.
//! - Plural queries always return a (possibly empty) `Vec`, never an
//!   absent value.

use crate::db::DbError;
use crate::model::department::DepartmentId;
use crate::model::ValidationError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod department_repo;
pub mod seller_repo;

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic repository error for persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    /// Entity failed write-path validation.
    Validation(ValidationError),
    /// Underlying SQLite/bootstrap error.
    Db(DbError),
    /// A write targeted an entity that was never persisted (no id).
    MissingId(&'static str),
    /// A write by id matched no row.
    NotFound { entity: &'static str, id: i64 },
    /// An insert reported zero affected rows; the engine broke its own
    /// generated-key contract.
    NoRowsAffected,
    /// Department delete blocked by sellers still referencing it.
    HasDependents(DepartmentId),
    /// Persisted data cannot be converted to a valid entity.
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::MissingId(entity) => {
                write!(f, "{entity} has no id; it was never persisted")
            }
            Self::NotFound { entity, id } => write!(f, "{entity} not found: {id}"),
            Self::NoRowsAffected => write!(f, "insert affected no rows"),
            Self::HasDependents(id) => write!(
                f,
                "department {id} still has sellers assigned and cannot be deleted"
            ),
            Self::InvalidData(message) => write!(f, "invalid persisted data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::MissingId(_) => None,
            Self::NotFound { .. } => None,
            Self::NoRowsAffected => None,
            Self::HasDependents(_) => None,
            Self::InvalidData(_) => None,
        }
    }
}

impl From<ValidationError> for RepoError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}
