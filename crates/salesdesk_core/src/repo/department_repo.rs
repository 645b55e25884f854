//! Department repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over the `department` table.
//! - Keep SQL details inside the persistence boundary.
//!
//! # Invariants
//! - Write paths call `Department::validate()` before SQL mutations.
//! - A department referenced by sellers cannot be deleted; the foreign-key
//!   rejection surfaces as `RepoError::HasDependents`, not a raw engine
//!   error.
//! - `find_all` ordering is deterministic: `Name ASC`.

use crate::model::department::{Department, DepartmentId};
use crate::repo::{RepoError, RepoResult};
use rusqlite::{params, Connection, Row};

/// Repository interface for department CRUD operations.
pub trait DepartmentRepository {
    /// Inserts a transient department, assigning its generated id.
    fn insert(&self, department: &mut Department) -> RepoResult<DepartmentId>;
    /// Full-row update by id. Last writer wins.
    fn update(&self, department: &Department) -> RepoResult<()>;
    /// Deletes one department; fails if sellers still reference it.
    fn delete_by_id(&self, id: DepartmentId) -> RepoResult<()>;
    /// Loads one department by id.
    fn find_by_id(&self, id: DepartmentId) -> RepoResult<Option<Department>>;
    /// Lists all departments ordered by name.
    fn find_all(&self) -> RepoResult<Vec<Department>>;
}

/// SQLite-backed department repository.
pub struct SqliteDepartmentRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteDepartmentRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl DepartmentRepository for SqliteDepartmentRepository<'_> {
    fn insert(&self, department: &mut Department) -> RepoResult<DepartmentId> {
        department.validate()?;

        let changed = self.conn.execute(
            "INSERT INTO department (Name) VALUES (?1);",
            params![department.name],
        )?;
        if changed == 0 {
            return Err(RepoError::NoRowsAffected);
        }

        let id = self.conn.last_insert_rowid();
        department.id = Some(id);
        Ok(id)
    }

    fn update(&self, department: &Department) -> RepoResult<()> {
        department.validate()?;
        let id = department.id.ok_or(RepoError::MissingId("department"))?;

        let changed = self.conn.execute(
            "UPDATE department SET Name = ?1 WHERE Id = ?2;",
            params![department.name, id],
        )?;
        if changed == 0 {
            return Err(RepoError::NotFound {
                entity: "department",
                id,
            });
        }

        Ok(())
    }

    fn delete_by_id(&self, id: DepartmentId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM department WHERE Id = ?1;", params![id])
            .map_err(|err| {
                if is_foreign_key_violation(&err) {
                    RepoError::HasDependents(id)
                } else {
                    err.into()
                }
            })?;
        if changed == 0 {
            return Err(RepoError::NotFound {
                entity: "department",
                id,
            });
        }

        Ok(())
    }

    fn find_by_id(&self, id: DepartmentId) -> RepoResult<Option<Department>> {
        let mut stmt = self
            .conn
            .prepare("SELECT Id, Name FROM department WHERE Id = ?1;")?;

        let mut rows = stmt.query(params![id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_department_row(row)?));
        }

        Ok(None)
    }

    fn find_all(&self) -> RepoResult<Vec<Department>> {
        let mut stmt = self
            .conn
            .prepare("SELECT Id, Name FROM department ORDER BY Name ASC;")?;

        let mut rows = stmt.query([])?;
        let mut departments = Vec::new();
        while let Some(row) = rows.next()? {
            departments.push(parse_department_row(row)?);
        }

        Ok(departments)
    }
}

fn parse_department_row(row: &Row<'_>) -> RepoResult<Department> {
    Ok(Department::with_id(
        row.get("Id")?,
        row.get::<_, String>("Name")?,
    ))
}

/// Structural foreign-key detection on SQLite's extended result code.
///
/// `SQLITE_CONSTRAINT_FOREIGNKEY` covers immediate FK enforcement;
/// deferred enforcement at commit reports the plain constraint code with
/// a trigger subtype, which this schema never produces.
fn is_foreign_key_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(inner, _)
            if inner.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_FOREIGNKEY
    )
}
