//! Department use-case service.

use crate::model::department::Department;
use crate::repo::department_repo::DepartmentRepository;
use crate::repo::{RepoError, RepoResult};

/// Use-case service wrapper for department CRUD operations.
pub struct DepartmentService<R: DepartmentRepository> {
    repo: R,
}

impl<R: DepartmentRepository> DepartmentService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Lists all departments ordered by name.
    pub fn find_all(&self) -> RepoResult<Vec<Department>> {
        self.repo.find_all()
    }

    /// Persists a department: inserts when it has no id, updates otherwise.
    ///
    /// # Contract
    /// - A successful insert leaves the generated id on the entity.
    pub fn save_or_update(&self, department: &mut Department) -> RepoResult<()> {
        match department.id {
            None => self.repo.insert(department).map(|_| ()),
            Some(_) => self.repo.update(department),
        }
    }

    /// Removes a persisted department by its id.
    ///
    /// Propagates `RepoError::HasDependents` when sellers still reference
    /// the department.
    pub fn remove(&self, department: &Department) -> RepoResult<()> {
        let id = department.id.ok_or(RepoError::MissingId("department"))?;
        self.repo.delete_by_id(id)
    }
}
