//! Seller repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide CRUD APIs over the `seller` table.
//! - Hydrate sellers together with their department projection through an
//!   inner join.
//!
//! # Invariants
//! - Write paths call `Seller::validate()` before SQL mutations; a seller
//!   is never inserted ahead of its department.
//! - `find_all` allocates exactly one `Department` per distinct
//!   department id in the result set; sellers sharing a department share
//!   the same `Rc` instance.
//! - List ordering is deterministic: `seller.Name ASC`.

use crate::model::department::{Department, DepartmentId};
use crate::model::seller::{Seller, SellerId};
use crate::repo::{RepoError, RepoResult};
use rusqlite::{params, Connection, Row};
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::rc::Rc;
use std::str::FromStr;

const SELLER_SELECT_SQL: &str = "SELECT
    seller.Id,
    seller.Name,
    seller.Email,
    seller.BirthDate,
    seller.BaseSalary,
    seller.DepartmentId,
    department.Name AS DepartmentName
FROM seller
INNER JOIN department ON department.Id = seller.DepartmentId";

/// Repository interface for seller CRUD and hydration operations.
pub trait SellerRepository {
    /// Inserts a transient seller, assigning its generated id.
    fn insert(&self, seller: &mut Seller) -> RepoResult<SellerId>;
    /// Full-row update by id. Last writer wins.
    fn update(&self, seller: &Seller) -> RepoResult<()>;
    /// Deletes one seller unconditionally; sellers are leaf rows.
    fn delete_by_id(&self, id: SellerId) -> RepoResult<()>;
    /// Loads one seller with its department projection.
    fn find_by_id(&self, id: SellerId) -> RepoResult<Option<Seller>>;
    /// Lists all sellers ordered by name, departments deduplicated.
    fn find_all(&self) -> RepoResult<Vec<Seller>>;
    /// Lists sellers of one department ordered by name.
    fn find_by_department(&self, department: &Department) -> RepoResult<Vec<Seller>>;
}

/// SQLite-backed seller repository.
pub struct SqliteSellerRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteSellerRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl SellerRepository for SqliteSellerRepository<'_> {
    fn insert(&self, seller: &mut Seller) -> RepoResult<SellerId> {
        seller.validate()?;

        let changed = self.conn.execute(
            "INSERT INTO seller (Name, Email, BirthDate, BaseSalary, DepartmentId)
             VALUES (?1, ?2, ?3, ?4, ?5);",
            params![
                seller.name,
                seller.email,
                seller.birth_date,
                seller.base_salary.to_string(),
                seller.department.id,
            ],
        )?;
        if changed == 0 {
            return Err(RepoError::NoRowsAffected);
        }

        let id = self.conn.last_insert_rowid();
        seller.id = Some(id);
        Ok(id)
    }

    fn update(&self, seller: &Seller) -> RepoResult<()> {
        seller.validate()?;
        let id = seller.id.ok_or(RepoError::MissingId("seller"))?;

        let changed = self.conn.execute(
            "UPDATE seller
             SET
                Name = ?1,
                Email = ?2,
                BirthDate = ?3,
                BaseSalary = ?4,
                DepartmentId = ?5
             WHERE Id = ?6;",
            params![
                seller.name,
                seller.email,
                seller.birth_date,
                seller.base_salary.to_string(),
                seller.department.id,
                id,
            ],
        )?;
        if changed == 0 {
            return Err(RepoError::NotFound {
                entity: "seller",
                id,
            });
        }

        Ok(())
    }

    fn delete_by_id(&self, id: SellerId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM seller WHERE Id = ?1;", params![id])?;
        if changed == 0 {
            return Err(RepoError::NotFound {
                entity: "seller",
                id,
            });
        }

        Ok(())
    }

    fn find_by_id(&self, id: SellerId) -> RepoResult<Option<Seller>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{SELLER_SELECT_SQL} WHERE seller.Id = ?1;"))?;

        let mut rows = stmt.query(params![id])?;
        if let Some(row) = rows.next()? {
            let department = Rc::new(parse_department_projection(row)?);
            return Ok(Some(parse_seller_row(row, department)?));
        }

        Ok(None)
    }

    fn find_all(&self) -> RepoResult<Vec<Seller>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{SELLER_SELECT_SQL} ORDER BY seller.Name ASC;"))?;

        let mut rows = stmt.query([])?;
        let mut sellers = Vec::new();
        // One projection per distinct department id, shared by Rc among
        // every seller row that references it.
        let mut departments: HashMap<DepartmentId, Rc<Department>> = HashMap::new();

        while let Some(row) = rows.next()? {
            let department_id: DepartmentId = row.get("DepartmentId")?;
            let department = match departments.get(&department_id) {
                Some(shared) => Rc::clone(shared),
                None => {
                    let created = Rc::new(parse_department_projection(row)?);
                    departments.insert(department_id, Rc::clone(&created));
                    created
                }
            };
            sellers.push(parse_seller_row(row, department)?);
        }

        Ok(sellers)
    }

    fn find_by_department(&self, department: &Department) -> RepoResult<Vec<Seller>> {
        let id = department.id.ok_or(RepoError::MissingId("department"))?;

        let mut stmt = self.conn.prepare(&format!(
            "{SELLER_SELECT_SQL}
             WHERE seller.DepartmentId = ?1
             ORDER BY seller.Name ASC;"
        ))?;

        let mut rows = stmt.query(params![id])?;
        let mut sellers = Vec::new();
        // All rows share the one requested department; instantiate the
        // projection once from the first row and reuse it.
        let mut shared: Option<Rc<Department>> = None;

        while let Some(row) = rows.next()? {
            let department = match &shared {
                Some(existing) => Rc::clone(existing),
                None => {
                    let created = Rc::new(parse_department_projection(row)?);
                    shared = Some(Rc::clone(&created));
                    created
                }
            };
            sellers.push(parse_seller_row(row, department)?);
        }

        Ok(sellers)
    }
}

fn parse_department_projection(row: &Row<'_>) -> RepoResult<Department> {
    Ok(Department::with_id(
        row.get("DepartmentId")?,
        row.get::<_, String>("DepartmentName")?,
    ))
}

fn parse_seller_row(row: &Row<'_>, department: Rc<Department>) -> RepoResult<Seller> {
    let salary_text: String = row.get("BaseSalary")?;
    let base_salary = Decimal::from_str(&salary_text).map_err(|_| {
        RepoError::InvalidData(format!(
            "invalid decimal value `{salary_text}` in seller.BaseSalary"
        ))
    })?;

    Ok(Seller::with_id(
        row.get("Id")?,
        row.get::<_, String>("Name")?,
        row.get::<_, String>("Email")?,
        row.get("BirthDate")?,
        base_salary,
        department,
    ))
}
