//! Seller use-case service.

use crate::model::seller::Seller;
use crate::repo::seller_repo::SellerRepository;
use crate::repo::{RepoError, RepoResult};

/// Use-case service wrapper for seller CRUD operations.
pub struct SellerService<R: SellerRepository> {
    repo: R,
}

impl<R: SellerRepository> SellerService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Lists all sellers ordered by name, with department projections.
    pub fn find_all(&self) -> RepoResult<Vec<Seller>> {
        self.repo.find_all()
    }

    /// Persists a seller: inserts when it has no id, updates otherwise.
    ///
    /// # Contract
    /// - A successful insert leaves the generated id on the entity.
    /// - The seller's department must already be persisted.
    pub fn save_or_update(&self, seller: &mut Seller) -> RepoResult<()> {
        match seller.id {
            None => self.repo.insert(seller).map(|_| ()),
            Some(_) => self.repo.update(seller),
        }
    }

    /// Removes a persisted seller by its id.
    pub fn remove(&self, seller: &Seller) -> RepoResult<()> {
        let id = seller.id.ok_or(RepoError::MissingId("seller"))?;
        self.repo.delete_by_id(id)
    }
}
