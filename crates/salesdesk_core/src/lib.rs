//! Core domain logic for SalesDesk.
//! This crate is the single source of truth for persistence invariants;
//! UI layers only ever talk to the service types re-exported here.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use config::{AppConfig, ConfigError, DatabaseConfig, LoggingConfig};
pub use logging::{default_log_level, init_logging};
pub use model::department::{Department, DepartmentId};
pub use model::seller::{Seller, SellerId};
pub use model::ValidationError;
pub use repo::department_repo::{DepartmentRepository, SqliteDepartmentRepository};
pub use repo::seller_repo::{SellerRepository, SqliteSellerRepository};
pub use repo::{RepoError, RepoResult};
pub use service::department_service::DepartmentService;
pub use service::seller_service::SellerService;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
