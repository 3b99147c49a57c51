//! The [`RoleStore`] seam between the service layer and persistence.
//!
//! - [`PgRoleStore`] -- PostgreSQL, backed by [`crate::repositories::RoleRepo`].
//! - [`MemoryRoleStore`] -- process-local map for tests and local runs.

mod memory;
mod postgres;

use async_trait::async_trait;
use warden_core::types::DbId;

use crate::models::role::Role;

pub use memory::MemoryRoleStore;
pub use postgres::PgRoleStore;

/// Errors surfaced by a [`RoleStore`].
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Role with id {id} not found")]
    NotFound { id: DbId },

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Single-table persistence for roles.
///
/// Every method touches at most one row, so implementations only need
/// single-statement atomicity.
#[async_trait]
pub trait RoleStore: Send + Sync {
    /// All roles, ordered by id ascending.
    async fn list_all(&self) -> Result<Vec<Role>, StoreError>;

    async fn find_by_id(&self, id: DbId) -> Result<Role, StoreError>;

    /// Persist a new role under a freshly assigned id.
    async fn insert(&self, name: &str) -> Result<Role, StoreError>;

    /// Replace the name when `name` is `Some`, bump `updated_at`, and return
    /// the stored row.
    async fn update(&self, id: DbId, name: Option<&str>) -> Result<Role, StoreError>;

    /// Remove the row and return it as it was just before removal.
    async fn delete(&self, id: DbId) -> Result<Role, StoreError>;

    /// Cheap reachability probe for health checks.
    async fn ping(&self) -> Result<(), StoreError>;
}
