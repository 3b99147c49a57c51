use async_trait::async_trait;
use warden_core::types::DbId;

use super::{RoleStore, StoreError};
use crate::models::role::Role;
use crate::repositories::RoleRepo;
use crate::DbPool;

/// [`RoleStore`] over a PostgreSQL pool.
#[derive(Debug, Clone)]
pub struct PgRoleStore {
    pool: DbPool,
}

impl PgRoleStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RoleStore for PgRoleStore {
    async fn list_all(&self) -> Result<Vec<Role>, StoreError> {
        Ok(RoleRepo::list(&self.pool).await?)
    }

    async fn find_by_id(&self, id: DbId) -> Result<Role, StoreError> {
        RoleRepo::find_by_id(&self.pool, id)
            .await?
            .ok_or(StoreError::NotFound { id })
    }

    async fn insert(&self, name: &str) -> Result<Role, StoreError> {
        Ok(RoleRepo::create(&self.pool, name).await?)
    }

    async fn update(&self, id: DbId, name: Option<&str>) -> Result<Role, StoreError> {
        RoleRepo::update(&self.pool, id, name)
            .await?
            .ok_or(StoreError::NotFound { id })
    }

    async fn delete(&self, id: DbId) -> Result<Role, StoreError> {
        RoleRepo::delete(&self.pool, id)
            .await?
            .ok_or(StoreError::NotFound { id })
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(crate::health_check(&self.pool).await?)
    }
}
