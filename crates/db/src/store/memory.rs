use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use warden_core::types::DbId;

use super::{RoleStore, StoreError};
use crate::models::role::Role;

#[derive(Debug)]
struct Inner {
    rows: BTreeMap<DbId, Role>,
    next_id: DbId,
}

/// In-memory [`RoleStore`].
///
/// Ids start at 1 and are never reused, mirroring a `BIGSERIAL` column.
#[derive(Debug)]
pub struct MemoryRoleStore {
    inner: RwLock<Inner>,
}

impl MemoryRoleStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                rows: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }

    /// Number of stored roles.
    pub async fn len(&self) -> usize {
        self.inner.read().await.rows.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl Default for MemoryRoleStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RoleStore for MemoryRoleStore {
    async fn list_all(&self) -> Result<Vec<Role>, StoreError> {
        Ok(self.inner.read().await.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: DbId) -> Result<Role, StoreError> {
        self.inner
            .read()
            .await
            .rows
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound { id })
    }

    async fn insert(&self, name: &str) -> Result<Role, StoreError> {
        let mut inner = self.inner.write().await;
        let id = inner.next_id;
        inner.next_id += 1;

        let now = chrono::Utc::now();
        let role = Role {
            id,
            name: name.to_string(),
            created_at: now,
            updated_at: now,
        };
        inner.rows.insert(id, role.clone());
        Ok(role)
    }

    async fn update(&self, id: DbId, name: Option<&str>) -> Result<Role, StoreError> {
        let mut inner = self.inner.write().await;
        let role = inner.rows.get_mut(&id).ok_or(StoreError::NotFound { id })?;
        if let Some(name) = name {
            role.name = name.to_string();
        }
        role.updated_at = chrono::Utc::now();
        Ok(role.clone())
    }

    async fn delete(&self, id: DbId) -> Result<Role, StoreError> {
        self.inner
            .write()
            .await
            .rows
            .remove(&id)
            .ok_or(StoreError::NotFound { id })
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
