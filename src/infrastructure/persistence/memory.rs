//! In-memory role repository

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::role::{Role, RoleRepository};
use crate::domain::shared::error::{DomainError, Result};

#[derive(Default)]
struct Store {
    roles: BTreeMap<i64, Role>,
    next_id: i64,
}

/// Role repository backed by a map, used when no database is configured
#[derive(Clone, Default)]
pub struct InMemoryRoleRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryRoleRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored roles
    pub async fn len(&self) -> usize {
        self.store.read().await.roles.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl RoleRepository for InMemoryRoleRepository {
    async fn find_by_name(&self, name: &str) -> Result<Option<Role>> {
        let store = self.store.read().await;
        Ok(store.roles.values().find(|r| r.name == name).cloned())
    }

    async fn find_all(&self) -> Result<Option<Vec<Role>>> {
        let store = self.store.read().await;
        Ok(Some(store.roles.values().cloned().collect()))
    }

    async fn find_one(&self, id: i64) -> Result<Option<Role>> {
        let store = self.store.read().await;
        Ok(store.roles.get(&id).cloned())
    }

    async fn save(&self, mut role: Role) -> Result<Role> {
        let mut store = self.store.write().await;

        // Name uniqueness is checked under the write lock
        let taken = store
            .roles
            .values()
            .any(|r| r.name == role.name && r.id != role.id);
        if taken {
            return Err(DomainError::AlreadyExists(role.name));
        }

        let id = match role.id {
            Some(id) if store.roles.contains_key(&id) => id,
            Some(id) => return Err(DomainError::NotFound(format!("role {}", id))),
            None => {
                store.next_id += 1;
                store.next_id
            }
        };
        role.id = Some(id);
        store.roles.insert(id, role.clone());
        debug!("Saved role {} (ID: {})", role.name, id);

        Ok(role)
    }

    async fn delete(&self, id: i64) -> Result<()> {
        let mut store = self.store.write().await;
        if store.roles.remove(&id).is_none() {
            return Err(DomainError::NotFound(format!("role {}", id)));
        }
        debug!("Deleted role ID: {}", id);

        Ok(())
    }
}
