//! Role repository interface

use async_trait::async_trait;

use super::entity::Role;
use crate::domain::shared::error::Result;

/// Repository for role persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RoleRepository: Send + Sync {
    /// Find role by its unique name
    async fn find_by_name(&self, name: &str) -> Result<Option<Role>>;

    /// List all roles, `None` when the store has no collection to offer
    async fn find_all(&self) -> Result<Option<Vec<Role>>>;

    /// Find role by ID
    async fn find_one(&self, id: i64) -> Result<Option<Role>>;

    /// Insert the role when it has no ID, replace the stored record otherwise
    async fn save(&self, role: Role) -> Result<Role>;

    /// Delete role by ID
    async fn delete(&self, id: i64) -> Result<()>;
}
