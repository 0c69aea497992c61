//! Role application service

use std::sync::Arc;

use tracing::{debug, info, warn};

use super::view::{role_from_param, RoleVO, RolesVO};
use crate::application::error::{RoleError, RoleResult};
use crate::application::message::{self, ROLE};
use crate::application::result::ResultVO;
use crate::domain::role::{Role, RoleParam, RoleRepository, MAX_NAME_LEN};
use crate::domain::DomainError;

/// Role management service
///
/// Validates caller parameters, delegates storage to the injected
/// [`RoleRepository`] and returns roles as view objects wrapped in a
/// [`ResultVO`].
#[derive(Clone)]
pub struct RoleService {
    repository: Arc<dyn RoleRepository>,
}

impl RoleService {
    pub fn new(repository: Arc<dyn RoleRepository>) -> Self {
        Self { repository }
    }

    /// Create a new role.
    ///
    /// Fails with [`RoleError::DuplicateName`] when the name is taken, in
    /// which case nothing is written.
    pub async fn create(&self, param: RoleParam) -> RoleResult<ResultVO<RoleVO>> {
        let name = required_name(&param)?;

        if self.repository.find_by_name(name).await?.is_some() {
            warn!("Role name already taken: {}", name);
            return Err(RoleError::DuplicateName(name.to_string()));
        }

        let role = self.repository.save(role_from_param(&param, name)).await?;
        info!("Created role {} (ID: {:?})", role.name, role.id);

        Ok(role_to_result(role, &message::success(message::CREATE, ROLE)))
    }

    /// Show all roles.
    ///
    /// Only a missing collection is an error, an empty store yields an empty list.
    pub async fn get_all_roles(&self) -> RoleResult<ResultVO<RolesVO>> {
        let roles = self
            .repository
            .find_all()
            .await?
            .ok_or(RoleError::NoRolesFound)?;
        debug!("Listing {} roles", roles.len());

        Ok(roles_to_result(roles, &message::success(message::INDEX, ROLE)))
    }

    /// Show a role by ID
    pub async fn get_role_by_id(&self, param: RoleParam) -> RoleResult<ResultVO<RoleVO>> {
        let id = required_id(&param)?;
        let role = self.find_existing(id).await?;

        Ok(role_to_result(role, &message::success(message::SHOW, ROLE)))
    }

    /// Update name and/or description of an existing role.
    ///
    /// Fields left `None` keep their stored value. Renaming onto a name held
    /// by another role fails with [`RoleError::DuplicateName`].
    pub async fn update(&self, param: RoleParam) -> RoleResult<ResultVO<RoleVO>> {
        let id = required_id(&param)?;
        let mut role = self.find_existing(id).await?;

        if param.name.is_some() {
            let name = required_name(&param)?;
            if name != role.name {
                if let Some(holder) = self.repository.find_by_name(name).await? {
                    if holder.id != Some(id) {
                        warn!("Cannot rename role {} to {}: name taken", id, name);
                        return Err(RoleError::DuplicateName(name.to_string()));
                    }
                }
                role.name = name.to_string();
            }
        }
        if let Some(description) = param.description {
            role.description = Some(description);
        }

        let role = self
            .repository
            .save(role)
            .await
            .map_err(|e| gone_as_not_found(e, id))?;
        info!("Updated role {} (ID: {})", role.name, id);

        Ok(role_to_result(role, &message::success(message::UPDATE, ROLE)))
    }

    /// Hard-delete an existing role
    pub async fn delete(&self, param: RoleParam) -> RoleResult<()> {
        let id = required_id(&param)?;
        let role = self.find_existing(id).await?;

        self.repository
            .delete(id)
            .await
            .map_err(|e| gone_as_not_found(e, id))?;
        info!("Deleted role {} (ID: {})", role.name, id);

        Ok(())
    }

    async fn find_existing(&self, id: i64) -> RoleResult<Role> {
        self.repository
            .find_one(id)
            .await?
            .ok_or(RoleError::RoleNotFound(id))
    }
}

fn required_id(param: &RoleParam) -> RoleResult<i64> {
    param
        .id
        .ok_or_else(|| RoleError::InvalidParam("id is required".to_string()))
}

fn required_name(param: &RoleParam) -> RoleResult<&str> {
    let name = param
        .trimmed_name()
        .ok_or_else(|| RoleError::InvalidParam("name must not be blank".to_string()))?;
    if name.chars().count() > MAX_NAME_LEN {
        return Err(RoleError::InvalidParam(format!(
            "name must be at most {} characters",
            MAX_NAME_LEN
        )));
    }
    Ok(name)
}

/// A role removed between lookup and write is reported as not found
fn gone_as_not_found(err: DomainError, id: i64) -> RoleError {
    match err {
        DomainError::NotFound(_) => RoleError::RoleNotFound(id),
        other => other.into(),
    }
}

/// Convert a role to its view wrapped in a success envelope; a blank `msg` is not attached
fn role_to_result(role: Role, msg: &str) -> ResultVO<RoleVO> {
    let mut vo = RoleVO::from(role);
    if !msg.trim().is_empty() {
        vo.message = Some(msg.to_string());
    }
    ResultVO::success(vo)
}

fn roles_to_result(roles: Vec<Role>, msg: &str) -> ResultVO<RolesVO> {
    let mut vos: RolesVO = roles.into_iter().collect();
    if !msg.trim().is_empty() {
        vos.message = Some(msg.to_string());
    }
    ResultVO::success(vos)
}
