//! Role view objects

use serde::{Deserialize, Serialize};

use crate::domain::role::{Role, RoleParam};

/// Single role view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleVO {
    pub id: Option<i64>,
    pub name: String,
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Role list view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RolesVO {
    pub roles: Vec<RoleVO>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl From<Role> for RoleVO {
    fn from(role: Role) -> Self {
        Self {
            id: role.id,
            name: role.name,
            description: role.description,
            message: None,
        }
    }
}

impl FromIterator<Role> for RolesVO {
    fn from_iter<I: IntoIterator<Item = Role>>(roles: I) -> Self {
        Self {
            roles: roles.into_iter().map(RoleVO::from).collect(),
            message: None,
        }
    }
}

/// Build an unsaved role from caller parameters.
///
/// The caller's ID is dropped, the store assigns identities.
pub fn role_from_param(param: &RoleParam, name: &str) -> Role {
    Role {
        id: None,
        name: name.to_string(),
        description: param.description.clone(),
    }
}
