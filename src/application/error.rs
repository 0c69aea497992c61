//! Application errors with stable error codes

use thiserror::Error;

use crate::domain::DomainError;

/// Role service result type
pub type RoleResult<T> = std::result::Result<T, RoleError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RoleError {
    #[error("Invalid role parameter: {0}")]
    InvalidParam(String),

    #[error("No role yet")]
    NoRolesFound,

    #[error("Role not found: {0}")]
    RoleNotFound(i64),

    #[error("Role already exists, name taken: {0}")]
    DuplicateName(String),

    #[error("Repository error: {0}")]
    Repository(DomainError),
}

impl RoleError {
    /// Error code reported to clients
    pub fn code(&self) -> &'static str {
        match self {
            RoleError::InvalidParam(_) => "ROL0001",
            RoleError::NoRolesFound => "ROL0011",
            RoleError::RoleNotFound(_) => "ROL0012",
            RoleError::DuplicateName(_) => "ROL0031",
            RoleError::Repository(_) => "SYS0001",
        }
    }
}

impl From<DomainError> for RoleError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::AlreadyExists(name) => RoleError::DuplicateName(name),
            other => RoleError::Repository(other),
        }
    }
}
