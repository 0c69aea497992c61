//! Role service - role management for the application platform
//!
//! This is a Domain-Driven Design (DDD) implementation of a CRUD role
//! service: parameter objects come in, persistence objects are stored
//! through a repository port, and view objects go out wrapped in a
//! result envelope.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interface;

// Re-export commonly used types
pub use application::{RoleError, RoleResult, RoleService};
pub use domain::shared::error::DomainError;
pub use domain::shared::result::Result;
