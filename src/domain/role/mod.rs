//! Role domain

pub mod entity;
pub mod repository;

pub use entity::{Role, RoleParam, MAX_NAME_LEN};
pub use repository::RoleRepository;
