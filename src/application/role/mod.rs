//! Role use cases

pub mod service;
pub mod view;

pub use service::RoleService;
pub use view::{RoleVO, RolesVO};
