//! Application layer - Use cases and application services
//!
//! This layer orchestrates domain objects to fulfill use cases.
//! It's responsible for:
//! - Validating caller parameters
//! - Converting between persistence objects and view objects
//! - Wrapping outcomes in the result envelope

pub mod error;
pub mod message;
pub mod result;
pub mod role;

pub use error::{RoleError, RoleResult};
pub use result::{ResultStatus, ResultVO};
pub use role::{RoleService, RoleVO, RolesVO};
