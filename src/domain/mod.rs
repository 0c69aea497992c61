//! Domain layer - Core business types and rules
//!
//! This layer contains:
//! - Entities: the role persistence object
//! - Parameter objects accepted by application services
//! - Repository Interfaces: Ports for persistence

pub mod role;
pub mod shared;

// Re-export commonly used types
pub use shared::{DomainError, Result};
