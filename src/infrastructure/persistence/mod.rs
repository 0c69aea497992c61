//! Persistence implementations

pub mod memory;
#[cfg(feature = "postgres")]
pub mod database;
#[cfg(feature = "postgres")]
pub mod role_repository;

pub use memory::InMemoryRoleRepository;
#[cfg(feature = "postgres")]
pub use database::{create_pool, mask_password, run_migrations};
#[cfg(feature = "postgres")]
pub use role_repository::PgRoleRepository;
