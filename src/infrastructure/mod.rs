//! Infrastructure layer - Technical implementations
//!
//! This layer contains the repository implementations.

pub mod persistence;
