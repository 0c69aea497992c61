//! Interface layer - External interfaces
//!
//! This layer handles:
//! - REST API endpoints for role management
//! - Health and Prometheus metrics endpoints
//! - Request/response formatting

pub mod api;
