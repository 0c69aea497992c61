//! API interface implementations

pub mod metrics_handler;
pub mod role_handler;
pub mod router;

pub use metrics_handler::{init_metrics, record_role_operation};
pub use role_handler::{ApiError, AppState};
pub use router::build_router;
