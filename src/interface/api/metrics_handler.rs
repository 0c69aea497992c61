//! Prometheus metrics handler

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use metrics::{counter, describe_counter};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle};

pub const ROLE_OPERATIONS_TOTAL: &str = "role_operations_total";

/// Install the global Prometheus recorder
pub fn init_metrics() -> Result<PrometheusHandle, BuildError> {
    let handle = PrometheusBuilder::new().install_recorder()?;

    describe_counter!(
        ROLE_OPERATIONS_TOTAL,
        "Total number of role operations by operation and outcome"
    );

    Ok(handle)
}

/// HTTP metrics handler
pub async fn metrics_handler(State(prometheus_handle): State<PrometheusHandle>) -> Response {
    (StatusCode::OK, prometheus_handle.render()).into_response()
}

/// Record a role operation with its outcome (`success` or an error code)
pub fn record_role_operation(operation: &'static str, outcome: &str) {
    counter!(
        ROLE_OPERATIONS_TOTAL,
        "operation" => operation,
        "outcome" => outcome.to_string()
    )
    .increment(1);
}
