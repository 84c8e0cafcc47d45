//! Prometheus metrics
//!
//! The recorder is process-global; install it once from the binary and hand
//! the render handle to `AppState`.

use std::time::Duration;

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

use crate::state::AppState;

pub const CONVERSIONS_TOTAL: &str = "numconv_conversions_total";
pub const CONVERSION_DURATION: &str = "numconv_conversion_duration_seconds";

/// Install the Prometheus recorder
///
/// Returns `None` (and logs a warning) when a recorder is already installed.
pub fn init_metrics() -> Option<PrometheusHandle> {
    match PrometheusBuilder::new().install_recorder() {
        Ok(handle) => {
            metrics::describe_counter!(
                CONVERSIONS_TOTAL,
                "Conversions attempted, labelled by outcome"
            );
            metrics::describe_histogram!(
                CONVERSION_DURATION,
                metrics::Unit::Seconds,
                "Time spent parsing and formatting one input"
            );
            Some(handle)
        },
        Err(e) => {
            tracing::warn!("Failed to install Prometheus recorder: {} (continuing without metrics)", e);
            None
        },
    }
}

/// Record one conversion; `outcome` is "success" or a failure reason
pub fn record_conversion(outcome: &'static str, elapsed: Duration) {
    metrics::counter!(CONVERSIONS_TOTAL, "outcome" => outcome).increment(1);
    metrics::histogram!(CONVERSION_DURATION).record(elapsed.as_secs_f64());
}

/// GET /metrics
pub async fn metrics_handler(State(state): State<AppState>) -> impl IntoResponse {
    match &state.metrics {
        Some(handle) => (StatusCode::OK, handle.render()),
        None => (
            StatusCode::SERVICE_UNAVAILABLE,
            "metrics are disabled".to_string(),
        ),
    }
}
