//! # Observability Module
//!
//! - **Structured Logging**: pretty or JSON output through `tracing`
//! - **Prometheus Metrics**: per-handler request counters and the per-user
//!   result gauge, scraped from `/metrics`
//!
//! ## Usage
//!
//! ```rust,ignore
//! use toprepo_node::observability::{init_logging, LogFormat, MetricsState};
//!
//! init_logging("info", LogFormat::Json);
//! let metrics = MetricsState::new();
//! ```

mod logging;
mod metrics;

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use std::sync::Arc;

pub use logging::{init_logging, LogFormat};
pub use metrics::{MetricsState, UserLabels};

/// Content type of the Prometheus text exposition format.
pub const METRICS_CONTENT_TYPE: &str = "text/plain; version=0.0.4; charset=utf-8";

/// `GET /metrics` handler.
pub async fn metrics_handler(State(metrics): State<Arc<MetricsState>>) -> Response {
    match metrics.encode() {
        Ok(body) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, METRICS_CONTENT_TYPE)],
            body,
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to encode metrics");
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to encode metrics").into_response()
        }
    }
}
