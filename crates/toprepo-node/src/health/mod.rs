//! # Health Check Module
//!
//! Liveness endpoint for orchestrators: `/livez` answers 200 with an empty
//! body for every method as long as the process is serving requests.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use axum::Router;
//! use toprepo_node::health::health_routes;
//!
//! let app: Router<()> = Router::new().merge(health_routes());
//! ```

use axum::{http::StatusCode, routing::any, Router};

/// Create health check routes.
pub fn health_routes<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/livez", any(liveness))
}

/// Liveness handler.
async fn liveness() -> StatusCode {
    StatusCode::OK
}
