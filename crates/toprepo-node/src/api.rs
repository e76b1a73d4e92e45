//! HTTP API for the toprepo node.
//!
//! Proxies repository searches to the upstream [`RepoSource`] and exposes
//! ping, liveness and metrics endpoints.

use axum::{
    extract::{FromRef, Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use serde::Serialize;
use std::sync::Arc;
use toprepo_github::RepoSource;
use tower_http::trace::TraceLayer;
use tracing::{debug, warn};

use crate::health::health_routes;
use crate::observability::{metrics_handler, MetricsState};
use crate::records::{to_records, ErrorResponse, PingResponse};

const JSON_CONTENT_TYPE: &str = "application/json";
const TEXT_CONTENT_TYPE: &str = "text/plain; charset=utf-8";

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Upstream provider, built once at startup.
    pub source: Arc<dyn RepoSource>,
    /// Metrics registry.
    pub metrics: Arc<MetricsState>,
}

impl AppState {
    /// Creates state around `source` with a fresh metrics registry.
    pub fn new(source: Arc<dyn RepoSource>) -> Self {
        Self {
            source,
            metrics: Arc::new(MetricsState::new()),
        }
    }
}

impl FromRef<AppState> for Arc<MetricsState> {
    fn from_ref(state: &AppState) -> Self {
        state.metrics.clone()
    }
}

/// API error type.
///
/// The display string is exactly what lands in the `error` field.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    BadGateway(String),
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadGateway(_) => StatusCode::BAD_GATEWAY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        error_response(self.status(), self.to_string())
    }
}

/// Serializes `value` as a JSON response with `status`.
///
/// Falls back to a plain-text 500 when serialization fails.
pub fn json_response<T: Serialize + ?Sized>(status: StatusCode, value: &T) -> Response {
    match serde_json::to_vec(value) {
        Ok(body) => (status, [(header::CONTENT_TYPE, JSON_CONTENT_TYPE)], body).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to serialize response");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                [(header::CONTENT_TYPE, TEXT_CONTENT_TYPE)],
                e.to_string(),
            )
                .into_response()
        }
    }
}

/// Writes `{"error": message}` with `status`.
pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    json_response(
        status,
        &ErrorResponse {
            error: message.into(),
        },
    )
}

/// Creates the API router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/top/{language}", get(top_language_repos))
        .route("/repos/{user}", get(user_repos))
        .route("/ping", get(ping))
        .route("/metrics", get(metrics_handler))
        .merge(health_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Top repositories for a free-text language query.
pub async fn top_language_repos(
    State(state): State<AppState>,
    Path(language): Path<String>,
) -> Result<Response, ApiError> {
    state.metrics.top_requests.inc();

    if language.is_empty() {
        return Err(ApiError::BadRequest(
            "no language parameter provided".to_string(),
        ));
    }

    let results = state
        .source
        .search_repositories(&language)
        .await
        .map_err(|e| {
            warn!(language = %language, error = %e, "Repository search failed");
            ApiError::BadGateway(e.to_string())
        })?;

    let repos = match results.items {
        Some(items) if !items.is_empty() => items,
        _ => {
            return Err(ApiError::BadGateway(format!(
                "no repos found for language {language}"
            )))
        }
    };

    let records = to_records(&repos);
    debug!(language = %language, count = records.len(), "Top repositories");

    Ok(json_response(StatusCode::OK, &records))
}

/// Repositories matching a user's profile URL.
pub async fn user_repos(
    State(state): State<AppState>,
    Path(user): Path<String>,
) -> Result<Response, ApiError> {
    state.metrics.user_repo_requests.inc();

    if user.is_empty() {
        return Err(ApiError::BadRequest("no user parameter provided".to_string()));
    }

    let profile = state
        .source
        .get_user(&user)
        .await
        .map_err(|e| {
            warn!(user = %user, error = %e, "User lookup failed");
            ApiError::NotFound(e.to_string())
        })?
        .ok_or_else(|| ApiError::NotFound(format!("user {user} not found")))?;

    // The profile URL is used verbatim as the search text.
    let results = state
        .source
        .search_repositories(&profile.html_url)
        .await
        .map_err(|e| {
            warn!(user = %user, error = %e, "User repository search failed");
            ApiError::Internal(e.to_string())
        })?;

    let repos = results
        .items
        .ok_or_else(|| ApiError::NotFound(format!("no repos for user {user} found")))?;

    let records = to_records(&repos);
    state.metrics.record_user_results(&user, records.len());
    debug!(user = %user, count = records.len(), "User repositories");

    Ok(json_response(StatusCode::OK, &records))
}

/// Liveness-style echo with a timestamp.
pub async fn ping(State(state): State<AppState>) -> Response {
    state.metrics.ping_requests.inc();
    json_response(StatusCode::OK, &PingResponse::now())
}
