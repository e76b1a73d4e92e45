//! Prometheus metrics collection.
//!
//! One [`MetricsState`] is built per process and handed to the router
//! through application state. Tests build their own so counts never leak
//! between cases.

use parking_lot::RwLock;
use prometheus_client::encoding::EncodeLabelSet;
use prometheus_client::metrics::counter::Counter;
use prometheus_client::metrics::family::Family;
use prometheus_client::metrics::gauge::Gauge;
use prometheus_client::registry::Registry;
use std::sync::Arc;

/// Labels for the per-user result gauge.
#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelSet)]
pub struct UserLabels {
    /// Login name from the request path.
    pub user: String,
}

/// Metrics state container.
#[derive(Clone)]
pub struct MetricsState {
    /// Prometheus registry.
    registry: Arc<RwLock<Registry>>,
    /// Requests handled by `/ping`.
    pub ping_requests: Counter,
    /// Requests handled by `/top/{language}`.
    pub top_requests: Counter,
    /// Requests handled by `/repos/{user}`.
    pub user_repo_requests: Counter,
    /// Latest result count per user.
    pub user_repo_results: Family<UserLabels, Gauge>,
}

impl Default for MetricsState {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricsState {
    /// Create a new metrics state with all metrics registered.
    pub fn new() -> Self {
        let mut registry = Registry::default();

        let ping_requests = Counter::default();
        registry.register(
            "ping_request_count",
            "No of request handled by Ping handler",
            ping_requests.clone(),
        );

        let top_requests = Counter::default();
        registry.register(
            "top_request_count",
            "No of request handled by Top handler",
            top_requests.clone(),
        );

        let user_repo_requests = Counter::default();
        registry.register(
            "user_repo_request_count",
            "No of request handled by User repo handler",
            user_repo_requests.clone(),
        );

        let user_repo_results = Family::<UserLabels, Gauge>::default();
        registry.register(
            "user_repo_result_count",
            "Number of repos returned by request",
            user_repo_results.clone(),
        );

        Self {
            registry: Arc::new(RwLock::new(registry)),
            ping_requests,
            top_requests,
            user_repo_requests,
            user_repo_results,
        }
    }

    /// Overwrite the result gauge for `user`.
    pub fn record_user_results(&self, user: &str, count: usize) {
        let labels = UserLabels {
            user: user.to_string(),
        };
        self.user_repo_results
            .get_or_create(&labels)
            .set(i64::try_from(count).unwrap_or(i64::MAX));
    }

    /// Current gauge value for `user`, if one was ever recorded.
    pub fn user_results(&self, user: &str) -> Option<i64> {
        let labels = UserLabels {
            user: user.to_string(),
        };
        self.user_repo_results.get(&labels).map(|gauge| gauge.get())
    }

    /// Encode metrics for Prometheus scraping.
    pub fn encode(&self) -> Result<String, std::fmt::Error> {
        let mut buffer = String::new();
        let registry = self.registry.read();
        prometheus_client::encoding::text::encode(&mut buffer, &registry)?;
        Ok(buffer)
    }
}
