//! # GitHub Client
//!
//! Unauthenticated HTTP client for the two GitHub REST endpoints the node
//! proxies: repository search and user lookup.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{GitHubError, Result};
use crate::source::RepoSource;
use crate::types::{SearchResults, User};

/// Public GitHub REST API root.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

const GITHUB_ACCEPT: &str = "application/vnd.github+json";

/// HTTP client for the GitHub REST API.
///
/// Cheap to clone; the underlying connection pool is shared.
///
/// # Examples
///
/// ```rust,ignore
/// use toprepo_github::{GitHubClient, RepoSource, DEFAULT_API_URL};
///
/// let client = GitHubClient::new(DEFAULT_API_URL, "toprepo/0.1.0")?;
/// let results = client.search_repositories("rust").await?;
/// ```
#[derive(Clone, Debug)]
pub struct GitHubClient {
    base_url: Url,
    http: Client,
}

impl GitHubClient {
    /// Creates a client rooted at `base_url`.
    ///
    /// No request timeout is configured; the transport defaults apply.
    ///
    /// # Errors
    ///
    /// Returns [`GitHubError::Client`] if the URL is not a valid base or the
    /// HTTP client cannot be built.
    pub fn new(base_url: &str, user_agent: &str) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| GitHubError::Client(format!("invalid base URL {base_url}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(GitHubError::Client(format!(
                "base URL {base_url} cannot carry a path"
            )));
        }

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_ACCEPT));

        let http = Client::builder()
            .user_agent(user_agent)
            .default_headers(headers)
            .build()
            .map_err(|e| GitHubError::Client(e.to_string()))?;

        Ok(Self { base_url, http })
    }

    /// Returns the configured API root.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Builds `{base}/{segments...}`, percent-encoding each segment.
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                GitHubError::Client(format!("base URL {} cannot carry a path", self.base_url))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Sends a GET and decodes the body; `Ok(None)` on 404.
    async fn get_optional<T: DeserializeOwned>(
        &self,
        url: Url,
        query: &[(&str, &str)],
    ) -> Result<Option<T>> {
        debug!(url = %url, "GitHub request");

        let response = self.http.get(url).query(query).send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = if body.is_empty() {
                status.canonical_reason().unwrap_or("unknown").to_string()
            } else {
                body
            };
            return Err(GitHubError::Api {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json()
            .await
            .map(Some)
            .map_err(|e| GitHubError::InvalidResponse(e.to_string()))
    }
}

#[async_trait]
impl RepoSource for GitHubClient {
    async fn search_repositories(&self, query: &str) -> Result<SearchResults> {
        let url = self.endpoint(&["search", "repositories"])?;
        self.get_optional(url, &[("q", query)])
            .await?
            .ok_or_else(|| GitHubError::Api {
                status: StatusCode::NOT_FOUND.as_u16(),
                message: "search endpoint not found".to_string(),
            })
    }

    async fn get_user(&self, name: &str) -> Result<Option<User>> {
        let url = self.endpoint(&["users", name])?;
        self.get_optional(url, &[]).await
    }
}
