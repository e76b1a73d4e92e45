//! Error types for GitHub API operations.

use thiserror::Error;

/// Errors that can occur while talking to the GitHub API.
#[derive(Error, Debug)]
pub enum GitHubError {
    /// Network or transport error.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// GitHub answered with a non-success status.
    #[error("GitHub API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Response body, or the status reason when the body is empty.
        message: String,
    },

    /// The response body could not be decoded.
    #[error("invalid response format: {0}")]
    InvalidResponse(String),

    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Client(String),
}

/// Result type for GitHub API operations.
pub type Result<T> = std::result::Result<T, GitHubError>;
