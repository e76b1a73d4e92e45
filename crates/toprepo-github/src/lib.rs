//! # toprepo GitHub client
//!
//! The upstream side of the toprepo node: a [`RepoSource`] trait describing
//! the two queries the node proxies, and [`GitHubClient`], its
//! implementation over GitHub's REST API.
//!
//! Requests are unauthenticated and return the provider's default first
//! page. There is no caching, retrying or rate-limit handling here.
//!
//! ## Example
//!
//! ```rust,ignore
//! use toprepo_github::{GitHubClient, RepoSource, DEFAULT_API_URL};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = GitHubClient::new(DEFAULT_API_URL, "toprepo/0.1.0")?;
//!     if let Some(user) = client.get_user("octocat").await? {
//!         println!("{}", user.html_url);
//!     }
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod error;
pub mod source;
pub mod types;

pub use client::{GitHubClient, DEFAULT_API_URL};
pub use error::{GitHubError, Result};
pub use source::RepoSource;
pub use types::{Repository, SearchResults, User};
