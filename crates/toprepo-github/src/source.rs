//! The upstream seam the node depends on.

use async_trait::async_trait;

use crate::error::Result;
use crate::types::{SearchResults, User};

/// Read-only view of a code hosting provider.
///
/// The node holds one `Arc<dyn RepoSource>` for its whole lifetime;
/// tests swap in in-memory implementations.
#[async_trait]
pub trait RepoSource: Send + Sync {
    /// Runs a free-text repository search and returns the provider's
    /// default first page.
    async fn search_repositories(&self, query: &str) -> Result<SearchResults>;

    /// Looks up a user by login. `Ok(None)` means the user does not exist.
    async fn get_user(&self, name: &str) -> Result<Option<User>>;
}
