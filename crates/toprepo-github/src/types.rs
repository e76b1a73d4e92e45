//! GitHub API response types.
//!
//! Only the fields the node actually reads are modelled; serde ignores
//! everything else in the payload.

use serde::{Deserialize, Serialize};

/// A repository as returned by the search endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Repository {
    /// Repository name without the owner prefix.
    pub name: String,
    /// Browser URL of the repository.
    #[serde(default)]
    pub html_url: String,
    /// Primary language, if GitHub detected one.
    #[serde(default)]
    pub language: Option<String>,
    /// Free-form description.
    #[serde(default)]
    pub description: Option<String>,
    /// Repository topics.
    #[serde(default)]
    pub topics: Option<Vec<String>>,
}

/// A user profile.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct User {
    /// Login name.
    pub login: String,
    /// Browser URL of the profile page.
    #[serde(default)]
    pub html_url: String,
}

/// Body of `GET /search/repositories`.
///
/// `items` stays `None` when the field is missing so callers can tell an
/// absent result set from an empty one.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SearchResults {
    #[serde(default)]
    pub total_count: u64,
    #[serde(default)]
    pub incomplete_results: bool,
    #[serde(default)]
    pub items: Option<Vec<Repository>>,
}
