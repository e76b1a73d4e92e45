//! Response bodies returned by the node.

use chrono::{DateTime, Local, TimeZone};
use serde::Serialize;
use toprepo_github::Repository;

/// Timestamp layout used by `/ping`.
pub const PING_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Flattened repository view used by every listing endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepoRecord {
    pub name: String,
    pub link: String,
    pub language: String,
    pub description: String,
    pub topics: Vec<String>,
}

impl From<&Repository> for RepoRecord {
    fn from(repo: &Repository) -> Self {
        Self {
            name: repo.name.clone(),
            link: repo.html_url.clone(),
            language: repo.language.clone().unwrap_or_default(),
            description: repo.description.clone().unwrap_or_default(),
            topics: repo.topics.clone().unwrap_or_default(),
        }
    }
}

/// Maps upstream repositories to records, preserving order.
pub fn to_records(repos: &[Repository]) -> Vec<RepoRecord> {
    repos.iter().map(RepoRecord::from).collect()
}

/// `{"error": ...}` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// `/ping` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PingResponse {
    pub reply: String,
    pub time: String,
}

impl PingResponse {
    /// A "Pong" stamped with `now`.
    pub fn at<Tz: TimeZone>(now: DateTime<Tz>) -> Self
    where
        Tz::Offset: std::fmt::Display,
    {
        Self {
            reply: "Pong".to_string(),
            time: now.format(PING_TIME_FORMAT).to_string(),
        }
    }

    /// A "Pong" stamped with the local wall clock.
    pub fn now() -> Self {
        Self::at(Local::now())
    }
}
