//! # toprepo Node
//!
//! A thin HTTP front-end over a code hosting provider's search API.
//!
//! ## Endpoints
//!
//! | Method | Path | Response |
//! |---|---|---|
//! | GET | `/top/{language}` | top repositories for a free-text query |
//! | GET | `/repos/{user}` | repositories matching a user's profile URL |
//! | GET | `/ping` | `{"reply": "Pong", "time": ...}` |
//! | any | `/livez` | empty 200 |
//! | GET | `/metrics` | Prometheus text exposition |
//!
//! Every request makes at most the upstream calls its handler needs and
//! maps the outcome straight to a status code. Nothing is cached or
//! retried.
//!
//! ## Modules
//!
//! - [`api`] - Router, handlers and response writers
//! - [`records`] - Response bodies and the repository mapper
//! - [`config`] - Node configuration
//! - [`observability`] - Structured logging and Prometheus metrics
//! - [`health`] - Liveness endpoint
//! - [`server`] - Listener lifecycle and graceful shutdown
//!
//! ## Example: Creating an AppState
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use toprepo_github::{GitHubClient, DEFAULT_API_URL};
//! use toprepo_node::api::{create_router, AppState};
//!
//! let client = GitHubClient::new(DEFAULT_API_URL, "toprepo/0.1.0").unwrap();
//! let state = AppState::new(Arc::new(client));
//! let app = create_router(state);
//! ```

pub mod api;
pub mod config;
pub mod health;
pub mod observability;
pub mod records;
pub mod server;
