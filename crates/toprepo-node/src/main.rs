//! toprepo node - entry point.

use anyhow::Context;
use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use toprepo_github::GitHubClient;
use toprepo_node::api::{create_router, AppState};
use toprepo_node::config::NodeConfig;
use toprepo_node::observability::{init_logging, LogFormat};
use toprepo_node::server::{self, SHUTDOWN_TIMEOUT};

/// toprepo node - GitHub repository search proxy
#[derive(Parser, Debug)]
#[command(name = "toprepo-node")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a YAML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// API listen address
    #[arg(long)]
    listen_addr: Option<SocketAddr>,

    /// GitHub REST API root
    #[arg(long)]
    github_api_url: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Log format (pretty, json)
    #[arg(long)]
    log_format: Option<String>,
}

impl Args {
    fn into_config(self) -> anyhow::Result<NodeConfig> {
        let mut config = match &self.config {
            Some(path) => NodeConfig::load(path)?,
            None => NodeConfig::default(),
        };

        if let Some(addr) = self.listen_addr {
            config.listen_addr = addr;
        }
        if let Some(url) = self.github_api_url {
            config.github_api_url = url;
        }
        if let Some(level) = self.log_level {
            config.log_level = level;
        }
        if let Some(format) = self.log_format {
            config.log_format = LogFormat::parse(&format);
        }

        Ok(config)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Args::parse().into_config()?;

    init_logging(&config.log_level, config.log_format);

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting toprepo node");

    let client = GitHubClient::new(&config.github_api_url, &config.user_agent)
        .context("failed to create GitHub client")?;
    let app = create_router(AppState::new(Arc::new(client)));

    let listener = server::bind(config.listen_addr).await?;
    tracing::info!(
        addr = %config.listen_addr,
        github_api_url = %config.github_api_url,
        "Listening"
    );

    server::serve(listener, app, server::shutdown_signal(), SHUTDOWN_TIMEOUT).await?;

    tracing::info!("toprepo node stopped");
    Ok(())
}
