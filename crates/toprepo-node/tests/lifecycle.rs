//! Serves the full router over TCP and shuts it down.

use async_trait::async_trait;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::oneshot;
use toprepo_github::{RepoSource, SearchResults, User};
use toprepo_node::api::{create_router, AppState};
use toprepo_node::server::{self, SHUTDOWN_TIMEOUT};

struct EmptySource;

#[async_trait]
impl RepoSource for EmptySource {
    async fn search_repositories(&self, _query: &str) -> toprepo_github::Result<SearchResults> {
        Ok(SearchResults::default())
    }

    async fn get_user(&self, _name: &str) -> toprepo_github::Result<Option<User>> {
        Ok(None)
    }
}

#[tokio::test]
async fn test_serve_answers_then_shuts_down() {
    let listener = server::bind(SocketAddr::from(([127, 0, 0, 1], 0)))
        .await
        .unwrap();
    let addr = listener.local_addr().unwrap();

    let state = AppState::new(Arc::new(EmptySource));
    let metrics = state.metrics.clone();
    let (stop_tx, stop_rx) = oneshot::channel::<()>();

    let server = tokio::spawn(server::serve(
        listener,
        create_router(state),
        async move {
            let _ = stop_rx.await;
        },
        SHUTDOWN_TIMEOUT,
    ));

    let client = reqwest::Client::new();

    let ping = client
        .get(format!("http://{addr}/ping"))
        .send()
        .await
        .unwrap();
    assert_eq!(ping.status(), 200);
    let body: serde_json::Value = ping.json().await.unwrap();
    assert_eq!(body["reply"], "Pong");

    let livez = client
        .get(format!("http://{addr}/livez"))
        .send()
        .await
        .unwrap();
    assert_eq!(livez.status(), 200);
    assert!(livez.bytes().await.unwrap().is_empty());

    let top = client
        .get(format!("http://{addr}/top/rust"))
        .send()
        .await
        .unwrap();
    assert_eq!(top.status(), 502);

    let scrape = client
        .get(format!("http://{addr}/metrics"))
        .send()
        .await
        .unwrap();
    assert_eq!(scrape.status(), 200);
    let text = scrape.text().await.unwrap();
    assert!(text.contains("ping_request_count_total 1"));
    assert!(text.contains("top_request_count_total 1"));

    stop_tx.send(()).unwrap();
    let result = tokio::time::timeout(Duration::from_secs(10), server)
        .await
        .expect("server did not stop")
        .unwrap();
    assert!(result.is_ok());
    assert_eq!(metrics.ping_requests.get(), 1);
}
