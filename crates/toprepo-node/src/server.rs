//! Listener lifecycle: bind, serve, bounded graceful shutdown.

use axum::Router;
use std::future::Future;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tracing::{error, info, warn};

/// How long in-flight requests get to finish after a shutdown signal.
pub const SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(5);

/// Server lifecycle errors.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },
    #[error("server error: {0}")]
    Serve(#[from] std::io::Error),
    #[error("server task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Binds the HTTP listener. A failure is logged before it is returned.
pub async fn bind(addr: SocketAddr) -> Result<TcpListener, ServerError> {
    TcpListener::bind(addr).await.map_err(|source| {
        error!(addr = %addr, error = %source, "Failed to bind listener");
        ServerError::Bind { addr, source }
    })
}

/// Serves `app` until `signal` resolves, then drains connections for at
/// most `grace` before aborting the server task.
pub async fn serve<F>(
    listener: TcpListener,
    app: Router,
    signal: F,
    grace: Duration,
) -> Result<(), ServerError>
where
    F: Future<Output = ()> + Send + 'static,
{
    let (drain_tx, drain_rx) = oneshot::channel::<()>();

    let server = axum::serve(listener, app).with_graceful_shutdown(async move {
        let _ = drain_rx.await;
    });
    let mut task = tokio::spawn(async move { server.await });

    let mut waiter = tokio::spawn(async move {
        signal.await;
        let _ = drain_tx.send(());
    });

    tokio::select! {
        finished = &mut task => {
            waiter.abort();
            return Ok(finished??);
        }
        _ = &mut waiter => {}
    }

    match tokio::time::timeout(grace, &mut task).await {
        Ok(finished) => {
            info!("Server stopped");
            Ok(finished??)
        }
        Err(_) => {
            warn!(timeout_secs = grace.as_secs(), "Graceful shutdown timed out");
            task.abort();
            Ok(())
        }
    }
}

/// Resolves on Ctrl+C or SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown");
        },
        _ = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown");
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::routing::get;
    use parking_lot::Mutex;
    use std::io::Write;
    use std::sync::Arc;

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_bind_conflict_is_bind_error() {
        let first = bind(SocketAddr::from(([127, 0, 0, 1], 0))).await.unwrap();
        let taken = first.local_addr().unwrap();

        let err = bind(taken).await.unwrap_err();
        assert!(matches!(err, ServerError::Bind { addr, .. } if addr == taken));
    }

    #[tokio::test]
    async fn test_bind_failure_is_logged() {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let first = bind(SocketAddr::from(([127, 0, 0, 1], 0))).await.unwrap();
        let taken = first.local_addr().unwrap();
        assert!(bind(taken).await.is_err());

        let output = String::from_utf8(logs.0.lock().clone()).unwrap();
        assert!(output.contains("ERROR"));
        assert!(output.contains("Failed to bind listener"));
        assert!(output.contains(&taken.to_string()));
    }

    #[tokio::test]
    async fn test_serve_stops_on_signal() {
        let listener = bind(SocketAddr::from(([127, 0, 0, 1], 0))).await.unwrap();
        let app = Router::new().route("/", get(|| async { "ok" }));

        let result = tokio::time::timeout(
            Duration::from_secs(10),
            serve(listener, app, async {}, SHUTDOWN_TIMEOUT),
        )
        .await
        .expect("serve did not return");

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_shutdown_deadline_aborts_stuck_requests() {
        let listener = bind(SocketAddr::from(([127, 0, 0, 1], 0))).await.unwrap();
        let addr = listener.local_addr().unwrap();
        let app = Router::new().route(
            "/slow",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(60)).await;
                "late"
            }),
        );

        let (stop_tx, stop_rx) = oneshot::channel::<()>();
        let server = tokio::spawn(serve(
            listener,
            app,
            async move {
                let _ = stop_rx.await;
            },
            Duration::from_millis(200),
        ));

        let client = tokio::spawn(async move { reqwest::get(format!("http://{addr}/slow")).await });
        tokio::time::sleep(Duration::from_millis(200)).await;
        stop_tx.send(()).unwrap();

        let result = tokio::time::timeout(Duration::from_secs(5), server)
            .await
            .expect("shutdown deadline was not enforced")
            .unwrap();
        assert!(result.is_ok());

        client.abort();
    }
}
