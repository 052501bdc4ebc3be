//! HTTP listener for the reminders API.

use std::future::Future;
use std::time::Duration;

use anyhow::{Context, Result};
use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::Span;
use tracing::field::Empty;

use crate::config::AppConfig;

/// Builds the full application: a fresh store, the REST routes and request tracing.
#[must_use]
pub fn build_app(config: &AppConfig) -> Router {
    let service = reminders::build_service(config.reminders.clone());
    with_request_tracing(reminders::router(service))
}

fn with_request_tracing(router: Router) -> Router {
    router.layer(
        TraceLayer::new_for_http()
            .make_span_with(|req: &Request<Body>| {
                tracing::info_span!(
                    "http_request",
                    method = %req.method(),
                    uri = %req.uri().path(),
                    version = ?req.version(),
                    status = Empty,
                    latency_ms = Empty,
                )
            })
            .on_response(|res: &Response<Body>, latency: Duration, span: &Span| {
                span.record("status", res.status().as_u16());
                span.record("latency_ms", latency.as_millis());
            }),
    )
}

/// Binds `server.bind_addr` and serves until SIGINT or SIGTERM.
///
/// # Errors
/// Returns an error if the address is invalid, cannot be bound, or serving fails.
pub async fn run(config: &AppConfig) -> Result<()> {
    let addr = config.server.socket_addr()?;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    serve(listener, build_app(config), shutdown_signal()).await
}

/// Serves `app` on an already bound listener until `shutdown` resolves.
///
/// # Errors
/// Returns an error if the listener fails.
pub async fn serve<F>(listener: TcpListener, app: Router, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let local_addr = listener.local_addr()?;
    tracing::info!("Reminders server listening on http://{local_addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| anyhow::anyhow!(e))?;

    tracing::info!("Reminders server stopped");
    Ok(())
}

/// Resolves on Ctrl+C or, on unix, SIGTERM.
///
/// A listener that cannot be installed never resolves, so the other one
/// still stops the server.
async fn shutdown_signal() {
    let interrupt = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Cannot listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Cannot listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };
    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = interrupt => {}
        () = terminate => {}
    }
    tracing::info!("Shutdown requested, draining connections");
}
