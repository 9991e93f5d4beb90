use std::future::Future;
use std::net::SocketAddr;

use anyhow::Context;
use axum::Router;
use configs::{AppConfig, ServerConfig};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::{error, info};

use crate::routes;
use crate::state::ServerState;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Application router over a fresh, empty in-memory store.
pub fn build_app() -> Router {
    routes::build_router(ServerState::in_memory(), build_cors())
}

/// Public entry: build the app and run the HTTP server until Ctrl+C
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let app = build_app();

    let addr = resolve_bind_addr(&cfg.server).await?;
    let listener = TcpListener::bind(addr).await?;
    info!(%addr, "starting maintenance records server");
    serve(listener, app, shutdown_signal()).await?;
    info!("server stopped");
    Ok(())
}

/// Resolve the configured host (name or IP literal) and port to a socket address.
pub async fn resolve_bind_addr(server: &ServerConfig) -> anyhow::Result<SocketAddr> {
    let host = server.bind_host();
    tokio::net::lookup_host((host, server.port))
        .await
        .with_context(|| format!("cannot resolve bind address {host}:{}", server.port))?
        .next()
        .with_context(|| format!("no address found for {host}:{}", server.port))
}

/// Serve `app` on an already bound listener until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, app: Router, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app).with_graceful_shutdown(shutdown).await?;
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!(event = "shutdown_signal", "received Ctrl+C, draining connections"),
        Err(e) => {
            // Without a signal handler, only process termination stops the server.
            error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    }
}
