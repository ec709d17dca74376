//! HTTP server initialization and runtime setup.
//!
//! Builds the upstream client and services, then runs the Axum server until
//! a shutdown signal arrives.

use crate::application::services::PageviewService;
use crate::config::Config;
use crate::domain::repositories::PageviewRepository;
use crate::infrastructure::upstream::WikimediaClient;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Builds the application state for the given configuration.
///
/// # Errors
///
/// Returns an error if the upstream client cannot be constructed.
pub fn build_state(config: &Config) -> Result<AppState> {
    let client = WikimediaClient::new(
        &config.upstream_base_url,
        &config.upstream_user_agent,
        config.upstream_timeout(),
    )
    .context("Failed to create upstream pageviews client")?;

    let repository: Arc<dyn PageviewRepository> = Arc::new(client);
    let pageview_service = Arc::new(PageviewService::new(repository, config.fetch_options()));

    Ok(AppState::new(
        pageview_service,
        config.upstream_base_url.clone(),
    ))
}

/// Runs the HTTP server with the given configuration.
///
/// # Errors
///
/// Returns an error if:
/// - The upstream client cannot be built
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let state = build_state(&config)?;
    tracing::info!("Upstream client ready: {}", config.upstream_base_url);

    let app = app_router(state);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Resolves on Ctrl-C, or SIGTERM on Unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
