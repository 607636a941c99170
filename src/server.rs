//! HTTP server initialization and runtime setup.
//!
//! Handles the store connection, router construction, and Axum server
//! lifecycle including graceful shutdown.

use crate::config::Config;
use crate::infrastructure::store::RedisMappingStore;
use crate::routes::{app_router, normalize};
use crate::state::AppState;
use crate::web::NotFoundPage;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::sync::Arc;
use tokio::signal;
use tracing::info;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Redis connection (verified with PING)
/// - Not-found page from the public directory
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - Redis is unreachable at startup
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let store = RedisMappingStore::connect(&config.redis_url)
        .await
        .context("Failed to connect to Redis")?;

    let not_found_page = NotFoundPage::load(&config.public_dir);
    let state = AppState::new(Arc::new(store), config.api_key.clone(), not_found_page);

    let app = normalize(app_router(state, &config.public_dir));

    let addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Server running on http://{}", listener.local_addr()?);

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Resolves on Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
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
        _ = ctrl_c => info!("Received Ctrl+C, shutting down"),
        _ = terminate => info!("Received SIGTERM, shutting down"),
    }
}
