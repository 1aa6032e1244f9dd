//! Platebook HTTP server
//!
//! Serves the site, built with Axum.
//!
//! # Endpoints
//!
//! ## Pages
//! - `GET /` - Homepage
//! - `GET /:file.html` - Any host page, with its view mounted
//! - `POST /:file.html` - Contact form submission (acknowledged, never stored)
//!
//! ## Assets
//! - Everything else is served from the site root
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//! - `GET /health` - Full health status
//!
//! # Example
//!
//! ```rust,ignore
//! use platebook::config::Config;
//! use platebook::server::{serve, AppState};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::default();
//!     let state = AppState::from_config(&config)?;
//!     serve(state, &config.server).await?;
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod routes;
pub mod state;

pub use error::{ServerError, ServerResult};
pub use state::AppState;

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::config::ServerConfig;

/// Build the router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    let assets = ServeDir::new(state.site.root());

    // Create shared state
    let shared_state = Arc::new(state);

    Router::new()
        .route("/", get(routes::pages::index))
        .route(
            "/:file",
            get(routes::pages::show).post(routes::pages::submit),
        )
        .nest("/health", health_routes)
        .fallback_service(assets)
        .layer(TraceLayer::new_for_http())
        .with_state(shared_state)
}

/// Start the HTTP server
pub async fn serve(state: AppState, config: &ServerConfig) -> Result<(), ServerError> {
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Platebook listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ServerError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Platebook shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = wait_for_signal("Ctrl+C", tokio::signal::ctrl_c());

    #[cfg(unix)]
    let terminate = wait_for_signal("SIGTERM", async {
        let mut stream =
            tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())?;
        stream.recv().await;
        Ok::<(), std::io::Error>(())
    });

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

/// Resolve once `signal` fires; a handler that cannot be installed never fires
async fn wait_for_signal<F>(name: &str, signal: F)
where
    F: std::future::Future<Output = std::io::Result<()>>,
{
    if let Err(e) = signal.await {
        tracing::error!(signal = name, error = %e, "Failed to install signal handler");
        std::future::pending::<()>().await;
    }
}
