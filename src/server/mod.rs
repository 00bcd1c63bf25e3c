/*!
 * HTTP server setup and routing.
 *
 * Wraps the validators in an axum router with permissive CORS, and owns the
 * bind/serve lifecycle of the process-wide server instance.
 */

use anyhow::Result;
use axum::{
    Router,
    routing::{get, post},
};
use log::info;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

use crate::app_config::Config;
use crate::errors::AppError;
use crate::validation::ValidationService;

pub mod handlers;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    pub validation: Arc<ValidationService>,
}

impl AppState {
    pub fn new(validation: ValidationService) -> Self {
        Self {
            validation: Arc::new(validation),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ValidationService::new())
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/random", get(handlers::random))
        .route("/api/validate-translation", post(handlers::validate_placeholders))
        .route("/api/validate-placeholders", post(handlers::validate_placeholders))
        .route("/api/validate-consistency", post(handlers::validate_consistency))
        .route("/health", get(handlers::health))
        .with_state(state)
        // Any origin may call the API
        .layer(CorsLayer::permissive())
}

/// HTTP server built once at startup
pub struct Server {
    addr: SocketAddr,
    router: Router,
}

impl Server {
    /// Create the server from a validated configuration
    pub fn new(config: &Config) -> Result<Self> {
        let addr = config.bind_address()?;
        let state = AppState::new(ValidationService::with_config(&config.validation));

        Ok(Self {
            addr,
            router: build_router(state),
        })
    }

    /// Configured listen address
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Bind the listening socket
    pub async fn bind(&self) -> Result<TcpListener> {
        let listener = TcpListener::bind(self.addr)
            .await
            .map_err(|source| AppError::Bind {
                addr: self.addr.to_string(),
                source,
            })?;
        Ok(listener)
    }

    /// Serve requests on an already bound listener until shutdown
    pub async fn serve(self, listener: TcpListener) -> Result<()> {
        let local_addr = listener.local_addr()?;
        info!("Listening on http://{}", local_addr);

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| AppError::Server(e.to_string()))?;

        info!("Server stopped");
        Ok(())
    }

    /// Bind and serve
    pub async fn run(self) -> Result<()> {
        let listener = self.bind().await?;
        self.serve(listener).await
    }
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => {
            // Without a signal handler, run until the process is killed
            log::warn!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
