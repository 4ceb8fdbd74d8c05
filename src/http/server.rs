//! HTTP Server
//!
//! Binds the listener and serves the router until Ctrl+C.

use axum::Router;
use tokio::net::TcpListener;

use crate::config::Config;
use crate::error::{IncendiosError, Result};
use crate::query::QueryService;

use super::{router, AppState};

/// HTTP server for the wildfire API
pub struct Server {
    config: Config,
    service: QueryService,
}

impl Server {
    /// Create a new server with the given config and query service
    pub fn new(config: Config, service: QueryService) -> Self {
        Self { config, service }
    }

    /// The router this server would serve
    pub fn router(&self) -> Router {
        router::build(AppState::new(self.service.clone()), &self.config.docs_dir)
    }

    /// Bind and serve until a shutdown signal arrives
    pub async fn run(self) -> Result<()> {
        let addr = self.config.socket_addr()?;
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|e| IncendiosError::Server(format!("failed to bind {}: {}", addr, e)))?;

        self.serve(listener).await
    }

    /// Serve on an already-bound listener
    pub async fn serve(self, listener: TcpListener) -> Result<()> {
        let local = listener.local_addr()?;
        tracing::info!("Listening on http://{}", local);

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Received Ctrl+C, initiating shutdown..."),
        Err(e) => {
            // Without a signal handler we can only run until killed
            tracing::warn!("Unable to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
