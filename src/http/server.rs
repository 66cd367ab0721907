//! HTTP server setup and request handling.
//!
//! # Responsibilities
//! - Create the Axum Router with the root route
//! - Wire up middleware (request tracing)
//! - Bind the server to a listener and serve until shutdown
//!
//! The server owns no mutable state; handlers see the startup-resolved
//! settings through shared state.

use std::sync::Arc;

use axum::{extract::State, response::Html, routing::get, Router};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::config::Settings;
use crate::http::render;

/// TCP port the server listens on.
pub const PORT: u16 = 3000;

/// HTTP server for the welcome page.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with the given settings.
    pub fn new(settings: Settings) -> Self {
        let router = Self::build_router(Arc::new(settings));
        Self { router }
    }

    /// Build the Axum router with all middleware layers.
    ///
    /// Only `/` is routed; every other path gets Axum's default 404.
    fn build_router(settings: Arc<Settings>) -> Router {
        Router::new()
            .route("/", get(index_handler))
            .with_state(settings)
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        // Serve with graceful shutdown
        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Root path handler.
async fn index_handler(State(settings): State<Arc<Settings>>) -> Html<String> {
    tracing::info!("Received a request for the root path");
    Html(render::index_page(&settings))
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received");
}
