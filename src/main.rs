//! Welcome Page Server
//!
//! A minimal HTTP server built with Tokio and Axum. Serves a single HTML
//! page on `/` showing the application name, version, and environment
//! label, resolved from the process environment at startup.
//!
//! ```text
//! APP_NAME / APP_VERSION / ENVIRONMENT
//!     → config (resolve with defaults, once at startup)
//!     → http (Axum router, root handler)
//!     → rendered HTML response
//! ```

pub mod config;
pub mod http;

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Settings;
use crate::http::server::PORT;
use crate::http::HttpServer;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "welcome_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("welcome-server v0.1.0 starting");

    // Resolve settings from the environment once; handlers never touch env.
    let settings = Settings::from_env();

    tracing::info!(
        app_name = %settings.app_name,
        app_version = %settings.app_version,
        environment = %settings.environment,
        "Settings resolved"
    );

    // Bind TCP listener
    let listener = TcpListener::bind(("0.0.0.0", PORT)).await?;

    tracing::info!(port = PORT, "Server running");

    // Create and run HTTP server
    let server = HttpServer::new(settings);
    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
