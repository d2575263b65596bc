//! HTTP server for the OpenApply site.
//!
//! Serves the rendered pages, the stylesheet and a small JSON API over the
//! guide catalog:
//!
//! ```text
//! GET /                      home
//! GET /guides?q=&category=&sort=
//! GET /guides/{slug}         guide detail (ETag / If-None-Match)
//! GET /about | /resources | /community
//! GET /assets/site.css
//! GET /api/guides?q=&category=&sort=
//! GET /api/guides/{slug}
//! ```
//!
//! # Quick Start
//!
//! ```ignore
//! use oa_server::{ServerConfig, run_server};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = ServerConfig {
//!         host: "127.0.0.1".to_owned(),
//!         port: 7979,
//!         ..ServerConfig::default()
//!     };
//!
//!     run_server(config).await.unwrap();
//! }
//! ```

mod app;
mod error;
mod handlers;
mod middleware;
mod state;
mod static_files;

use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;

use oa_config::GuidesConfig;
use oa_site::{Site, SiteOptions};
use state::AppState;

/// Server configuration.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Presentation options.
    pub options: SiteOptions,
    /// Application version (for `ETag`s).
    pub version: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 7979,
            options: SiteOptions::default(),
            version: String::new(),
        }
    }
}

/// Run the server until Ctrl-C.
///
/// # Errors
///
/// Returns an error if the catalog is invalid, the address cannot be parsed,
/// or the listener fails to bind.
pub async fn run_server(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = oa_catalog::builtin()?;
    tracing::info!(guides = catalog.len(), "Loaded guide catalog");

    let state = Arc::new(AppState {
        site: Site::new(catalog, config.options),
        version: config.version.clone(),
    });

    let app = app::create_router(state);

    let addr = SocketAddr::from_str(&format!("{}:{}", config.host, config.port))?;
    tracing::info!(address = %addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Wait for shutdown signal (Ctrl-C).
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received, stopping server...");
}

/// Map `[guides]` configuration to site options.
#[must_use]
pub fn site_options_from_config(guides: &GuidesConfig) -> SiteOptions {
    SiteOptions {
        related_limit: guides.related_limit,
        order: guides.order,
        reading_time: guides.reading_time,
    }
}

/// Create server configuration from loaded configuration.
#[must_use]
pub fn server_config_from_config(config: &oa_config::Config, version: String) -> ServerConfig {
    ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
        options: site_options_from_config(&config.guides),
        version,
    }
}
