//! # hoteld: hotel API daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Load configuration (`hotel.toml`, env vars)
//! - Initialize tracing
//! - Open the `SQLite` connection pool once and run migrations
//! - Construct the repository, the service, and the axum router
//! - Bind to a TCP port and serve until SIGTERM/SIGINT
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer: no domain logic belongs here.

mod config;

use hotel_adapter_http_axum::state::AppState;
use hotel_adapter_storage_sqlite_sqlx::{Config as DatabaseConfig, SqliteApartmentRepository};
use hotel_app::services::apartment_service::ApartmentService;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&config.logging.filter)?)
        .init();

    // Database
    let db = DatabaseConfig {
        database_url: config.database.url.clone(),
    }
    .build()
    .await?;

    // Wiring
    let apartment_repo = SqliteApartmentRepository::new(db.pool().clone());
    let state = AppState::new(ApartmentService::new(apartment_repo));
    let app = hotel_adapter_http_axum::router::build(state);

    // HTTP
    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    tracing::info!("Server running on port {}", config.server.port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

/// Resolves on Ctrl+C, or SIGTERM on unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("received Ctrl+C, shutting down"),
        () = terminate => tracing::info!("received SIGTERM, shutting down"),
    }
}
