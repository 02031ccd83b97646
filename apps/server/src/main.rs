//! # Acronyms Server Binary
//!
//! Loads configuration, opens the database, and serves the REST API
//! until a shutdown signal arrives.

use tracing::info;
use tracing_subscriber::EnvFilter;

use acronyms_db::{Database, DbConfig};
use acronyms_server::{build_router, AppState, Settings};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    info!("Starting Acronyms server...");

    // Load configuration
    let settings = Settings::load()?;
    info!(
        database = %settings.database.display(),
        host = %settings.host,
        port = settings.port,
        "Configuration loaded"
    );

    // Open database and run migrations
    let db = Database::new(DbConfig::new(&settings.database)).await?;
    info!("Database ready");

    // Build router and bind
    let addr = format!("{}:{}", settings.host, settings.port);
    let state = AppState::new(db, settings);
    let router = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(%addr, "Listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, starting graceful shutdown...");
}
