//! Serve command - Starts the HTTP server.

use crate::api::{create_router, AppState};
use crate::cli::args::ServeArgs;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::services::spawn_sweeper;

/// Execute the serve command
pub async fn execute(args: ServeArgs, mut config: Config) -> AppResult<()> {
    if let Some(host) = args.host {
        config.server_host = host;
    }
    if let Some(port) = args.port {
        config.server_port = port;
    }

    tracing::info!(
        lifetime_secs = config.token_lifetime_seconds,
        principal = %config.auth_username,
        "Starting server..."
    );

    let addr = config.server_addr();
    let app_state = AppState::from_config(config);

    let sweeper = app_state.config.sweep_interval().map(|every| {
        tracing::info!(interval_secs = every.as_secs(), "Session sweeper enabled");
        spawn_sweeper(
            app_state.registry.clone(),
            app_state.config.token_lifetime(),
            every,
        )
    });

    // Build router
    let app = create_router(app_state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind to {}: {}", addr, e)))?;

    tracing::info!("Server running on http://{}", addr);

    let served = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)));

    if let Some(handle) = sweeper {
        handle.abort();
    }
    tracing::info!("Server stopped");

    served
}

/// Resolve on Ctrl+C.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
