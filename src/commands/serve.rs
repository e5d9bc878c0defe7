//! Serve command - Starts the HTTP server.

use std::sync::Arc;

use crate::api::{create_router, AppState};
use crate::cli::args::ServeArgs;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::infra::Database;

/// Execute the serve command
pub async fn execute(args: ServeArgs, config: Config) -> AppResult<()> {
    let config = config.with_server_overrides(args.host, args.port);
    tracing::info!("Starting server...");

    let app_state = if args.in_memory {
        tracing::warn!("Using in-memory concert store; data is lost on shutdown");
        AppState::in_memory(&config)
    } else {
        let db = Arc::new(Database::connect(&config).await?);
        AppState::from_config(db, &config)
    };
    tracing::info!("Images stored in {}", config.file_directory.display());

    let app = create_router(app_state);

    let addr = config.server_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind to {}: {}", addr, e)))?;

    tracing::info!("Server running on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    Ok(())
}
