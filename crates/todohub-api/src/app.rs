//! Application runner — wires state and router, then serves.

use sqlx::PgPool;

use todohub_core::config::AppConfig;
use todohub_core::error::AppError;

use crate::router::build_router;
use crate::state::AppState;

/// Runs the TodoHub server with the given configuration and database pool.
///
/// Blocks until Ctrl+C, then shuts down gracefully.
pub async fn run_server(config: AppConfig, db_pool: PgPool) -> Result<(), AppError> {
    let addr = format!("{}:{}", config.server.host, config.server.port);

    let state = AppState::build(config, db_pool);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("TodoHub server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown...");
}
