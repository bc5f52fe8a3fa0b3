//! Application builder and server lifecycle.

use std::sync::Arc;

use axum::Router;
use sqlx::SqlitePool;
use vidhub_auth::JwtDecoder;
use vidhub_core::config::AppConfig;
use vidhub_core::{AppError, AppResult};
use vidhub_database::repositories::VideoRepository;

use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application with all routes and middleware.
///
/// Takes an already-connected pool so tests can hand in an in-memory
/// database.
pub async fn build_app(config: AppConfig, db_pool: SqlitePool) -> AppResult<Router> {
    // ── Step 1: Initialize repositories ──────────────────────────
    let video_repo = Arc::new(VideoRepository::new(db_pool.clone()));

    // ── Step 2: Initialize auth system ───────────────────────────
    let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth));

    // ── Step 3: Initialize thumbnail store ───────────────────────
    let thumbnail_store =
        vidhub_storage::from_config(&config.storage, &config.server.public_base_url).await?;
    tracing::info!(
        "Thumbnail store ready (provider: {})",
        thumbnail_store.provider_type()
    );

    let state = AppState {
        config: Arc::new(config),
        db_pool,
        thumbnail_store,
        jwt_decoder,
        video_repo,
    };

    Ok(build_router(state))
}

/// Runs the VidHub server with the given configuration and database pool.
pub async fn run_server(config: AppConfig, db_pool: SqlitePool) -> AppResult<()> {
    let addr = format!("{}:{}", config.server.host, config.server.port);

    let app = build_app(config, db_pool).await?;

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {}: {}", addr, e)))?;

    tracing::info!("VidHub server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    tracing::info!("VidHub server shut down gracefully");
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
}
