//! Route table and middleware stack.

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use crate::handlers::{assets, health, thumbnails};
use crate::middleware::cors::build_cors_layer;
use crate::state::AppState;

/// Extra slack on top of the upload limit for multipart framing overhead,
/// so a payload at exactly the limit still reaches the size check in the
/// handler instead of being cut off mid-read.
const UPLOAD_OVERHEAD_BYTES: usize = 64 * 1024;

/// Builds the full application router with all middleware applied.
pub fn build_router(state: AppState) -> Router {
    let max_upload = state.config.storage.max_upload_size_bytes as usize;
    let cors = build_cors_layer(&state.config.server.cors);

    let api_routes = Router::new()
        .merge(thumbnail_routes())
        .merge(health_routes());

    Router::new()
        .nest("/api", api_routes)
        .merge(asset_routes())
        .layer(DefaultBodyLimit::max(max_upload + UPLOAD_OVERHEAD_BYTES))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Thumbnail retrieval and upload.
fn thumbnail_routes() -> Router<AppState> {
    Router::new()
        .route("/thumbnails/{video_id}", get(thumbnails::get_thumbnail))
        .route(
            "/videos/{video_id}/thumbnail",
            post(thumbnails::upload_thumbnail),
        )
}

/// Health check endpoints (no auth required).
fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health))
        .route("/health/detailed", get(health::health_detailed))
}

/// Files written by the local thumbnail store.
fn asset_routes() -> Router<AppState> {
    Router::new().route("/assets/{file_name}", get(assets::serve_asset))
}
