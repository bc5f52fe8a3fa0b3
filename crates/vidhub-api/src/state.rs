//! Shared application state.

use std::sync::Arc;

use sqlx::SqlitePool;
use vidhub_auth::JwtDecoder;
use vidhub_core::config::AppConfig;
use vidhub_core::traits::ThumbnailStore;
use vidhub_database::repositories::VideoRepository;

/// State shared by every handler. Cloning is cheap: everything inside is
/// an `Arc` or a pool handle.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration loaded at startup.
    pub config: Arc<AppConfig>,

    // ── Infrastructure ───────────────────────────────────────
    /// SQLite connection pool.
    pub db_pool: SqlitePool,
    /// Thumbnail persistence backend.
    pub thumbnail_store: Arc<dyn ThumbnailStore>,

    // ── Auth ─────────────────────────────────────────────────
    /// Verifies access tokens on protected routes.
    pub jwt_decoder: Arc<JwtDecoder>,

    // ── Repositories ─────────────────────────────────────────
    /// Video metadata access.
    pub video_repo: Arc<VideoRepository>,
}
