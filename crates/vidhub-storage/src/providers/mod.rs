//! Thumbnail store provider implementations.

pub mod local;
pub mod memory;

use std::sync::Arc;

use vidhub_core::config::StorageConfig;
use vidhub_core::error::AppError;
use vidhub_core::result::AppResult;
use vidhub_core::traits::ThumbnailStore;

pub use local::LocalThumbnailStore;
pub use memory::MemoryThumbnailStore;

/// Build the configured thumbnail store.
pub async fn from_config(
    config: &StorageConfig,
    public_base_url: &str,
) -> AppResult<Arc<dyn ThumbnailStore>> {
    match config.provider.as_str() {
        "memory" => Ok(Arc::new(MemoryThumbnailStore::new(public_base_url))),
        "local" => Ok(Arc::new(
            LocalThumbnailStore::new(&config.assets_root, public_base_url).await?,
        )),
        other => Err(AppError::configuration(format!(
            "Unknown thumbnail store provider: {other}"
        ))),
    }
}
