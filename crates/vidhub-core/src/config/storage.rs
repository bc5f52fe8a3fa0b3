//! Thumbnail storage configuration.

use serde::{Deserialize, Serialize};

/// Thumbnail storage configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Thumbnail store provider: `"memory"` or `"local"`.
    #[serde(default = "default_provider")]
    pub provider: String,
    /// Root directory for locally stored thumbnail assets.
    #[serde(default = "default_assets_root")]
    pub assets_root: String,
    /// Maximum thumbnail upload size in bytes (default 10 MiB).
    #[serde(default = "default_max_upload")]
    pub max_upload_size_bytes: u64,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            assets_root: default_assets_root(),
            max_upload_size_bytes: default_max_upload(),
        }
    }
}

fn default_provider() -> String {
    "memory".to_string()
}

fn default_assets_root() -> String {
    "data/assets".to_string()
}

fn default_max_upload() -> u64 {
    10_485_760 // 10 MiB
}
