//! In-memory thumbnail store.

use async_trait::async_trait;
use dashmap::DashMap;
use tracing::debug;
use uuid::Uuid;

use vidhub_core::result::AppResult;
use vidhub_core::traits::ThumbnailStore;
use vidhub_core::types::Thumbnail;

/// In-memory thumbnail store backed by a concurrent map.
///
/// Contents live for the process lifetime. Concurrent uploads for the same
/// video resolve last-write-wins.
#[derive(Debug)]
pub struct MemoryThumbnailStore {
    /// Map of video ID to thumbnail.
    entries: DashMap<Uuid, Thumbnail>,
    /// Base URL used when building public thumbnail URLs.
    public_base_url: String,
}

impl MemoryThumbnailStore {
    /// Create a new empty in-memory store.
    pub fn new(public_base_url: &str) -> Self {
        Self {
            entries: DashMap::new(),
            public_base_url: public_base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl ThumbnailStore for MemoryThumbnailStore {
    fn provider_type(&self) -> &str {
        "memory"
    }

    async fn put(&self, video_id: Uuid, thumbnail: Thumbnail) -> AppResult<String> {
        debug!(%video_id, bytes = thumbnail.size_bytes(), "Stored thumbnail in memory");
        self.entries.insert(video_id, thumbnail);
        Ok(format!(
            "{}/api/thumbnails/{}",
            self.public_base_url, video_id
        ))
    }

    async fn get(&self, video_id: Uuid) -> AppResult<Option<Thumbnail>> {
        Ok(self
            .entries
            .get(&video_id)
            .map(|entry| entry.value().clone()))
    }
}
