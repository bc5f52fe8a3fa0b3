//! Thumbnail store trait for pluggable thumbnail persistence backends.

use async_trait::async_trait;
use uuid::Uuid;

use crate::result::AppResult;
use crate::types::Thumbnail;

/// Trait for thumbnail persistence backends.
///
/// Implementations exist for an in-memory map and the local filesystem.
/// The [`ThumbnailStore`] trait is defined here in `vidhub-core` and
/// implemented in `vidhub-storage`.
///
/// A video has at most one thumbnail. Storing a new thumbnail for a video
/// replaces whatever was there before.
#[async_trait]
pub trait ThumbnailStore: Send + Sync + std::fmt::Debug + 'static {
    /// Return the provider type name (e.g., "memory", "local").
    fn provider_type(&self) -> &str;

    /// Persist the thumbnail for a video, replacing any previous one.
    ///
    /// Returns the public URL under which the thumbnail is reachable.
    async fn put(&self, video_id: Uuid, thumbnail: Thumbnail) -> AppResult<String>;

    /// Retrieve the thumbnail for a video, or `None` if the video has none.
    async fn get(&self, video_id: Uuid) -> AppResult<Option<Thumbnail>>;
}
