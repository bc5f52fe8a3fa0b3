//! Local filesystem thumbnail store.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tracing::debug;
use uuid::Uuid;

use vidhub_core::error::{AppError, ErrorKind};
use vidhub_core::result::AppResult;
use vidhub_core::traits::ThumbnailStore;
use vidhub_core::types::Thumbnail;

use crate::media_type::{extension_for_media_type, media_type_for_path};

/// Local filesystem thumbnail store.
///
/// Thumbnails are written to `<root>/<videoId>.<ext>` and served as static
/// assets. Writes go to a temporary file and are moved into place with an
/// atomic rename, so readers never observe a partially written thumbnail.
/// Re-uploading with a different media type removes the asset stored under
/// the previous extension.
#[derive(Debug, Clone)]
pub struct LocalThumbnailStore {
    /// Root directory for all thumbnail assets.
    root: PathBuf,
    /// Base URL used when building public asset URLs.
    public_base_url: String,
}

impl LocalThumbnailStore {
    /// Create a new local store rooted at the given path.
    pub async fn new(root_path: &str, public_base_url: &str) -> AppResult<Self> {
        let root = PathBuf::from(root_path);
        fs::create_dir_all(&root).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to create assets root: {}", root.display()),
                e,
            )
        })?;
        Ok(Self {
            root,
            public_base_url: public_base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Find the stored asset file for a video, if any.
    ///
    /// The extension depends on the uploaded media type, so the lookup scans
    /// for any file whose stem is the video ID.
    async fn find_asset(&self, video_id: Uuid) -> AppResult<Option<PathBuf>> {
        let stem = video_id.to_string();
        let mut entries = fs::read_dir(&self.root).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to read assets root: {}", self.root.display()),
                e,
            )
        })?;

        while let Some(entry) = entries.next_entry().await.map_err(|e| {
            AppError::with_source(ErrorKind::Storage, "Failed to scan assets root", e)
        })? {
            let path = entry.path();
            if path.file_stem().and_then(|s| s.to_str()) == Some(stem.as_str()) {
                return Ok(Some(path));
            }
        }
        Ok(None)
    }

    /// Remove stored assets for a video, keeping only `keep`.
    async fn remove_stale_assets(&self, video_id: Uuid, keep: &Path) -> AppResult<()> {
        let stem = video_id.to_string();
        let mut entries = fs::read_dir(&self.root).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to read assets root: {}", self.root.display()),
                e,
            )
        })?;

        while let Some(entry) = entries.next_entry().await.map_err(|e| {
            AppError::with_source(ErrorKind::Storage, "Failed to scan assets root", e)
        })? {
            let path = entry.path();
            if path == keep {
                continue;
            }
            if path.file_stem().and_then(|s| s.to_str()) == Some(stem.as_str()) {
                fs::remove_file(&path).await.map_err(|e| {
                    AppError::with_source(
                        ErrorKind::Storage,
                        format!("Failed to remove stale thumbnail: {}", path.display()),
                        e,
                    )
                })?;
                debug!(path = %path.display(), "Removed stale thumbnail asset");
            }
        }
        Ok(())
    }
}

#[async_trait]
impl ThumbnailStore for LocalThumbnailStore {
    fn provider_type(&self) -> &str {
        "local"
    }

    async fn put(&self, video_id: Uuid, thumbnail: Thumbnail) -> AppResult<String> {
        let ext = extension_for_media_type(&thumbnail.media_type);
        let file_name = format!("{video_id}.{ext}");
        let final_path = self.root.join(&file_name);
        let tmp_path = self.root.join(format!(".{video_id}.{ext}.tmp"));

        fs::write(&tmp_path, &thumbnail.data).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to write thumbnail: {file_name}"),
                e,
            )
        })?;

        fs::rename(&tmp_path, &final_path).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to move thumbnail into place: {file_name}"),
                e,
            )
        })?;

        self.remove_stale_assets(video_id, &final_path).await?;

        debug!(file = %file_name, bytes = thumbnail.size_bytes(), "Wrote thumbnail asset");
        Ok(format!("{}/assets/{}", self.public_base_url, file_name))
    }

    async fn get(&self, video_id: Uuid) -> AppResult<Option<Thumbnail>> {
        let path = match self.find_asset(video_id).await? {
            Some(path) => path,
            None => return Ok(None),
        };

        let data = fs::read(&path).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to read thumbnail: {}", path.display()),
                e,
            )
        })?;

        let media_type = media_type_for_path(&path.to_string_lossy());
        Ok(Some(Thumbnail::new(data, media_type)))
    }
}
