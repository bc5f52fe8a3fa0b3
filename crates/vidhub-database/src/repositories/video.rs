//! Video repository implementation.

use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

use vidhub_core::error::{AppError, ErrorKind};
use vidhub_core::result::AppResult;
use vidhub_core::types::{CreateVideo, Video};

/// Repository for video lookup and update operations.
#[derive(Debug, Clone)]
pub struct VideoRepository {
    pool: SqlitePool,
}

impl VideoRepository {
    /// Create a new video repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Find a video by ID.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Video>> {
        sqlx::query_as::<_, Video>("SELECT * FROM videos WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find video", e))
    }

    /// Insert a new video record.
    pub async fn create(&self, input: CreateVideo) -> AppResult<Video> {
        let now = Utc::now();
        let video = Video {
            id: Uuid::new_v4(),
            owner_id: input.owner_id,
            title: input.title,
            description: input.description,
            thumbnail_url: None,
            created_at: now,
            updated_at: now,
        };

        sqlx::query(
            "INSERT INTO videos (id, owner_id, title, description, thumbnail_url, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(video.id)
        .bind(video.owner_id)
        .bind(&video.title)
        .bind(&video.description)
        .bind(&video.thumbnail_url)
        .bind(video.created_at)
        .bind(video.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create video", e))?;

        Ok(video)
    }

    /// Update a video record, stamping `updated_at`.
    pub async fn update(&self, video: &Video) -> AppResult<Video> {
        sqlx::query_as::<_, Video>(
            "UPDATE videos SET title = ?, description = ?, thumbnail_url = ?, updated_at = ? \
             WHERE id = ? RETURNING *",
        )
        .bind(&video.title)
        .bind(&video.description)
        .bind(&video.thumbnail_url)
        .bind(Utc::now())
        .bind(video.id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update video", e))?
        .ok_or_else(|| AppError::not_found(format!("Video {} not found", video.id)))
    }
}
