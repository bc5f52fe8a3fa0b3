//! Video entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A video hosted on VidHub.
///
/// Video records are created by the wider platform; the thumbnail service
/// reads them for ownership checks and updates `thumbnail_url` after an
/// upload.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Video {
    /// Unique video identifier.
    pub id: Uuid,
    /// The user who owns the video.
    pub owner_id: Uuid,
    /// The video title.
    pub title: String,
    /// Optional free-form description.
    pub description: Option<String>,
    /// Public URL of the current thumbnail, if one has been uploaded.
    pub thumbnail_url: Option<String>,
    /// When the video record was created.
    pub created_at: DateTime<Utc>,
    /// When the video record was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Video {
    /// Check whether the given user owns this video.
    pub fn is_owned_by(&self, user_id: Uuid) -> bool {
        self.owner_id == user_id
    }
}

/// Input for creating a new video record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateVideo {
    /// The user who owns the video.
    pub owner_id: Uuid,
    /// The video title.
    pub title: String,
    /// Optional free-form description.
    pub description: Option<String>,
}
