//! Thumbnail upload and retrieval handlers.

use axum::Json;
use axum::body::Body;
use axum::extract::{Multipart, Path, State};
use axum::http::{StatusCode, header};
use axum::response::Response;
use bytes::Bytes;
use vidhub_core::AppError;
use vidhub_core::types::Thumbnail;

use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::extractors::path::parse_uuid;
use crate::state::AppState;

/// GET /api/thumbnails/:video_id
///
/// Serves the stored thumbnail bytes with the media type recorded at
/// upload time. Responses carry `Cache-Control: no-store` so a re-upload
/// is visible immediately.
pub async fn get_thumbnail(
    State(state): State<AppState>,
    Path(video_id): Path<String>,
) -> Result<Response, ApiError> {
    let video_id = parse_uuid(&video_id)?;

    state
        .video_repo
        .find_by_id(video_id)
        .await?
        .ok_or_else(|| AppError::not_found("Video not found"))?;

    let thumbnail = state
        .thumbnail_store
        .get(video_id)
        .await?
        .ok_or_else(|| AppError::not_found("Thumbnail not found"))?;

    let response = Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, thumbnail.media_type.as_str())
        .header(header::CACHE_CONTROL, "no-store")
        .header(header::CONTENT_LENGTH, thumbnail.data.len())
        .body(Body::from(thumbnail.data))
        .map_err(|e| AppError::internal(format!("Response build failed: {e}")))?;

    Ok(response)
}

/// POST /api/videos/:video_id/thumbnail
///
/// Accepts a multipart form with a single `thumbnail` file part, stores
/// the image, and records its URL on the video. Only the video's owner
/// may upload.
pub async fn upload_thumbnail(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(video_id): Path<String>,
    mut multipart: Multipart,
) -> Result<Json<serde_json::Value>, ApiError> {
    let video_id = parse_uuid(&video_id)?;

    let mut video = state
        .video_repo
        .find_by_id(video_id)
        .await?
        .ok_or_else(|| AppError::validation("Video does not exist"))?;

    if !video.is_owned_by(auth.user_id()) {
        return Err(AppError::forbidden("Not allowed to update this video").into());
    }

    let mut media_type: Option<String> = None;
    let mut data: Option<Bytes> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::validation(format!("Multipart error: {e}")))?
    {
        let name = field.name().unwrap_or("").to_string();

        match name.as_str() {
            "thumbnail" => {
                if field.file_name().is_none() {
                    return Err(
                        AppError::validation("thumbnail must be a file part").into()
                    );
                }
                media_type = field.content_type().map(String::from);
                data = Some(
                    field
                        .bytes()
                        .await
                        .map_err(|e| AppError::validation(format!("Read error: {e}")))?,
                );
            }
            _ => {}
        }
    }

    let data = data.ok_or_else(|| AppError::validation("thumbnail file is required"))?;

    let max_bytes = state.config.storage.max_upload_size_bytes as usize;
    if data.len() > max_bytes {
        return Err(
            AppError::validation(format!("Thumbnail is too large (max {max_bytes} bytes)"))
                .into(),
        );
    }

    let media_type = media_type.unwrap_or_else(|| "application/octet-stream".to_string());
    let thumbnail = Thumbnail::new(data, media_type);

    tracing::info!(
        %video_id,
        user_id = %auth.user_id(),
        bytes = thumbnail.size_bytes(),
        "Uploading thumbnail"
    );

    let url = state.thumbnail_store.put(video_id, thumbnail).await?;

    video.thumbnail_url = Some(url);
    let updated = state.video_repo.update(&video).await?;

    Ok(Json(serde_json::json!({ "success": true, "data": updated })))
}
