//! Static asset serving for locally stored thumbnails.

use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::Response;
use vidhub_core::AppError;
use vidhub_core::error::ErrorKind;
use vidhub_storage::media_type::media_type_for_path;

use crate::error::ApiError;
use crate::state::AppState;

/// GET /assets/:file_name
///
/// Serves a file from the assets root by exact name. Only flat names are
/// accepted; anything containing a path separator is rejected.
pub async fn serve_asset(
    State(state): State<AppState>,
    Path(file_name): Path<String>,
) -> Result<Response, ApiError> {
    if file_name.contains("..") || file_name.contains('/') || file_name.contains('\\') {
        return Err(AppError::validation("Invalid asset name").into());
    }

    let path = std::path::Path::new(&state.config.storage.assets_root).join(&file_name);

    let data = tokio::fs::read(&path).await.map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            AppError::not_found(format!("Asset not found: {file_name}"))
        } else {
            AppError::with_source(ErrorKind::Storage, "Failed to read asset", e)
        }
    })?;

    let media_type = media_type_for_path(&file_name);

    let response = Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, media_type)
        .header(header::CONTENT_LENGTH, data.len())
        .body(Body::from(data))
        .map_err(|e| AppError::internal(format!("Response build failed: {e}")))?;

    Ok(response)
}
