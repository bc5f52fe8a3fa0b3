//! MIME type to file extension mapping for thumbnail assets.

/// Map a MIME type to the file extension used for stored thumbnails.
///
/// Unknown types fall back to `jpg` so the asset always has a usable name.
pub fn extension_for_media_type(media_type: &str) -> &'static str {
    match media_type.to_lowercase().as_str() {
        "image/jpeg" => "jpg",
        "image/png" => "png",
        "image/gif" => "gif",
        "image/webp" => "webp",
        "image/svg+xml" => "svg",
        _ => "jpg",
    }
}

/// Derive the MIME type for a stored asset from its file extension.
pub fn media_type_for_path(path: &str) -> String {
    let ext = path.rsplit('.').next().unwrap_or("").to_lowercase();
    let media_type = match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        _ => "application/octet-stream",
    };
    media_type.to_string()
}
