//! Thumbnail payload type.

use bytes::Bytes;

/// An in-flight thumbnail image: the raw bytes plus the media type they
/// were uploaded with.
///
/// The bytes are opaque to the service. No decoding or validation of the
/// image content is performed.
#[derive(Debug, Clone)]
pub struct Thumbnail {
    /// Raw image bytes exactly as uploaded.
    pub data: Bytes,
    /// MIME type supplied by the client (e.g. `image/png`).
    pub media_type: String,
}

impl Thumbnail {
    /// Create a thumbnail from raw bytes and a media type.
    pub fn new(data: impl Into<Bytes>, media_type: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            media_type: media_type.into(),
        }
    }

    /// Size of the thumbnail in bytes.
    pub fn size_bytes(&self) -> usize {
        self.data.len()
    }
}
