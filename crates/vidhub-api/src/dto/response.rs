//! Response envelope types.

use serde::Serialize;

/// Standard success envelope: `{ "success": true, "data": ... }`.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Body for `GET /api/health`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Body for `GET /api/health/detailed`.
#[derive(Debug, Serialize)]
pub struct DetailedHealthResponse {
    pub status: String,
    /// `"connected"` or `"unavailable"`.
    pub database: String,
    /// Provider type of the active thumbnail store.
    pub storage: String,
}
