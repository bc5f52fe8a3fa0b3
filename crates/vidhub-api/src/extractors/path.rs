//! Path parameter parsing helpers.

use uuid::Uuid;
use vidhub_core::AppError;

/// Parses a path segment as a UUID, rejecting with a validation error
/// instead of Axum's default rejection so the response body matches the
/// rest of the API.
pub fn parse_uuid(s: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(s).map_err(|_| AppError::validation(format!("Invalid UUID: {s}")))
}
