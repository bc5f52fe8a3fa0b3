//! Bearer-token authentication extractor.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use vidhub_auth::Claims;
use vidhub_core::AppError;

use crate::error::ApiError;
use crate::state::AppState;

/// Extracts and validates the `Authorization: Bearer <token>` header.
///
/// Rejects with 401 when the header is missing, malformed, or the token
/// fails validation. Handlers that take this extractor are authenticated
/// before their body runs.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);

impl AuthUser {
    /// ID of the authenticated user.
    pub fn user_id(&self) -> uuid::Uuid {
        self.0.user_id()
    }
}

impl std::ops::Deref for AuthUser {
    type Target = Claims;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get("authorization")
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| AppError::unauthorized("Missing Authorization header"))?;

        let token = header
            .strip_prefix("Bearer ")
            .ok_or_else(|| AppError::unauthorized("Invalid Authorization header format"))?;

        let claims = state.jwt_decoder.decode_access_token(token)?;

        Ok(AuthUser(claims))
    }
}
