//! Request-identity extractor.
//!
//! The catalog treats the requesting user's identity as optional input:
//! reads use it to enrich results with the user's own ratings, rating
//! mutations require it. Identity arrives as a UUID in the `x-user-id`
//! header, placed there by the gateway that owns authentication; this
//! service performs no policy evaluation of its own.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use reelbase_core::error::CoreError;
use reelbase_core::types::UserId;

use crate::error::AppError;

/// Header carrying the requesting user's id.
pub const USER_ID_HEADER: &str = "x-user-id";

/// The optional requesting-user identity.
///
/// Extraction succeeds with `None` when the header is absent and
/// rejects with 400 when the header is present but malformed.
#[derive(Debug, Clone, Copy)]
pub struct RequestUser(pub Option<UserId>);

impl RequestUser {
    /// Unwrap the identity, rejecting with 401 when absent. Used by
    /// rating mutations, which are meaningless without a user.
    pub fn require(self) -> Result<UserId, AppError> {
        self.0.ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(format!(
                "Missing {USER_ID_HEADER} header"
            )))
        })
    }
}

impl<S> FromRequestParts<S> for RequestUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Some(value) = parts.headers.get(USER_ID_HEADER) else {
            return Ok(Self(None));
        };

        let user_id = value
            .to_str()
            .ok()
            .and_then(|raw| raw.parse::<UserId>().ok())
            .ok_or_else(|| {
                AppError::BadRequest(format!("{USER_ID_HEADER} header must be a valid UUID"))
            })?;

        Ok(Self(Some(user_id)))
    }
}
