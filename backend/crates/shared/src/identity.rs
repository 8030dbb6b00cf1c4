//! Caller Identity
//!
//! The authentication middleware stores a [`CurrentUser`] in the request
//! extensions; handlers take it as an extractor.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::error::app_error::AppError;
use crate::id::UserId;

/// Identity carried by a validated token
///
/// There is a single implicit role; capabilities, if ever needed, belong
/// here rather than in ad hoc checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUser {
    pub user_id: UserId,
    pub username: String,
}

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<CurrentUser>()
            .cloned()
            .ok_or_else(|| AppError::unauthorized("Unauthorized"))
    }
}
