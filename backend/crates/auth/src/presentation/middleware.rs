//! Auth Middleware
//!
//! The auth gate placed in front of every protected route. It accepts
//! exactly `Authorization: Bearer <token>` and, once the token validates,
//! stores the caller as a [`CurrentUser`] request extension.

use axum::body::Body;
use axum::extract::State;
use axum::http::{HeaderValue, Request, header};
use axum::middleware::Next;
use axum::response::Response;
use kernel::identity::CurrentUser;
use std::sync::Arc;

use crate::application::token::TokenManager;
use crate::error::{AuthError, AuthResult};

/// Middleware that requires a valid bearer token
///
/// Use with `axum::middleware::from_fn_with_state(tokens, require_bearer_token)`.
pub async fn require_bearer_token(
    State(tokens): State<Arc<TokenManager>>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AuthError> {
    let claims = {
        let token = bearer_token(req.headers().get(header::AUTHORIZATION))?;
        tokens.validate(token)?
    };

    req.extensions_mut().insert(CurrentUser {
        user_id: claims.user_id,
        username: claims.username,
    });

    Ok(next.run(req).await)
}

/// Extract the token from an `Authorization` header value
///
/// The value must split on single spaces into exactly `Bearer` and a
/// non-empty token.
pub fn bearer_token(value: Option<&HeaderValue>) -> AuthResult<&str> {
    let value = match value {
        None => return Err(AuthError::MissingAuthorization),
        Some(v) if v.is_empty() => return Err(AuthError::MissingAuthorization),
        Some(v) => v.to_str().map_err(|_| AuthError::MalformedAuthorization)?,
    };

    let parts: Vec<&str> = value.split(' ').collect();
    match parts.as_slice() {
        ["Bearer", ""] => Err(AuthError::MissingToken),
        ["Bearer", token] => Ok(*token),
        _ => Err(AuthError::MalformedAuthorization),
    }
}
