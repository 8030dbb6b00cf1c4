//! Token Claims
//!
//! The signed payload carried by every bearer token.

use kernel::id::UserId;
use serde::{Deserialize, Serialize};

/// JWT claims
///
/// Timestamps are seconds since the Unix epoch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    pub user_id: UserId,
    pub username: String,
    /// Issuer
    pub iss: String,
    /// Subject (the user name)
    pub sub: String,
    /// Issued at
    pub iat: i64,
    /// Not before
    pub nbf: i64,
    /// Expires at
    pub exp: i64,
}
