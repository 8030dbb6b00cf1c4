//! Application Configuration
//!
//! Configuration for the Auth application layer.

use std::fmt;
use std::time::Duration;

/// Issuer written into and required from every token
pub const DEFAULT_ISSUER: &str = "book-management";

/// Token lifetime when none is configured
pub const DEFAULT_TOKEN_TTL: Duration = Duration::from_secs(24 * 3600);

/// Auth application configuration
#[derive(Clone)]
pub struct AuthConfig {
    /// HMAC secret for signing tokens
    pub jwt_secret: Vec<u8>,
    /// Token lifetime
    pub token_ttl: Duration,
    /// Token issuer (`iss`)
    pub issuer: String,
}

impl AuthConfig {
    /// Config with an explicit secret and lifetime
    pub fn new(jwt_secret: impl Into<Vec<u8>>, token_ttl: Duration) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            token_ttl,
            issuer: DEFAULT_ISSUER.to_string(),
        }
    }

    /// Create config with a random secret (for development)
    ///
    /// Tokens do not survive a restart.
    pub fn development() -> Self {
        use rand::RngCore;
        let mut secret = [0u8; 32];
        rand::rng().fill_bytes(&mut secret);
        Self::new(secret.to_vec(), DEFAULT_TOKEN_TTL)
    }

    /// Lifetime in whole seconds
    pub fn token_ttl_secs(&self) -> i64 {
        i64::try_from(self.token_ttl.as_secs()).unwrap_or(i64::MAX)
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &"[REDACTED]")
            .field("token_ttl", &self.token_ttl)
            .field("issuer", &self.issuer)
            .finish()
    }
}
