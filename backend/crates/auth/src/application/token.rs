//! Token Manager
//!
//! Issues and validates the bearer tokens handed out at login.
//!
//! Tokens are HS256 JWTs. Validation pins the algorithm, so a token
//! signed with any other algorithm (HS384, RS256, `none`, ...) fails even
//! if its signature would otherwise check out.

use chrono::{DateTime, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};

use crate::application::config::AuthConfig;
use crate::domain::entity::{claims::TokenClaims, user::User};
use crate::error::{AuthError, AuthResult};

const ALGORITHM: Algorithm = Algorithm::HS256;

/// A freshly signed token
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

/// Signs and verifies bearer tokens
///
/// Stateless apart from its keys; share one instance behind an `Arc`.
pub struct TokenManager {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    issuer: String,
    ttl_secs: i64,
}

impl TokenManager {
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(ALGORITHM);
        validation.leeway = 0;
        validation.validate_exp = true;
        validation.validate_nbf = true;
        validation.set_issuer(&[config.issuer.as_str()]);
        validation.set_required_spec_claims(&["exp", "nbf", "iat", "iss", "sub"]);

        Self {
            encoding_key: EncodingKey::from_secret(&config.jwt_secret),
            decoding_key: DecodingKey::from_secret(&config.jwt_secret),
            validation,
            issuer: config.issuer.clone(),
            ttl_secs: config.token_ttl_secs(),
        }
    }

    /// Sign a token for `user`, valid from now for the configured window
    pub fn issue(&self, user: &User) -> AuthResult<IssuedToken> {
        self.issue_at(user, Utc::now().timestamp())
    }

    fn issue_at(&self, user: &User, now: i64) -> AuthResult<IssuedToken> {
        let exp = now.saturating_add(self.ttl_secs);
        let claims = TokenClaims {
            user_id: user.id,
            username: user.username.clone(),
            iss: self.issuer.clone(),
            sub: user.username.clone(),
            iat: now,
            nbf: now,
            exp,
        };

        let token = encode(&Header::new(ALGORITHM), &claims, &self.encoding_key)
            .map_err(|e| AuthError::Internal(format!("token signing failed: {e}")))?;
        let expires_at = DateTime::from_timestamp(exp, 0)
            .ok_or_else(|| AuthError::Internal("token expiry out of range".to_string()))?;

        Ok(IssuedToken { token, expires_at })
    }

    /// Verify signature, algorithm, issuer and time window
    ///
    /// `iat` is also mandatory: [`TokenClaims`] cannot be decoded without it.
    pub fn validate(&self, token: &str) -> AuthResult<TokenClaims> {
        decode::<TokenClaims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                tracing::debug!(reason = ?e.kind(), "Token validation failed");
                AuthError::InvalidToken
            })
    }
}
