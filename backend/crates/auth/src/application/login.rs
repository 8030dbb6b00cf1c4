//! Login Use Case
//!
//! Verifies a user name and password and issues a bearer token.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use kernel::id::UserId;
use kernel::validation::RequestValidator;
use platform::password::{ClearTextPassword, HashedPassword};
use validator::Validate;

use crate::application::token::TokenManager;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::error::{AuthError, AuthResult};

/// Login input
#[derive(Debug, Validate)]
pub struct LoginInput {
    #[validate(required, length(min = 1, message = "username is required"))]
    pub username: Option<String>,
    #[validate(required, length(min = 1, message = "password is required"))]
    pub password: Option<String>,
}

/// Login output
#[derive(Debug)]
pub struct LoginOutput {
    pub token: String,
    pub expires_at: DateTime<Utc>,
    pub user_id: UserId,
    pub username: String,
}

/// Login use case
pub struct LoginUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    tokens: Arc<TokenManager>,
    validator: Arc<RequestValidator>,
}

impl<U> LoginUseCase<U>
where
    U: UserRepository,
{
    pub fn new(
        user_repo: Arc<U>,
        tokens: Arc<TokenManager>,
        validator: Arc<RequestValidator>,
    ) -> Self {
        Self {
            user_repo,
            tokens,
            validator,
        }
    }

    pub async fn execute(&self, input: LoginInput) -> AuthResult<LoginOutput> {
        self.validator
            .validate(&input)
            .map_err(AuthError::Validation)?;

        let username = input.username.unwrap_or_default();
        let password = ClearTextPassword::from_input(input.password.unwrap_or_default());

        let user = self.user_repo.find_by_username(&username).await?;

        let stored_hash = match &user {
            Some(user) => match HashedPassword::from_phc_string(user.password_hash.as_str()) {
                Ok(hash) => Some(hash),
                Err(_) => {
                    tracing::warn!(user_id = %user.id, "Stored password hash is malformed");
                    None
                }
            },
            None => None,
        };

        let password_valid = verify_off_thread(stored_hash, password).await?;

        let user = match user {
            Some(user) if password_valid => user,
            _ => return Err(AuthError::InvalidCredentials),
        };

        let issued = self.tokens.issue(&user)?;

        tracing::info!(user_id = %user.id, "User logged in");

        let User { id, username, .. } = user;
        Ok(LoginOutput {
            token: issued.token,
            expires_at: issued.expires_at,
            user_id: id,
            username,
        })
    }
}

/// Run the Argon2 comparison on the blocking pool
///
/// Without a usable stored hash the dummy hash is verified instead, so the
/// call costs the same either way and always reports a mismatch.
async fn verify_off_thread(
    stored_hash: Option<HashedPassword>,
    password: ClearTextPassword,
) -> AuthResult<bool> {
    let verified = tokio::task::spawn_blocking(move || match stored_hash {
        Some(hash) => Ok(hash.verify(&password)),
        None => HashedPassword::dummy().map(|dummy| {
            let _ = dummy.verify(&password);
            false
        }),
    })
    .await?;

    verified.map_err(|e| AuthError::Internal(e.to_string()))
}
