//! Seed User Use Case
//!
//! Provisions an account from configuration at startup. There is no
//! registration endpoint; this is the only way users are created.

use std::sync::Arc;

use platform::password::ClearTextPassword;

use crate::domain::entity::user::{NewUser, User};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::user_name::UserName;
use crate::error::{AuthError, AuthResult};

/// Audit actor recorded for provisioned accounts
pub const SYSTEM_ACTOR: &str = "system";

/// Seed input
pub struct SeedUserInput {
    pub username: String,
    pub password: String,
}

/// What seeding did
#[derive(Debug)]
pub enum SeedOutcome {
    Created(User),
    AlreadyExists,
}

/// Seed user use case
pub struct SeedUserUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
}

impl<U> SeedUserUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }

    pub async fn execute(&self, input: SeedUserInput) -> AuthResult<SeedOutcome> {
        let mut errors = Vec::new();

        let username = UserName::new(&input.username)
            .map_err(|e| errors.push(e.to_string()))
            .ok();
        let password = ClearTextPassword::new(input.password)
            .map_err(|e| errors.push(e.to_string()))
            .ok();

        let (Some(username), Some(password)) = (username, password) else {
            errors.sort();
            return Err(AuthError::Validation(errors));
        };

        if self.user_repo.exists_by_username(username.as_str()).await? {
            tracing::debug!(username = %username, "Seed user already exists");
            return Ok(SeedOutcome::AlreadyExists);
        }

        let hashed = tokio::task::spawn_blocking(move || password.hash())
            .await?
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        let user = self
            .user_repo
            .create(&NewUser {
                username: username.into_inner(),
                password_hash: hashed.as_phc_string().to_string(),
                actor: SYSTEM_ACTOR.to_string(),
            })
            .await?;

        tracing::info!(user_id = %user.id, username = %user.username, "Seed user created");

        Ok(SeedOutcome::Created(user))
    }
}
