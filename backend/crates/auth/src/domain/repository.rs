//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entity::user::{NewUser, User};
use crate::error::AuthResult;

/// Credential store
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Find user by exact user name
    async fn find_by_username(&self, username: &str) -> AuthResult<Option<User>>;

    /// Check if user name exists
    async fn exists_by_username(&self, username: &str) -> AuthResult<bool>;

    /// Insert a new user and return it with its assigned id
    async fn create(&self, user: &NewUser) -> AuthResult<User>;
}
