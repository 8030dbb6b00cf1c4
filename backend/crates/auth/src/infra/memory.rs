//! In-Memory Repository Implementation
//!
//! Same semantics as the PostgreSQL store, kept in process. Used by tests
//! and for running without a database.

use std::sync::Arc;

use chrono::Utc;
use kernel::id::UserId;
use tokio::sync::RwLock;

use crate::domain::entity::user::{NewUser, User};
use crate::domain::repository::UserRepository;
use crate::error::{AuthError, AuthResult};

#[derive(Default)]
struct Users {
    rows: Vec<User>,
    next_id: i32,
}

/// In-memory credential store
///
/// Clones share the same underlying data.
#[derive(Clone, Default)]
pub struct InMemoryUserRepository {
    inner: Arc<RwLock<Users>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl UserRepository for InMemoryUserRepository {
    async fn find_by_username(&self, username: &str) -> AuthResult<Option<User>> {
        let users = self.inner.read().await;
        Ok(users.rows.iter().find(|u| u.username == username).cloned())
    }

    async fn exists_by_username(&self, username: &str) -> AuthResult<bool> {
        let users = self.inner.read().await;
        Ok(users.rows.iter().any(|u| u.username == username))
    }

    async fn create(&self, user: &NewUser) -> AuthResult<User> {
        let mut users = self.inner.write().await;

        if users.rows.iter().any(|u| u.username == user.username) {
            return Err(AuthError::UserNameTaken);
        }

        users.next_id += 1;
        let now = Utc::now();
        let created = User {
            id: UserId::new(users.next_id),
            username: user.username.clone(),
            password_hash: user.password_hash.clone(),
            created_at: now,
            created_by: user.actor.clone(),
            modified_at: now,
            modified_by: user.actor.clone(),
        };
        users.rows.push(created.clone());

        Ok(created)
    }
}
