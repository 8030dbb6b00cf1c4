//! User Entity
//!
//! A stored credential. Users are provisioned out of band and are
//! read-only to the request path.

use chrono::{DateTime, Utc};
use kernel::id::UserId;

/// User entity
#[derive(Debug, Clone)]
pub struct User {
    /// Store-assigned identifier
    pub id: UserId,
    /// Unique login name
    pub username: String,
    /// Argon2id PHC string; never serialized to clients
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub created_by: String,
    pub modified_at: DateTime<Utc>,
    pub modified_by: String,
}

/// A user about to be inserted
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub password_hash: String,
    /// Audit actor recorded as creator and modifier
    pub actor: String,
}
