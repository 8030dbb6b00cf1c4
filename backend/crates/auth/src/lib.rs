//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, token claims, repository traits
//! - `application/` - Token manager, login and seeding use cases
//! - `infra/` - PostgreSQL and in-memory credential stores
//! - `presentation/` - Login handler, auth gate middleware, router
//!
//! ## Security Model
//! - Passwords hashed with Argon2id, verified on the blocking pool
//! - Unknown user names cost the same as wrong passwords
//! - Bearer tokens are HS256 JWTs; any other algorithm is rejected

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use application::config::AuthConfig;
pub use application::token::TokenManager;
pub use error::{AuthError, AuthResult};
pub use infra::{memory::InMemoryUserRepository, postgres::PgUserRepository};
pub use presentation::middleware::require_bearer_token;
pub use presentation::router::{auth_router, auth_router_generic};
