//! Shared Kernel - Domain-crossing minimal core
//!
//! This crate contains the "smallest core" of domain vocabulary:
//! - Common error types and result aliases
//! - Typed integer IDs for stored entities
//! - The JSON response envelope shared by every endpoint
//! - The request validator injected into services
//! - The authenticated caller identity (with the `axum` feature)
//!
//! **Design Principle**: Only include things that are "hard to change"
//! and have consistent meaning across all domains.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod id;
pub mod response;
pub mod validation;

#[cfg(feature = "axum")]
pub mod extract;
#[cfg(feature = "axum")]
pub mod identity;
