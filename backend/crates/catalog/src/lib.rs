//! Catalog Backend Module
//!
//! Categories and the books filed under them.
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, thickness classification, repository traits
//! - `application/` - Category and book services
//! - `infra/` - PostgreSQL and in-memory stores
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! Every route here expects the caller to be authenticated; the binary
//! puts the auth gate in front of [`catalog_router`].

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use application::{BookService, CategoryService};
pub use error::{CatalogError, CatalogResult};
pub use infra::{memory::InMemoryCatalogRepository, postgres::PgCatalogRepository};
pub use presentation::router::{catalog_router, catalog_router_generic};
