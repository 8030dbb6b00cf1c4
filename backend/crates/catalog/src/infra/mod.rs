//! Infrastructure Layer
//!
//! Database implementations of the category and book stores.

pub mod memory;
pub mod postgres;

pub use memory::InMemoryCatalogRepository;
pub use postgres::PgCatalogRepository;
