//! Application Layer
//!
//! Services orchestrating validation, existence checks and store calls.
//! They hold no state between calls and are built per request.

pub mod book_service;
pub mod category_service;

// Re-exports
pub use book_service::{BookInput, BookService};
pub use category_service::{CategoryInput, CategoryService};
