//! Domain Layer
//!
//! Contains entities, value objects, and repository traits.

pub mod entity;
pub mod repository;
pub mod value_object;

// Re-exports
pub use entity::{
    book::{Book, BookDraft, BookWithCategory},
    category::{Category, CategoryDraft},
};
pub use repository::{BookRepository, CategoryRepository};
pub use value_object::thickness::Thickness;
