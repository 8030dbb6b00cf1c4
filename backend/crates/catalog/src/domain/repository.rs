//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.
//!
//! Listings are ordered by id ascending. Writes that address a missing row
//! report it instead of succeeding silently.

use kernel::id::{BookId, CategoryId};

use crate::domain::entity::{
    book::{Book, BookDraft, BookWithCategory},
    category::{Category, CategoryDraft},
};
use crate::error::CatalogResult;

/// Category store
#[trait_variant::make(CategoryRepository: Send)]
pub trait LocalCategoryRepository {
    async fn list_categories(&self) -> CatalogResult<Vec<Category>>;

    async fn find_category(&self, id: CategoryId) -> CatalogResult<Option<Category>>;

    async fn create_category(&self, draft: &CategoryDraft) -> CatalogResult<Category>;

    /// Overwrite name and modifier; `None` if the category is gone
    async fn update_category(
        &self,
        id: CategoryId,
        draft: &CategoryDraft,
    ) -> CatalogResult<Option<Category>>;

    /// Delete the category and, with it, its books; `false` if absent
    async fn delete_category(&self, id: CategoryId) -> CatalogResult<bool>;

    /// Books filed under one category
    async fn list_books_in_category(&self, id: CategoryId)
    -> CatalogResult<Vec<BookWithCategory>>;
}

/// Book store
#[trait_variant::make(BookRepository: Send)]
pub trait LocalBookRepository {
    async fn list_books(&self) -> CatalogResult<Vec<BookWithCategory>>;

    async fn find_book(&self, id: BookId) -> CatalogResult<Option<BookWithCategory>>;

    /// Insert atomically with the category check
    ///
    /// Fails with `UnknownCategory` when `draft.category_id` does not exist.
    async fn create_book(&self, draft: &BookDraft) -> CatalogResult<Book>;

    /// Overwrite every mutable field atomically with the category check
    ///
    /// Creation audit fields are preserved. Fails with `UnknownCategory` or
    /// `BookNotFound`.
    async fn update_book(&self, id: BookId, draft: &BookDraft) -> CatalogResult<Book>;

    /// `false` if absent
    async fn delete_book(&self, id: BookId) -> CatalogResult<bool>;
}
