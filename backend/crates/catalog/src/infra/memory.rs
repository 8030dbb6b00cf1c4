//! In-Memory Repository Implementation
//!
//! Mirrors the PostgreSQL store, including the cascade from a category to
//! its books. Used by tests and for running without a database.

use std::sync::Arc;

use chrono::Utc;
use kernel::id::{BookId, CategoryId};
use tokio::sync::RwLock;

use crate::domain::entity::{
    book::{Book, BookDraft, BookWithCategory},
    category::{Category, CategoryDraft},
};
use crate::domain::repository::{BookRepository, CategoryRepository};
use crate::error::{CatalogError, CatalogResult};

/// Rows kept in id order: ids only grow and removal preserves order
#[derive(Default)]
struct Catalog {
    categories: Vec<Category>,
    books: Vec<Book>,
    last_category_id: i32,
    last_book_id: i32,
}

impl Catalog {
    fn category(&self, id: CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    fn with_category(&self, book: &Book) -> Option<BookWithCategory> {
        self.category(book.category_id).map(|c| BookWithCategory {
            book: book.clone(),
            category_name: c.name.clone(),
        })
    }
}

/// In-memory catalog repository
///
/// Clones share the same underlying data.
#[derive(Clone, Default)]
pub struct InMemoryCatalogRepository {
    inner: Arc<RwLock<Catalog>>,
}

impl InMemoryCatalogRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CategoryRepository for InMemoryCatalogRepository {
    async fn list_categories(&self) -> CatalogResult<Vec<Category>> {
        Ok(self.inner.read().await.categories.clone())
    }

    async fn find_category(&self, id: CategoryId) -> CatalogResult<Option<Category>> {
        Ok(self.inner.read().await.category(id).cloned())
    }

    async fn create_category(&self, draft: &CategoryDraft) -> CatalogResult<Category> {
        let mut catalog = self.inner.write().await;

        catalog.last_category_id += 1;
        let now = Utc::now();
        let category = Category {
            id: CategoryId::new(catalog.last_category_id),
            name: draft.name.clone(),
            created_at: now,
            created_by: draft.actor.clone(),
            modified_at: now,
            modified_by: draft.actor.clone(),
        };
        catalog.categories.push(category.clone());

        Ok(category)
    }

    async fn update_category(
        &self,
        id: CategoryId,
        draft: &CategoryDraft,
    ) -> CatalogResult<Option<Category>> {
        let mut catalog = self.inner.write().await;

        Ok(catalog
            .categories
            .iter_mut()
            .find(|c| c.id == id)
            .map(|category| {
                category.name = draft.name.clone();
                category.modified_by = draft.actor.clone();
                category.modified_at = Utc::now();
                category.clone()
            }))
    }

    async fn delete_category(&self, id: CategoryId) -> CatalogResult<bool> {
        let mut catalog = self.inner.write().await;

        let before = catalog.categories.len();
        catalog.categories.retain(|c| c.id != id);
        if catalog.categories.len() == before {
            return Ok(false);
        }

        catalog.books.retain(|b| b.category_id != id);
        Ok(true)
    }

    async fn list_books_in_category(
        &self,
        id: CategoryId,
    ) -> CatalogResult<Vec<BookWithCategory>> {
        let catalog = self.inner.read().await;

        Ok(catalog
            .books
            .iter()
            .filter(|b| b.category_id == id)
            .filter_map(|b| catalog.with_category(b))
            .collect())
    }
}

impl BookRepository for InMemoryCatalogRepository {
    async fn list_books(&self) -> CatalogResult<Vec<BookWithCategory>> {
        let catalog = self.inner.read().await;

        Ok(catalog
            .books
            .iter()
            .filter_map(|b| catalog.with_category(b))
            .collect())
    }

    async fn find_book(&self, id: BookId) -> CatalogResult<Option<BookWithCategory>> {
        let catalog = self.inner.read().await;

        Ok(catalog
            .books
            .iter()
            .find(|b| b.id == id)
            .and_then(|b| catalog.with_category(b)))
    }

    async fn create_book(&self, draft: &BookDraft) -> CatalogResult<Book> {
        let mut catalog = self.inner.write().await;

        if catalog.category(draft.category_id).is_none() {
            return Err(CatalogError::UnknownCategory);
        }

        catalog.last_book_id += 1;
        let now = Utc::now();
        let book = Book {
            id: BookId::new(catalog.last_book_id),
            title: draft.title.clone(),
            description: draft.description.clone(),
            image_url: draft.image_url.clone(),
            release_year: draft.release_year,
            price: draft.price,
            total_page: draft.total_page,
            thickness: draft.thickness(),
            category_id: draft.category_id,
            created_at: now,
            created_by: draft.actor.clone(),
            modified_at: now,
            modified_by: draft.actor.clone(),
        };
        catalog.books.push(book.clone());

        Ok(book)
    }

    async fn update_book(&self, id: BookId, draft: &BookDraft) -> CatalogResult<Book> {
        let mut catalog = self.inner.write().await;

        if catalog.category(draft.category_id).is_none() {
            return Err(CatalogError::UnknownCategory);
        }

        let book = catalog
            .books
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or(CatalogError::BookNotFound)?;

        book.title = draft.title.clone();
        book.description = draft.description.clone();
        book.image_url = draft.image_url.clone();
        book.release_year = draft.release_year;
        book.price = draft.price;
        book.total_page = draft.total_page;
        book.thickness = draft.thickness();
        book.category_id = draft.category_id;
        book.modified_by = draft.actor.clone();
        book.modified_at = Utc::now();

        Ok(book.clone())
    }

    async fn delete_book(&self, id: BookId) -> CatalogResult<bool> {
        let mut catalog = self.inner.write().await;

        let before = catalog.books.len();
        catalog.books.retain(|b| b.id != id);
        Ok(catalog.books.len() != before)
    }
}
