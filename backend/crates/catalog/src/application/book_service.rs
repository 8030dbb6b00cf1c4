//! Book Service

use std::sync::Arc;

use kernel::id::{BookId, CategoryId};
use kernel::validation::RequestValidator;
use validator::Validate;

use crate::domain::entity::book::{Book, BookDraft, BookWithCategory};
use crate::domain::repository::BookRepository;
use crate::error::{CatalogError, CatalogResult};

/// Book create/update input
///
/// There is no thickness field: it is derived from `total_page`.
#[derive(Debug, Clone, Default, Validate)]
pub struct BookInput {
    #[validate(required, length(min = 1, max = 255))]
    pub title: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    #[validate(required, range(min = 1980, max = 2024))]
    pub release_year: Option<i32>,
    #[validate(required, range(min = 0))]
    pub price: Option<i32>,
    #[validate(required, range(min = 1))]
    pub total_page: Option<i32>,
    #[validate(required)]
    pub category_id: Option<CategoryId>,
}

impl BookInput {
    fn into_draft(self, actor: &str) -> Option<BookDraft> {
        Some(BookDraft::new(
            self.title?,
            self.description.unwrap_or_default(),
            self.image_url.unwrap_or_default(),
            self.release_year?,
            self.price?,
            self.total_page?,
            self.category_id?,
            actor.to_string(),
        ))
    }
}

/// Book service
pub struct BookService<R>
where
    R: BookRepository,
{
    repo: Arc<R>,
    validator: Arc<RequestValidator>,
}

impl<R> BookService<R>
where
    R: BookRepository,
{
    pub fn new(repo: Arc<R>, validator: Arc<RequestValidator>) -> Self {
        Self { repo, validator }
    }

    /// All books with their category name, by id
    pub async fn list(&self) -> CatalogResult<Vec<BookWithCategory>> {
        self.repo.list_books().await
    }

    pub async fn get(&self, id: BookId) -> CatalogResult<BookWithCategory> {
        self.repo
            .find_book(id)
            .await?
            .ok_or(CatalogError::BookNotFound)
    }

    pub async fn create(&self, input: BookInput, actor: &str) -> CatalogResult<Book> {
        let draft = self.validate(input, actor)?;
        let book = self.repo.create_book(&draft).await?;

        tracing::info!(
            book_id = %book.id,
            category_id = %book.category_id,
            thickness = %book.thickness,
            actor = %actor,
            "Book created"
        );

        Ok(book)
    }

    pub async fn update(&self, id: BookId, input: BookInput, actor: &str) -> CatalogResult<Book> {
        self.get(id).await?;
        let draft = self.validate(input, actor)?;
        let book = self.repo.update_book(id, &draft).await?;

        tracing::info!(
            book_id = %id,
            category_id = %book.category_id,
            thickness = %book.thickness,
            actor = %actor,
            "Book updated"
        );

        Ok(book)
    }

    pub async fn delete(&self, id: BookId) -> CatalogResult<()> {
        if !self.repo.delete_book(id).await? {
            return Err(CatalogError::BookNotFound);
        }

        tracing::info!(book_id = %id, "Book deleted");

        Ok(())
    }

    fn validate(&self, input: BookInput, actor: &str) -> CatalogResult<BookDraft> {
        self.validator
            .validate(&input)
            .map_err(CatalogError::Validation)?;

        input
            .into_draft(actor)
            .ok_or_else(|| CatalogError::Internal("validated book input is incomplete".into()))
    }
}
