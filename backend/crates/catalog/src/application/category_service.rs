//! Category Service

use std::sync::Arc;

use kernel::id::CategoryId;
use kernel::validation::RequestValidator;
use validator::Validate;

use crate::domain::entity::{
    book::BookWithCategory,
    category::{Category, CategoryDraft},
};
use crate::domain::repository::CategoryRepository;
use crate::error::{CatalogError, CatalogResult};

/// Category create/update input
#[derive(Debug, Clone, Default, Validate)]
pub struct CategoryInput {
    #[validate(required, length(min = 1, max = 255))]
    pub name: Option<String>,
}

impl CategoryInput {
    fn into_draft(self, actor: &str) -> Option<CategoryDraft> {
        Some(CategoryDraft {
            name: self.name?,
            actor: actor.to_string(),
        })
    }
}

/// Category service
pub struct CategoryService<R>
where
    R: CategoryRepository,
{
    repo: Arc<R>,
    validator: Arc<RequestValidator>,
}

impl<R> CategoryService<R>
where
    R: CategoryRepository,
{
    pub fn new(repo: Arc<R>, validator: Arc<RequestValidator>) -> Self {
        Self { repo, validator }
    }

    /// All categories, by id
    pub async fn list(&self) -> CatalogResult<Vec<Category>> {
        self.repo.list_categories().await
    }

    pub async fn get(&self, id: CategoryId) -> CatalogResult<Category> {
        self.repo
            .find_category(id)
            .await?
            .ok_or(CatalogError::CategoryNotFound)
    }

    pub async fn create(&self, input: CategoryInput, actor: &str) -> CatalogResult<Category> {
        let draft = self.validate(input, actor)?;
        let category = self.repo.create_category(&draft).await?;

        tracing::info!(category_id = %category.id, actor = %actor, "Category created");

        Ok(category)
    }

    pub async fn update(
        &self,
        id: CategoryId,
        input: CategoryInput,
        actor: &str,
    ) -> CatalogResult<Category> {
        self.get(id).await?;
        let draft = self.validate(input, actor)?;

        // The row may vanish between the lookup and the write
        let category = self
            .repo
            .update_category(id, &draft)
            .await?
            .ok_or(CatalogError::CategoryNotFound)?;

        tracing::info!(category_id = %id, actor = %actor, "Category updated");

        Ok(category)
    }

    /// Removes the category together with its books
    pub async fn delete(&self, id: CategoryId) -> CatalogResult<()> {
        if !self.repo.delete_category(id).await? {
            return Err(CatalogError::CategoryNotFound);
        }

        tracing::info!(category_id = %id, "Category deleted");

        Ok(())
    }

    /// Books of an existing category; empty is not an error
    pub async fn books(&self, id: CategoryId) -> CatalogResult<Vec<BookWithCategory>> {
        self.get(id).await?;
        self.repo.list_books_in_category(id).await
    }

    fn validate(&self, input: CategoryInput, actor: &str) -> CatalogResult<CategoryDraft> {
        self.validator
            .validate(&input)
            .map_err(CatalogError::Validation)?;

        input
            .into_draft(actor)
            .ok_or_else(|| CatalogError::Internal("validated category input is incomplete".into()))
    }
}
