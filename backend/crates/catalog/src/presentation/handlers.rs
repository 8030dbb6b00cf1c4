//! HTTP Handlers

use axum::extract::State;
use kernel::extract::{ApiJson, ApiPath};
use kernel::id::{BookId, CategoryId};
use kernel::identity::CurrentUser;
use kernel::response::ApiResponse;
use kernel::validation::RequestValidator;
use std::sync::Arc;

use crate::application::{BookService, CategoryService};
use crate::domain::repository::{BookRepository, CategoryRepository};
use crate::error::CatalogResult;
use crate::presentation::dto::{
    BookRequest, BookResponse, BookWithCategoryResponse, CategoryRequest, CategoryResponse,
    into_responses,
};

/// Shared state for catalog handlers
#[derive(Clone)]
pub struct CatalogAppState<R>
where
    R: CategoryRepository + BookRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub validator: Arc<RequestValidator>,
}

impl<R> CatalogAppState<R>
where
    R: CategoryRepository + BookRepository + Clone + Send + Sync + 'static,
{
    fn categories(&self) -> CategoryService<R> {
        CategoryService::new(self.repo.clone(), self.validator.clone())
    }

    fn books(&self) -> BookService<R> {
        BookService::new(self.repo.clone(), self.validator.clone())
    }
}

// ============================================================================
// Categories
// ============================================================================

/// GET /api/categories
pub async fn list_categories<R>(
    State(state): State<CatalogAppState<R>>,
) -> CatalogResult<ApiResponse<Vec<CategoryResponse>>>
where
    R: CategoryRepository + BookRepository + Clone + Send + Sync + 'static,
{
    let categories = state.categories().list().await?;
    Ok(ApiResponse::ok(
        "Categories retrieved successfully",
        into_responses(categories),
    ))
}

/// POST /api/categories
pub async fn create_category<R>(
    State(state): State<CatalogAppState<R>>,
    user: CurrentUser,
    ApiJson(req): ApiJson<CategoryRequest>,
) -> CatalogResult<ApiResponse<CategoryResponse>>
where
    R: CategoryRepository + BookRepository + Clone + Send + Sync + 'static,
{
    let category = state
        .categories()
        .create(req.into(), &user.username)
        .await?;
    Ok(ApiResponse::created(
        "Category created successfully",
        category.into(),
    ))
}

/// GET /api/categories/{id}
pub async fn get_category<R>(
    State(state): State<CatalogAppState<R>>,
    ApiPath(id): ApiPath<CategoryId>,
) -> CatalogResult<ApiResponse<CategoryResponse>>
where
    R: CategoryRepository + BookRepository + Clone + Send + Sync + 'static,
{
    let category = state.categories().get(id).await?;
    Ok(ApiResponse::ok(
        "Category retrieved successfully",
        category.into(),
    ))
}

/// PUT /api/categories/{id}
pub async fn update_category<R>(
    State(state): State<CatalogAppState<R>>,
    user: CurrentUser,
    ApiPath(id): ApiPath<CategoryId>,
    ApiJson(req): ApiJson<CategoryRequest>,
) -> CatalogResult<ApiResponse<CategoryResponse>>
where
    R: CategoryRepository + BookRepository + Clone + Send + Sync + 'static,
{
    let category = state
        .categories()
        .update(id, req.into(), &user.username)
        .await?;
    Ok(ApiResponse::ok(
        "Category updated successfully",
        category.into(),
    ))
}

/// DELETE /api/categories/{id}
pub async fn delete_category<R>(
    State(state): State<CatalogAppState<R>>,
    ApiPath(id): ApiPath<CategoryId>,
) -> CatalogResult<ApiResponse<()>>
where
    R: CategoryRepository + BookRepository + Clone + Send + Sync + 'static,
{
    state.categories().delete(id).await?;
    Ok(ApiResponse::message_only("Category deleted successfully"))
}

/// GET /api/categories/{id}/books
pub async fn list_category_books<R>(
    State(state): State<CatalogAppState<R>>,
    ApiPath(id): ApiPath<CategoryId>,
) -> CatalogResult<ApiResponse<Vec<BookWithCategoryResponse>>>
where
    R: CategoryRepository + BookRepository + Clone + Send + Sync + 'static,
{
    let books = state.categories().books(id).await?;
    Ok(ApiResponse::ok(
        "Books retrieved successfully",
        into_responses(books),
    ))
}

// ============================================================================
// Books
// ============================================================================

/// GET /api/books
pub async fn list_books<R>(
    State(state): State<CatalogAppState<R>>,
) -> CatalogResult<ApiResponse<Vec<BookWithCategoryResponse>>>
where
    R: CategoryRepository + BookRepository + Clone + Send + Sync + 'static,
{
    let books = state.books().list().await?;
    Ok(ApiResponse::ok(
        "Books retrieved successfully",
        into_responses(books),
    ))
}

/// POST /api/books
pub async fn create_book<R>(
    State(state): State<CatalogAppState<R>>,
    user: CurrentUser,
    ApiJson(req): ApiJson<BookRequest>,
) -> CatalogResult<ApiResponse<BookResponse>>
where
    R: CategoryRepository + BookRepository + Clone + Send + Sync + 'static,
{
    let book = state.books().create(req.into(), &user.username).await?;
    Ok(ApiResponse::created("Book created successfully", book.into()))
}

/// GET /api/books/{id}
pub async fn get_book<R>(
    State(state): State<CatalogAppState<R>>,
    ApiPath(id): ApiPath<BookId>,
) -> CatalogResult<ApiResponse<BookWithCategoryResponse>>
where
    R: CategoryRepository + BookRepository + Clone + Send + Sync + 'static,
{
    let book = state.books().get(id).await?;
    Ok(ApiResponse::ok("Book retrieved successfully", book.into()))
}

/// PUT /api/books/{id}
pub async fn update_book<R>(
    State(state): State<CatalogAppState<R>>,
    user: CurrentUser,
    ApiPath(id): ApiPath<BookId>,
    ApiJson(req): ApiJson<BookRequest>,
) -> CatalogResult<ApiResponse<BookResponse>>
where
    R: CategoryRepository + BookRepository + Clone + Send + Sync + 'static,
{
    let book = state
        .books()
        .update(id, req.into(), &user.username)
        .await?;
    Ok(ApiResponse::ok("Book updated successfully", book.into()))
}

/// DELETE /api/books/{id}
pub async fn delete_book<R>(
    State(state): State<CatalogAppState<R>>,
    ApiPath(id): ApiPath<BookId>,
) -> CatalogResult<ApiResponse<()>>
where
    R: CategoryRepository + BookRepository + Clone + Send + Sync + 'static,
{
    state.books().delete(id).await?;
    Ok(ApiResponse::message_only("Book deleted successfully"))
}
