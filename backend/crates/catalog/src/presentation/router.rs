//! Catalog Router

use axum::{Router, routing::get};
use kernel::validation::RequestValidator;
use std::sync::Arc;

use crate::domain::repository::{BookRepository, CategoryRepository};
use crate::infra::postgres::PgCatalogRepository;
use crate::presentation::handlers::{self, CatalogAppState};

/// Create the Catalog router with PostgreSQL repository
pub fn catalog_router(repo: PgCatalogRepository, validator: Arc<RequestValidator>) -> Router {
    catalog_router_generic(repo, validator)
}

/// Create a generic Catalog router for any repository implementation
pub fn catalog_router_generic<R>(repo: R, validator: Arc<RequestValidator>) -> Router
where
    R: CategoryRepository + BookRepository + Clone + Send + Sync + 'static,
{
    let state = CatalogAppState {
        repo: Arc::new(repo),
        validator,
    };

    Router::new()
        .route(
            "/categories",
            get(handlers::list_categories::<R>).post(handlers::create_category::<R>),
        )
        .route(
            "/categories/{id}",
            get(handlers::get_category::<R>)
                .put(handlers::update_category::<R>)
                .delete(handlers::delete_category::<R>),
        )
        .route(
            "/categories/{id}/books",
            get(handlers::list_category_books::<R>),
        )
        .route(
            "/books",
            get(handlers::list_books::<R>).post(handlers::create_book::<R>),
        )
        .route(
            "/books/{id}",
            get(handlers::get_book::<R>)
                .put(handlers::update_book::<R>)
                .delete(handlers::delete_book::<R>),
        )
        .with_state(state)
}
