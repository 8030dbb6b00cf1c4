//! API DTOs (Data Transfer Objects)
//!
//! Request fields are optional so that a missing field is reported by
//! validation ("title is required") rather than as an unparseable body.

use chrono::{DateTime, Utc};
use kernel::id::{BookId, CategoryId};
use serde::{Deserialize, Serialize};

use crate::application::{BookInput, CategoryInput};
use crate::domain::entity::{
    book::{Book, BookWithCategory},
    category::Category,
};
use crate::domain::value_object::thickness::Thickness;

// ============================================================================
// Category
// ============================================================================

/// Category create/update request
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryRequest {
    pub name: Option<String>,
}

impl From<CategoryRequest> for CategoryInput {
    fn from(req: CategoryRequest) -> Self {
        Self { name: req.name }
    }
}

/// Category response
#[derive(Debug, Clone, Serialize)]
pub struct CategoryResponse {
    pub id: CategoryId,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub created_by: String,
    pub modified_at: DateTime<Utc>,
    pub modified_by: String,
}

impl From<Category> for CategoryResponse {
    fn from(c: Category) -> Self {
        Self {
            id: c.id,
            name: c.name,
            created_at: c.created_at,
            created_by: c.created_by,
            modified_at: c.modified_at,
            modified_by: c.modified_by,
        }
    }
}

// ============================================================================
// Book
// ============================================================================

/// Book create/update request
///
/// A `thickness` sent by the client is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct BookRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub release_year: Option<i32>,
    pub price: Option<i32>,
    pub total_page: Option<i32>,
    pub category_id: Option<CategoryId>,
}

impl From<BookRequest> for BookInput {
    fn from(req: BookRequest) -> Self {
        Self {
            title: req.title,
            description: req.description,
            image_url: req.image_url,
            release_year: req.release_year,
            price: req.price,
            total_page: req.total_page,
            category_id: req.category_id,
        }
    }
}

/// Book response
#[derive(Debug, Clone, Serialize)]
pub struct BookResponse {
    pub id: BookId,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub release_year: i32,
    pub price: i32,
    pub total_page: i32,
    pub thickness: Thickness,
    pub category_id: CategoryId,
    pub created_at: DateTime<Utc>,
    pub created_by: String,
    pub modified_at: DateTime<Utc>,
    pub modified_by: String,
}

impl From<Book> for BookResponse {
    fn from(b: Book) -> Self {
        Self {
            id: b.id,
            title: b.title,
            description: b.description,
            image_url: b.image_url,
            release_year: b.release_year,
            price: b.price,
            total_page: b.total_page,
            thickness: b.thickness,
            category_id: b.category_id,
            created_at: b.created_at,
            created_by: b.created_by,
            modified_at: b.modified_at,
            modified_by: b.modified_by,
        }
    }
}

/// Book response with the category name alongside
#[derive(Debug, Clone, Serialize)]
pub struct BookWithCategoryResponse {
    #[serde(flatten)]
    pub book: BookResponse,
    pub category_name: String,
}

impl From<BookWithCategory> for BookWithCategoryResponse {
    fn from(b: BookWithCategory) -> Self {
        Self {
            book: b.book.into(),
            category_name: b.category_name,
        }
    }
}

/// Convert a list of domain values into response DTOs
pub fn into_responses<T, R: From<T>>(items: Vec<T>) -> Vec<R> {
    items.into_iter().map(R::from).collect()
}
