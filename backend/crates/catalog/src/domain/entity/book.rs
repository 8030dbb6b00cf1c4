//! Book Entity

use chrono::{DateTime, Utc};
use kernel::id::{BookId, CategoryId};

use crate::domain::value_object::thickness::Thickness;

/// A stored book
#[derive(Debug, Clone, PartialEq)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub release_year: i32,
    pub price: i32,
    pub total_page: i32,
    /// Always derived from `total_page`
    pub thickness: Thickness,
    pub category_id: CategoryId,
    pub created_at: DateTime<Utc>,
    pub created_by: String,
    pub modified_at: DateTime<Utc>,
    pub modified_by: String,
}

/// A book joined with the name of its category
#[derive(Debug, Clone, PartialEq)]
pub struct BookWithCategory {
    pub book: Book,
    pub category_name: String,
}

/// Validated fields for a create or update
///
/// Built only through [`BookDraft::new`], so `thickness` cannot disagree
/// with `total_page`.
#[derive(Debug, Clone)]
pub struct BookDraft {
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub release_year: i32,
    pub price: i32,
    pub total_page: i32,
    pub category_id: CategoryId,
    pub actor: String,
    thickness: Thickness,
}

impl BookDraft {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        title: String,
        description: String,
        image_url: String,
        release_year: i32,
        price: i32,
        total_page: i32,
        category_id: CategoryId,
        actor: String,
    ) -> Self {
        Self {
            title,
            description,
            image_url,
            release_year,
            price,
            total_page,
            category_id,
            actor,
            thickness: Thickness::from_total_page(total_page),
        }
    }

    pub fn thickness(&self) -> Thickness {
        self.thickness
    }
}
