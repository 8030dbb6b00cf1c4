//! PostgreSQL Repository Implementations
//!
//! Books reference categories with `ON DELETE CASCADE`. Book writes lock
//! the referenced category row `FOR SHARE` inside the same transaction, so
//! a concurrent category delete waits for the write (and then removes the
//! book with it) instead of leaving a dangling reference.

use chrono::{DateTime, Utc};
use kernel::id::{BookId, CategoryId};
use sqlx::{PgPool, Postgres, Transaction};

use crate::domain::entity::{
    book::{Book, BookDraft, BookWithCategory},
    category::{Category, CategoryDraft},
};
use crate::domain::repository::{BookRepository, CategoryRepository};
use crate::domain::value_object::thickness::Thickness;
use crate::error::{CatalogError, CatalogResult};

/// Shared projection of a book joined with its category name
const SELECT_BOOK_WITH_CATEGORY: &str = r#"
    SELECT
        b.id,
        b.title,
        b.description,
        b.image_url,
        b.release_year,
        b.price,
        b.total_page,
        b.thickness,
        b.category_id,
        b.created_at,
        b.created_by,
        b.modified_at,
        b.modified_by,
        c.name AS category_name
    FROM books b
    JOIN categories c ON c.id = b.category_id
"#;

/// PostgreSQL-backed catalog repository
#[derive(Clone)]
pub struct PgCatalogRepository {
    pool: PgPool,
}

impl PgCatalogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn fetch_books(
        &self,
        sql: &str,
        category_id: Option<CategoryId>,
    ) -> CatalogResult<Vec<BookWithCategory>> {
        let mut query = sqlx::query_as::<_, BookWithCategoryRow>(sql);
        if let Some(id) = category_id {
            query = query.bind(id.get());
        }

        query
            .fetch_all(&self.pool)
            .await?
            .into_iter()
            .map(BookWithCategoryRow::into_book_with_category)
            .collect()
    }
}

// ============================================================================
// Category Repository Implementation
// ============================================================================

impl CategoryRepository for PgCatalogRepository {
    async fn list_categories(&self) -> CatalogResult<Vec<Category>> {
        let rows = sqlx::query_as::<_, CategoryRow>(
            r#"
            SELECT id, name, created_at, created_by, modified_at, modified_by
            FROM categories
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(CategoryRow::into_category).collect())
    }

    async fn find_category(&self, id: CategoryId) -> CatalogResult<Option<Category>> {
        let row = sqlx::query_as::<_, CategoryRow>(
            r#"
            SELECT id, name, created_at, created_by, modified_at, modified_by
            FROM categories
            WHERE id = $1
            "#,
        )
        .bind(id.get())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(CategoryRow::into_category))
    }

    async fn create_category(&self, draft: &CategoryDraft) -> CatalogResult<Category> {
        let row = sqlx::query_as::<_, CategoryRow>(
            r#"
            INSERT INTO categories (name, created_by, modified_by)
            VALUES ($1, $2, $2)
            RETURNING id, name, created_at, created_by, modified_at, modified_by
            "#,
        )
        .bind(&draft.name)
        .bind(&draft.actor)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into_category())
    }

    async fn update_category(
        &self,
        id: CategoryId,
        draft: &CategoryDraft,
    ) -> CatalogResult<Option<Category>> {
        let row = sqlx::query_as::<_, CategoryRow>(
            r#"
            UPDATE categories SET
                name = $2,
                modified_by = $3,
                modified_at = NOW()
            WHERE id = $1
            RETURNING id, name, created_at, created_by, modified_at, modified_by
            "#,
        )
        .bind(id.get())
        .bind(&draft.name)
        .bind(&draft.actor)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(CategoryRow::into_category))
    }

    async fn delete_category(&self, id: CategoryId) -> CatalogResult<bool> {
        let deleted = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id.get())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted > 0)
    }

    async fn list_books_in_category(
        &self,
        id: CategoryId,
    ) -> CatalogResult<Vec<BookWithCategory>> {
        let sql = format!("{SELECT_BOOK_WITH_CATEGORY} WHERE b.category_id = $1 ORDER BY b.id ASC");
        self.fetch_books(&sql, Some(id)).await
    }
}

// ============================================================================
// Book Repository Implementation
// ============================================================================

impl BookRepository for PgCatalogRepository {
    async fn list_books(&self) -> CatalogResult<Vec<BookWithCategory>> {
        let sql = format!("{SELECT_BOOK_WITH_CATEGORY} ORDER BY b.id ASC");
        self.fetch_books(&sql, None).await
    }

    async fn find_book(&self, id: BookId) -> CatalogResult<Option<BookWithCategory>> {
        let sql = format!("{SELECT_BOOK_WITH_CATEGORY} WHERE b.id = $1");
        let row = sqlx::query_as::<_, BookWithCategoryRow>(&sql)
            .bind(id.get())
            .fetch_optional(&self.pool)
            .await?;

        row.map(BookWithCategoryRow::into_book_with_category)
            .transpose()
    }

    async fn create_book(&self, draft: &BookDraft) -> CatalogResult<Book> {
        let mut tx = self.pool.begin().await?;
        lock_category(&mut tx, draft.category_id).await?;

        let row = sqlx::query_as::<_, BookRow>(
            r#"
            INSERT INTO books (
                title,
                description,
                image_url,
                release_year,
                price,
                total_page,
                thickness,
                category_id,
                created_by,
                modified_by
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $9)
            RETURNING
                id, title, description, image_url, release_year, price, total_page,
                thickness, category_id, created_at, created_by, modified_at, modified_by
            "#,
        )
        .bind(&draft.title)
        .bind(&draft.description)
        .bind(&draft.image_url)
        .bind(draft.release_year)
        .bind(draft.price)
        .bind(draft.total_page)
        .bind(draft.thickness().as_str())
        .bind(draft.category_id.get())
        .bind(&draft.actor)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_write_error)?;

        tx.commit().await?;

        row.into_book()
    }

    async fn update_book(&self, id: BookId, draft: &BookDraft) -> CatalogResult<Book> {
        let mut tx = self.pool.begin().await?;
        lock_category(&mut tx, draft.category_id).await?;

        let row = sqlx::query_as::<_, BookRow>(
            r#"
            UPDATE books SET
                title = $2,
                description = $3,
                image_url = $4,
                release_year = $5,
                price = $6,
                total_page = $7,
                thickness = $8,
                category_id = $9,
                modified_by = $10,
                modified_at = NOW()
            WHERE id = $1
            RETURNING
                id, title, description, image_url, release_year, price, total_page,
                thickness, category_id, created_at, created_by, modified_at, modified_by
            "#,
        )
        .bind(id.get())
        .bind(&draft.title)
        .bind(&draft.description)
        .bind(&draft.image_url)
        .bind(draft.release_year)
        .bind(draft.price)
        .bind(draft.total_page)
        .bind(draft.thickness().as_str())
        .bind(draft.category_id.get())
        .bind(&draft.actor)
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_write_error)?
        .ok_or(CatalogError::BookNotFound)?;

        tx.commit().await?;

        row.into_book()
    }

    async fn delete_book(&self, id: BookId) -> CatalogResult<bool> {
        let deleted = sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id.get())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted > 0)
    }
}

/// Hold a share lock on the category for the rest of the transaction
async fn lock_category(
    tx: &mut Transaction<'_, Postgres>,
    id: CategoryId,
) -> CatalogResult<()> {
    sqlx::query_scalar::<_, i32>("SELECT id FROM categories WHERE id = $1 FOR SHARE")
        .bind(id.get())
        .fetch_optional(&mut **tx)
        .await?
        .map(|_| ())
        .ok_or(CatalogError::UnknownCategory)
}

fn map_write_error(err: sqlx::Error) -> CatalogError {
    match &err {
        sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation() => {
            CatalogError::UnknownCategory
        }
        _ => CatalogError::Database(err),
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct CategoryRow {
    id: i32,
    name: String,
    created_at: DateTime<Utc>,
    created_by: String,
    modified_at: DateTime<Utc>,
    modified_by: String,
}

impl CategoryRow {
    fn into_category(self) -> Category {
        Category {
            id: CategoryId::new(self.id),
            name: self.name,
            created_at: self.created_at,
            created_by: self.created_by,
            modified_at: self.modified_at,
            modified_by: self.modified_by,
        }
    }
}

#[derive(sqlx::FromRow)]
struct BookRow {
    id: i32,
    title: String,
    description: String,
    image_url: String,
    release_year: i32,
    price: i32,
    total_page: i32,
    thickness: String,
    category_id: i32,
    created_at: DateTime<Utc>,
    created_by: String,
    modified_at: DateTime<Utc>,
    modified_by: String,
}

impl BookRow {
    fn into_book(self) -> CatalogResult<Book> {
        let thickness = self
            .thickness
            .parse::<Thickness>()
            .map_err(|e| CatalogError::Internal(e.to_string()))?;

        Ok(Book {
            id: BookId::new(self.id),
            title: self.title,
            description: self.description,
            image_url: self.image_url,
            release_year: self.release_year,
            price: self.price,
            total_page: self.total_page,
            thickness,
            category_id: CategoryId::new(self.category_id),
            created_at: self.created_at,
            created_by: self.created_by,
            modified_at: self.modified_at,
            modified_by: self.modified_by,
        })
    }
}

#[derive(sqlx::FromRow)]
struct BookWithCategoryRow {
    #[sqlx(flatten)]
    book: BookRow,
    category_name: String,
}

impl BookWithCategoryRow {
    fn into_book_with_category(self) -> CatalogResult<BookWithCategory> {
        Ok(BookWithCategory {
            book: self.book.into_book()?,
            category_name: self.category_name,
        })
    }
}
