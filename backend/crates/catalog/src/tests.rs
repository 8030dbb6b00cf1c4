//! Unit tests for Catalog crate

#[cfg(test)]
mod service_tests {
    use std::sync::Arc;

    use kernel::id::{BookId, CategoryId};
    use kernel::validation::RequestValidator;

    use crate::application::{BookInput, BookService, CategoryInput, CategoryService};
    use crate::domain::repository::{BookRepository, CategoryRepository};
    use crate::domain::value_object::thickness::Thickness;
    use crate::error::CatalogError;
    use crate::infra::memory::InMemoryCatalogRepository;

    fn services() -> (
        Arc<InMemoryCatalogRepository>,
        CategoryService<InMemoryCatalogRepository>,
        BookService<InMemoryCatalogRepository>,
    ) {
        let repo = Arc::new(InMemoryCatalogRepository::new());
        let validator = Arc::new(RequestValidator::new());
        (
            repo.clone(),
            CategoryService::new(repo.clone(), validator.clone()),
            BookService::new(repo, validator),
        )
    }

    fn category(name: &str) -> CategoryInput {
        CategoryInput {
            name: Some(name.to_string()),
        }
    }

    fn book(category_id: CategoryId, total_page: i32) -> BookInput {
        BookInput {
            title: Some("Dune".to_string()),
            description: None,
            image_url: None,
            release_year: Some(1990),
            price: Some(100_000),
            total_page: Some(total_page),
            category_id: Some(category_id),
        }
    }

    fn validation_messages(err: CatalogError) -> Vec<String> {
        match err {
            CatalogError::Validation(messages) => messages,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    // ------------------------------------------------------------------------
    // Categories
    // ------------------------------------------------------------------------

    #[tokio::test]
    async fn test_category_crud() {
        let (_, categories, _) = services();

        let fiction = categories.create(category("Fiction"), "admin").await.unwrap();
        let science = categories.create(category("Science"), "admin").await.unwrap();
        assert_eq!(fiction.created_by, "admin");
        assert_eq!(fiction.modified_by, "admin");

        let listed = categories.list().await.unwrap();
        assert_eq!(
            listed.iter().map(|c| c.id).collect::<Vec<_>>(),
            vec![fiction.id, science.id]
        );

        let renamed = categories
            .update(fiction.id, category("Novels"), "editor")
            .await
            .unwrap();
        assert_eq!(renamed.name, "Novels");
        assert_eq!(renamed.created_by, "admin");
        assert_eq!(renamed.modified_by, "editor");
        assert_eq!(categories.get(fiction.id).await.unwrap().name, "Novels");

        categories.delete(science.id).await.unwrap();
        assert!(matches!(
            categories.get(science.id).await,
            Err(CatalogError::CategoryNotFound)
        ));
    }

    #[tokio::test]
    async fn test_category_name_validation() {
        let (_, categories, _) = services();

        let missing = categories
            .create(CategoryInput { name: None }, "admin")
            .await
            .unwrap_err();
        assert_eq!(validation_messages(missing), vec!["name is required"]);

        let empty = categories.create(category(""), "admin").await.unwrap_err();
        assert_eq!(
            validation_messages(empty),
            vec!["name must be between 1 and 255 characters"]
        );

        let too_long = categories
            .create(category(&"x".repeat(256)), "admin")
            .await
            .unwrap_err();
        assert!(matches!(too_long, CatalogError::Validation(_)));
    }

    #[tokio::test]
    async fn test_missing_category_update_and_delete_leave_store_unchanged() {
        let (repo, categories, _) = services();
        let fiction = categories.create(category("Fiction"), "admin").await.unwrap();

        let missing = CategoryId::new(99);
        assert!(matches!(
            categories.update(missing, category("X"), "admin").await,
            Err(CatalogError::CategoryNotFound)
        ));
        assert!(matches!(
            categories.delete(missing).await,
            Err(CatalogError::CategoryNotFound)
        ));

        assert_eq!(repo.list_categories().await.unwrap(), vec![fiction]);
    }

    #[tokio::test]
    async fn test_update_of_missing_category_reports_not_found_before_validation() {
        let (_, categories, _) = services();

        let err = categories
            .update(CategoryId::new(5), CategoryInput { name: None }, "admin")
            .await
            .unwrap_err();
        assert!(matches!(err, CatalogError::CategoryNotFound));
    }

    #[tokio::test]
    async fn test_books_of_category() {
        let (_, categories, books) = services();
        let fiction = categories.create(category("Fiction"), "admin").await.unwrap();
        let empty = categories.create(category("Empty"), "admin").await.unwrap();
        books.create(book(fiction.id, 50), "admin").await.unwrap();

        assert!(categories.books(empty.id).await.unwrap().is_empty());

        let filed = categories.books(fiction.id).await.unwrap();
        assert_eq!(filed.len(), 1);
        assert_eq!(filed[0].category_name, "Fiction");

        assert!(matches!(
            categories.books(CategoryId::new(42)).await,
            Err(CatalogError::CategoryNotFound)
        ));
    }

    #[tokio::test]
    async fn test_category_delete_cascades_to_books() {
        let (repo, categories, books) = services();
        let fiction = categories.create(category("Fiction"), "admin").await.unwrap();
        let created = books.create(book(fiction.id, 50), "admin").await.unwrap();

        categories.delete(fiction.id).await.unwrap();

        assert!(books.list().await.unwrap().is_empty());
        assert!(matches!(
            books.get(created.id).await,
            Err(CatalogError::BookNotFound)
        ));
        assert!(!repo.delete_book(created.id).await.unwrap());
    }

    // ------------------------------------------------------------------------
    // Books
    // ------------------------------------------------------------------------

    #[tokio::test]
    async fn test_thickness_follows_total_page() {
        let (_, categories, books) = services();
        let fiction = categories.create(category("Fiction"), "admin").await.unwrap();

        let created = books.create(book(fiction.id, 50), "admin").await.unwrap();
        assert_eq!(created.thickness, Thickness::Thin);

        let updated = books
            .update(created.id, book(fiction.id, 150), "editor")
            .await
            .unwrap();
        assert_eq!(updated.thickness, Thickness::Thick);
        assert_eq!(updated.total_page, 150);

        let updated = books
            .update(created.id, book(fiction.id, 99), "editor")
            .await
            .unwrap();
        assert_eq!(updated.thickness, Thickness::Thin);
    }

    #[tokio::test]
    async fn test_update_preserves_creation_audit() {
        let (_, categories, books) = services();
        let fiction = categories.create(category("Fiction"), "admin").await.unwrap();
        let science = categories.create(category("Science"), "admin").await.unwrap();
        let created = books.create(book(fiction.id, 50), "admin").await.unwrap();

        let updated = books
            .update(created.id, book(science.id, 50), "editor")
            .await
            .unwrap();

        assert_eq!(updated.created_at, created.created_at);
        assert_eq!(updated.created_by, "admin");
        assert_eq!(updated.modified_by, "editor");
        assert_eq!(updated.category_id, science.id);
        assert!(updated.modified_at >= created.modified_at);
    }

    #[tokio::test]
    async fn test_create_with_unknown_category_writes_nothing() {
        let (repo, _, books) = services();

        let err = books
            .create(book(CategoryId::new(7), 50), "admin")
            .await
            .unwrap_err();
        assert!(matches!(err, CatalogError::UnknownCategory));
        assert!(repo.list_books().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_with_unknown_category_keeps_book() {
        let (_, categories, books) = services();
        let fiction = categories.create(category("Fiction"), "admin").await.unwrap();
        let created = books.create(book(fiction.id, 50), "admin").await.unwrap();

        let err = books
            .update(created.id, book(CategoryId::new(99), 500), "admin")
            .await
            .unwrap_err();
        assert!(matches!(err, CatalogError::UnknownCategory));

        let stored = books.get(created.id).await.unwrap();
        assert_eq!(stored.book, created);
    }

    #[tokio::test]
    async fn test_missing_book_update_and_delete() {
        let (_, categories, books) = services();
        let fiction = categories.create(category("Fiction"), "admin").await.unwrap();

        assert!(matches!(
            books.update(BookId::new(3), book(fiction.id, 50), "admin").await,
            Err(CatalogError::BookNotFound)
        ));
        assert!(matches!(
            books.delete(BookId::new(3)).await,
            Err(CatalogError::BookNotFound)
        ));
    }

    #[tokio::test]
    async fn test_book_validation_messages() {
        let (_, categories, books) = services();
        let fiction = categories.create(category("Fiction"), "admin").await.unwrap();

        let mut input = book(fiction.id, 50);
        input.release_year = Some(1965);
        let err = books.create(input, "admin").await.unwrap_err();
        assert_eq!(
            validation_messages(err),
            vec!["release_year must be between 1980 and 2024"]
        );

        let err = books.create(BookInput::default(), "admin").await.unwrap_err();
        assert_eq!(
            validation_messages(err),
            vec![
                "category_id is required",
                "price is required",
                "release_year is required",
                "title is required",
                "total_page is required",
            ]
        );

        let mut input = book(fiction.id, 0);
        input.price = Some(-1);
        let err = books.create(input, "admin").await.unwrap_err();
        assert_eq!(
            validation_messages(err),
            vec!["price must be at least 0", "total_page must be at least 1"]
        );
    }

    #[tokio::test]
    async fn test_optional_text_fields_default_to_empty() {
        let (_, categories, books) = services();
        let fiction = categories.create(category("Fiction"), "admin").await.unwrap();

        let created = books.create(book(fiction.id, 50), "admin").await.unwrap();
        assert_eq!(created.description, "");
        assert_eq!(created.image_url, "");
    }

    #[tokio::test]
    async fn test_list_books_in_id_order_with_category_name() {
        let (_, categories, books) = services();
        let fiction = categories.create(category("Fiction"), "admin").await.unwrap();
        let science = categories.create(category("Science"), "admin").await.unwrap();
        let first = books.create(book(science.id, 10), "admin").await.unwrap();
        let second = books.create(book(fiction.id, 10), "admin").await.unwrap();

        let listed = books.list().await.unwrap();
        assert_eq!(
            listed.iter().map(|b| b.book.id).collect::<Vec<_>>(),
            vec![first.id, second.id]
        );
        assert_eq!(listed[0].category_name, "Science");
        assert_eq!(listed[1].category_name, "Fiction");
    }
}

#[cfg(test)]
mod http_tests {
    use std::sync::Arc;

    use axum::Router;
    use axum::body::Body;
    use axum::extract::Request;
    use axum::http::{StatusCode, header};
    use axum::middleware::{Next, from_fn};
    use http_body_util::BodyExt;
    use kernel::id::UserId;
    use kernel::identity::CurrentUser;
    use kernel::validation::RequestValidator;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use crate::infra::memory::InMemoryCatalogRepository;
    use crate::presentation::router::catalog_router_generic;

    async fn as_admin(mut req: Request, next: Next) -> axum::response::Response {
        req.extensions_mut().insert(CurrentUser {
            user_id: UserId::new(1),
            username: "admin".to_string(),
        });
        next.run(req).await
    }

    fn bare_app() -> Router {
        catalog_router_generic(
            InMemoryCatalogRepository::new(),
            Arc::new(RequestValidator::new()),
        )
    }

    fn app() -> Router {
        bare_app().layer(from_fn(as_admin))
    }

    async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string())),
            None => builder.body(Body::empty()),
        }
        .unwrap();

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_create_and_fetch_category() {
        let app = app();

        let (status, body) = send(&app, "POST", "/categories", Some(json!({"name": "Fiction"}))).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["status"], true);
        assert_eq!(body["message"], "Category created successfully");
        assert_eq!(body["data"]["name"], "Fiction");
        assert_eq!(body["data"]["created_by"], "admin");

        let id = body["data"]["id"].as_i64().unwrap();
        let (status, body) = send(&app, "GET", &format!("/categories/{id}"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Category retrieved successfully");

        let (status, body) = send(&app, "GET", &format!("/categories/{id}/books"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"], json!([]));
    }

    #[tokio::test]
    async fn test_error_envelopes() {
        let app = app();

        let (status, body) = send(&app, "GET", "/categories/abc", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Invalid ID");

        let (status, body) = send(&app, "GET", "/books/999", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["status"], false);
        assert_eq!(body["message"], "Book not found");

        let (status, body) = send(&app, "DELETE", "/categories/999", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Category not found");

        let (status, body) = send(&app, "POST", "/categories", Some(json!({}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Validation failed");
        assert_eq!(body["error"], json!(["name is required"]));
    }

    #[tokio::test]
    async fn test_book_with_unknown_category_is_400() {
        let app = app();

        let (status, body) = send(
            &app,
            "POST",
            "/books",
            Some(json!({
                "title": "Dune",
                "release_year": 1990,
                "price": 10,
                "total_page": 50,
                "category_id": 12
            })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Category not found");

        let (_, body) = send(&app, "GET", "/books", None).await;
        assert_eq!(body["data"], json!([]));
    }

    #[tokio::test]
    async fn test_client_thickness_is_ignored() {
        let app = app();
        let (_, body) = send(&app, "POST", "/categories", Some(json!({"name": "Fiction"}))).await;
        let category_id = body["data"]["id"].clone();

        let (status, body) = send(
            &app,
            "POST",
            "/books",
            Some(json!({
                "title": "Dune",
                "release_year": 1990,
                "price": 10,
                "total_page": 500,
                "thickness": "thin",
                "category_id": category_id
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["data"]["thickness"], "thick");
    }

    #[tokio::test]
    async fn test_delete_returns_message_only() {
        let app = app();
        let (_, body) = send(&app, "POST", "/categories", Some(json!({"name": "Fiction"}))).await;
        let id = body["data"]["id"].as_i64().unwrap();

        let (status, body) = send(&app, "DELETE", &format!("/categories/{id}"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Category deleted successfully");
        assert!(body.get("data").is_none());
    }

    #[tokio::test]
    async fn test_writes_without_identity_are_401() {
        let app = bare_app();

        let (status, body) = send(&app, "POST", "/categories", Some(json!({"name": "Fiction"}))).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["status"], false);
    }
}
