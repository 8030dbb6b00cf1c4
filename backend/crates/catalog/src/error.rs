//! Catalog Error Types
//!
//! Catalog-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Catalog-specific result type alias
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog-specific error variants
#[derive(Debug, Error)]
pub enum CatalogError {
    /// One message per offending field
    #[error("Validation failed")]
    Validation(Vec<String>),

    /// The addressed category does not exist
    #[error("Category not found")]
    CategoryNotFound,

    /// The addressed book does not exist
    #[error("Book not found")]
    BookNotFound,

    /// A book names a `category_id` that does not exist
    ///
    /// Same message as [`CatalogError::CategoryNotFound`], but it is the
    /// request body that is wrong, so it maps to 400.
    #[error("Category not found")]
    UnknownCategory,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CatalogError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            CatalogError::Validation(_) | CatalogError::UnknownCategory => ErrorKind::BadRequest,
            CatalogError::CategoryNotFound | CatalogError::BookNotFound => ErrorKind::NotFound,
            CatalogError::Database(_) | CatalogError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        match self {
            CatalogError::Validation(messages) => {
                AppError::bad_request("Validation failed").with_details(messages.clone())
            }
            _ => AppError::new(self.kind(), self.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            CatalogError::Database(e) => {
                tracing::error!(error = %e, "Catalog database error");
            }
            CatalogError::Internal(msg) => {
                tracing::error!(message = %msg, "Catalog internal error");
            }
            _ => {
                tracing::debug!(error = %self, "Catalog error");
            }
        }
    }
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(CatalogError::Validation(vec![]).status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(CatalogError::UnknownCategory.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(CatalogError::CategoryNotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(CatalogError::BookNotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            CatalogError::Internal("boom".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_internal_detail_is_not_public() {
        let err = CatalogError::Internal("relation \"books\" does not exist".into()).to_app_error();
        assert_eq!(err.public_message(), "Internal server error");
    }

    #[tokio::test]
    async fn test_database_error_renders_fixed_message() {
        use http_body_util::BodyExt;

        let response = CatalogError::Database(sqlx::Error::PoolTimedOut).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["status"], false);
        assert_eq!(json["message"], "Internal server error");
        assert!(json.get("error").is_none());
    }

    #[test]
    fn test_validation_carries_details() {
        let err = CatalogError::Validation(vec!["name is required".into()]).to_app_error();
        assert_eq!(err.message(), "Validation failed");
        assert_eq!(err.details(), ["name is required"]);
    }
}
