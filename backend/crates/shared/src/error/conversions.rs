//! Error conversions
//!
//! HTTP rendering of [`AppError`] with the `axum` feature.

#[cfg(feature = "axum")]
use super::app_error::AppError;

// ============================================================================
// Axum conversions (feature-gated)
// ============================================================================

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use crate::response::Envelope;
        use axum::Json;
        use axum::http::StatusCode;

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        // Server-side failures keep their details in logs only
        let details: &[String] = if self.is_server_error() {
            &[]
        } else {
            self.details()
        };
        let body = Envelope::failure(self.public_message().to_owned(), details);

        (status, Json(body)).into_response()
    }
}
