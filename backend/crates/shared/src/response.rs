//! Response Envelope
//!
//! Every endpoint answers with the same JSON shape:
//! `{ "status": bool, "message": string, "data"?: any, "error"?: any }`.

use std::borrow::Cow;

use serde::Serialize;

/// JSON body shared by success and error responses
#[derive(Debug, Clone, Serialize)]
pub struct Envelope<T> {
    pub status: bool,
    pub message: Cow<'static, str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<serde_json::Value>,
}

impl Envelope<()> {
    /// Error envelope; `details` become the `error` array when non-empty
    pub fn failure(message: impl Into<Cow<'static, str>>, details: &[String]) -> Self {
        Self {
            status: false,
            message: message.into(),
            data: None,
            error: (!details.is_empty()).then(|| serde_json::json!(details)),
        }
    }
}

/// Successful response: an HTTP status plus an [`Envelope`]
///
/// ## Examples
/// ```rust
/// use kernel::response::ApiResponse;
///
/// let res = ApiResponse::created("Category created successfully", 7);
/// assert_eq!(res.status_code(), 201);
/// assert_eq!(res.body().data, Some(7));
/// ```
#[derive(Debug, Clone)]
pub struct ApiResponse<T> {
    status_code: u16,
    body: Envelope<T>,
}

impl<T: Serialize> ApiResponse<T> {
    /// 200 with data
    pub fn ok(message: impl Into<Cow<'static, str>>, data: T) -> Self {
        Self::with_status(200, message, Some(data))
    }

    /// 201 with data
    pub fn created(message: impl Into<Cow<'static, str>>, data: T) -> Self {
        Self::with_status(201, message, Some(data))
    }

    fn with_status(status_code: u16, message: impl Into<Cow<'static, str>>, data: Option<T>) -> Self {
        Self {
            status_code,
            body: Envelope {
                status: true,
                message: message.into(),
                data,
                error: None,
            },
        }
    }

    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    pub fn body(&self) -> &Envelope<T> {
        &self.body
    }
}

impl ApiResponse<()> {
    /// 200 without a `data` member
    pub fn message_only(message: impl Into<Cow<'static, str>>) -> Self {
        Self::with_status(200, message, None)
    }
}

#[cfg(feature = "axum")]
impl<T: Serialize> axum::response::IntoResponse for ApiResponse<T> {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;
        use axum::http::StatusCode;

        let status = StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::OK);
        (status, Json(self.body)).into_response()
    }
}
