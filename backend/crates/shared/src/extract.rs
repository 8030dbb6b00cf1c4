//! Request Extractors
//!
//! Wrappers around axum's `Json` and `Path` whose rejections render the
//! shared error envelope instead of axum's plain-text defaults.

use axum::Json;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;

use crate::error::app_error::AppError;

/// JSON body; any parse failure is a 400 "Invalid request body"
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiJson<T>(pub T);

impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(AppError::bad_request("Invalid request body")
                .with_details(vec![rejection.body_text()])),
        }
    }
}

/// Path parameters; a value that does not parse is a 400 "Invalid ID"
#[derive(Debug, Clone, Copy)]
pub struct ApiPath<T>(pub T);

impl<T, S> FromRequestParts<S> for ApiPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<T>::from_request_parts(parts, state).await {
            Ok(Path(value)) => Ok(Self(value)),
            Err(rejection) => {
                Err(AppError::bad_request("Invalid ID").with_details(vec![rejection.body_text()]))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::BookId;
    use axum::Router;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use axum::routing::post;
    use http_body_util::BodyExt;
    use serde::Deserialize;
    use tower::ServiceExt;

    #[derive(Deserialize)]
    struct Payload {
        name: String,
    }

    async fn echo(ApiPath(id): ApiPath<BookId>, ApiJson(payload): ApiJson<Payload>) -> String {
        format!("{}:{}", id, payload.name)
    }

    fn app() -> Router {
        Router::new().route("/items/{id}", post(echo))
    }

    fn request(uri: &str, body: &str) -> Request<Body> {
        Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_owned()))
            .unwrap()
    }

    async fn json_body(response: axum::response::Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_valid_request_passes_through() {
        let response = app().oneshot(request("/items/3", r#"{"name":"x"}"#)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_bad_json_is_enveloped_400() {
        let response = app().oneshot(request("/items/3", "{not json")).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = json_body(response).await;
        assert_eq!(json["status"], false);
        assert_eq!(json["message"], "Invalid request body");
    }

    #[tokio::test]
    async fn test_non_integer_id_is_enveloped_400() {
        let response = app().oneshot(request("/items/abc", r#"{"name":"x"}"#)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = json_body(response).await;
        assert_eq!(json["message"], "Invalid ID");
    }
}
