//! Router Composition
//!
//! `/health` and `/api/users/login` are public; every catalog route sits
//! behind the bearer token gate.

use std::sync::Arc;

use auth::{TokenManager, require_bearer_token};
use axum::http::{HeaderValue, Method, header};
use axum::middleware::from_fn_with_state;
use axum::{Router, routing::get};
use kernel::response::ApiResponse;
use serde_json::{Value, json};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

/// Mount the login and catalog routers under `/api`
///
/// The catalog router is wrapped in the bearer token gate here.
pub fn app_router(users: Router, catalog: Router, tokens: Arc<TokenManager>) -> Router {
    let protected = catalog.route_layer(from_fn_with_state(tokens, require_bearer_token));

    let api = Router::new().nest("/users", users).merge(protected);

    Router::new()
        .route("/health", get(health))
        .nest("/api", api)
}

/// Wrap the router with request tracing and CORS
pub fn with_http_layers(router: Router, frontend_origins: Option<&[String]>) -> Router {
    let allow_origin = match frontend_origins {
        Some(origins) => AllowOrigin::list(
            origins
                .iter()
                .filter_map(|origin| origin.parse::<HeaderValue>().ok()),
        ),
        None => AllowOrigin::any(),
    };

    let cors = CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]));

    router.layer(TraceLayer::new_for_http()).layer(cors)
}

/// GET /health
async fn health() -> ApiResponse<Value> {
    ApiResponse::ok(
        "Server is running",
        json!({
            "status": "healthy",
            "service": "book-management-api",
        }),
    )
}
