//! Auth Router

use axum::{Router, routing::post};
use kernel::validation::RequestValidator;
use std::sync::Arc;

use crate::application::token::TokenManager;
use crate::domain::repository::UserRepository;
use crate::infra::postgres::PgUserRepository;
use crate::presentation::handlers::{self, AuthAppState};

/// Create the Auth router with PostgreSQL repository
pub fn auth_router(
    repo: PgUserRepository,
    tokens: Arc<TokenManager>,
    validator: Arc<RequestValidator>,
) -> Router {
    auth_router_generic(repo, tokens, validator)
}

/// Create a generic Auth router for any repository implementation
pub fn auth_router_generic<R>(
    repo: R,
    tokens: Arc<TokenManager>,
    validator: Arc<RequestValidator>,
) -> Router
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let state = AuthAppState {
        repo: Arc::new(repo),
        tokens,
        validator,
    };

    Router::new()
        .route("/login", post(handlers::login::<R>))
        .with_state(state)
}
