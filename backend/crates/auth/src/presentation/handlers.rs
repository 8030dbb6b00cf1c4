//! HTTP Handlers

use axum::extract::State;
use kernel::extract::ApiJson;
use kernel::response::ApiResponse;
use kernel::validation::RequestValidator;
use std::sync::Arc;

use crate::application::{LoginInput, LoginUseCase, TokenManager};
use crate::domain::repository::UserRepository;
use crate::error::AuthResult;
use crate::presentation::dto::{LoginRequest, LoginResponse, UserSummary};

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub tokens: Arc<TokenManager>,
    pub validator: Arc<RequestValidator>,
}

// ============================================================================
// Login
// ============================================================================

/// POST /api/users/login
pub async fn login<R>(
    State(state): State<AuthAppState<R>>,
    ApiJson(req): ApiJson<LoginRequest>,
) -> AuthResult<ApiResponse<LoginResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = LoginUseCase::new(
        state.repo.clone(),
        state.tokens.clone(),
        state.validator.clone(),
    );

    let input = LoginInput {
        username: req.username,
        password: req.password,
    };

    let output = use_case.execute(input).await?;

    Ok(ApiResponse::ok(
        "Login successful",
        LoginResponse {
            token: output.token,
            expires_at: output.expires_at,
            user: UserSummary {
                id: output.user_id,
                username: output.username,
            },
        },
    ))
}
