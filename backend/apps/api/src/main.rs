//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.

mod config;
mod routes;

use std::net::SocketAddr;
use std::sync::Arc;

use auth::application::{SeedOutcome, SeedUserUseCase};
use auth::{PgUserRepository, TokenManager, auth_router};
use catalog::{PgCatalogRepository, catalog_router};
use kernel::validation::RequestValidator;
use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,auth=info,catalog=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env()?;

    // Database connection
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await?;

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("../../../database/migrations")
        .run(&pool)
        .await?;

    tracing::info!("Migrations completed");

    let users = PgUserRepository::new(pool.clone());

    // Optional initial account; a failure here should not prevent server startup
    if let Some(seed) = config.seed {
        let username = seed.username.clone();
        match SeedUserUseCase::new(Arc::new(users.clone())).execute(seed).await {
            Ok(SeedOutcome::Created(user)) => {
                tracing::info!(user_id = %user.id, username = %user.username, "Seed user created");
            }
            Ok(SeedOutcome::AlreadyExists) => {
                tracing::info!(username = %username, "Seed user already exists");
            }
            Err(e) => {
                tracing::warn!(error = %e, "User seeding failed, continuing anyway");
            }
        }
    }

    let tokens = Arc::new(TokenManager::new(&config.auth));
    let validator = Arc::new(RequestValidator::new());

    // Build router
    let app = routes::with_http_layers(
        routes::app_router(
            auth_router(users, tokens.clone(), validator.clone()),
            catalog_router(PgCatalogRepository::new(pool), validator),
            tokens,
        ),
        config.frontend_origins.as_deref(),
    );

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
