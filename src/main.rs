//! HTTP service exposing CRUD operations on the `users` resource.
//!
//! The service follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Business logic between controllers and data layer
//! - **Data Layer** (`data/`) - Generic single-table persistence plus user queries
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Schema Layer** (`schema/`) - Wire shapes, validation rules, and API documentation
//! - **Error Layer** (`error`) - Application error types and HTTP response mapping
//!
//! Supporting modules provide application infrastructure:
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (database connection pool)
//! - **Startup** (`startup`) - Database connection and migrations
//! - **Router** (`router`) - Axum route configuration and OpenAPI documentation
//! - **Extractors** (`extract`) - Request validation ahead of handler logic
//!
//! A typical request flows router -> extractors (validation) -> controller ->
//! service -> data, with the resulting domain model converted back to a DTO.

mod config;
mod controller;
mod data;
mod error;
mod extract;
mod model;
mod router;
mod schema;
mod service;
mod startup;
mod state;

use tower_http::cors::CorsLayer;
use tracing_subscriber::EnvFilter;

use crate::{config::Config, error::AppError, state::AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;

    tracing::info!("Starting server");

    let app = router::router()
        .with_state(AppState::new(db))
        .layer(CorsLayer::very_permissive());

    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port)).await?;

    tracing::info!(
        "Server is running on http://{}:{}",
        config.host,
        config.port
    );
    tracing::info!(
        "API documentation available at http://{}:{}/docs",
        config.host,
        config.port
    );

    axum::serve(listener, app).await?;

    Ok(())
}
