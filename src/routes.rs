//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET     /{slug}`  - Short link redirect
//! - `POST    /create`  - Create a short link
//! - `OPTIONS /create`  - CORS preflight
//! - `GET     /health`  - Database health check
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - On `/create` only
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, redirect_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Builds the routes with state and tracing applied.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/{slug}", get(redirect_handler))
        .route("/health", get(health_handler))
        .merge(api::routes::create_routes())
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the application service with trailing slash trimming.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}
