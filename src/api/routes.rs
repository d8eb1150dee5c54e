//! Route configuration for the creation API.

use crate::api::handlers::{create_handler, preflight_handler};
use crate::api::middleware::cors;
use crate::state::AppState;
use axum::{Router, middleware, routing::post};

/// `POST /create` and its `OPTIONS` preflight, wrapped in CORS headers.
pub fn create_routes() -> Router<AppState> {
    Router::new()
        .route("/create", post(create_handler).options(preflight_handler))
        .layer(middleware::from_fn(cors::layer))
}
