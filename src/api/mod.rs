//! HTTP layer: request/response translation for the two public operations.
//!
//! # Modules
//!
//! - [`dto`] - Request and response bodies
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - CORS and request tracing
//! - [`routes`] - Route configuration for the creation API

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
