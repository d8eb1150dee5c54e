//! HTTP middleware.
//!
//! - [`cors`] - Permissive CORS headers for the creation API
//! - [`tracing`] - Request/response spans

pub mod cors;
pub mod tracing;
