//! Core domain entities.
//!
//! - [`Link`] / [`NewLink`] - A slug to URL mapping with creation provenance
//! - [`NewAccessLog`] - One resolution of a slug, written by the redirect path

pub mod access_log;
pub mod link;

pub use access_log::NewAccessLog;
pub use link::{Link, NewLink, STATUS_ACTIVE};
