//! PostgreSQL repository implementations.
//!
//! Concrete implementations of the domain repository traits using SQLx.
//! All values are bound as query parameters.
//!
//! - [`PgLinkRepository`] - `links` table
//! - [`PgAccessLogRepository`] - `logs` table

pub mod pg_access_log_repository;
pub mod pg_link_repository;

pub use pg_access_log_repository::PgAccessLogRepository;
pub use pg_link_repository::PgLinkRepository;
