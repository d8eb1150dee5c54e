//! Domain layer containing the persisted entities and repository contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Rows of the `links` and `logs` tables
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no dependency on HTTP or on a concrete database driver.
//! Implementations of the repository traits live in
//! [`crate::infrastructure::persistence`].

pub mod entities;
pub mod repositories;
