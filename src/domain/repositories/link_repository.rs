//! Repository trait for short link data access.

use crate::domain::entities::{Link, NewLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the `links` table.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Inserts a new link.
    ///
    /// No existence check is made here; a duplicate slug is only rejected if
    /// the datastore enforces uniqueness.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on database errors.
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError>;

    /// Finds a link by exact slug.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on database errors.
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Link>, AppError>;

    /// Finds a link by exact target URL.
    ///
    /// Used to return an existing slug instead of shortening the same URL twice.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on database errors.
    async fn find_by_url(&self, url: &str) -> Result<Option<Link>, AppError>;

    /// Issues a trivial query to verify the datastore is reachable.
    async fn ping(&self) -> Result<(), AppError>;
}
