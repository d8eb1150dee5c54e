//! Repository trait for the access log.

use crate::domain::entities::NewAccessLog;
use crate::error::AppError;
use async_trait::async_trait;

/// Append-only store of slug resolutions.
///
/// Entries are never read back, updated, or deleted by the service.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccessLogRepository: Send + Sync {
    /// Appends one entry to the `logs` table.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on database errors. Callers on the
    /// redirect path log and discard this error.
    async fn record(&self, entry: NewAccessLog) -> Result<(), AppError>;
}
