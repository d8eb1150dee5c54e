//! Slug resolution with best-effort access logging.

use std::sync::Arc;

use tracing::{debug, error};

use crate::domain::entities::NewAccessLog;
use crate::domain::repositories::{AccessLogRepository, LinkRepository};
use crate::error::AppError;
use crate::utils::request_meta::RequestMeta;
use crate::utils::time_format::TimeFormatter;

/// Result of resolving a slug.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Redirect the client to this URL.
    Redirect(String),
    NotFound,
}

/// Translates slugs into redirect targets.
///
/// Each call issues one lookup and, on a hit, one insert into the access log.
/// Nothing is cached between calls.
pub struct Resolver {
    link_repository: Arc<dyn LinkRepository>,
    access_log_repository: Arc<dyn AccessLogRepository>,
    time_formatter: TimeFormatter,
}

impl Resolver {
    pub fn new(
        link_repository: Arc<dyn LinkRepository>,
        access_log_repository: Arc<dyn AccessLogRepository>,
        time_formatter: TimeFormatter,
    ) -> Self {
        Self {
            link_repository,
            access_log_repository,
            time_formatter,
        }
    }

    /// Looks up `slug` and records the access.
    ///
    /// A failed access log insert is logged and ignored; the redirect is
    /// returned regardless.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] only if the lookup itself fails.
    pub async fn resolve(&self, slug: &str, meta: &RequestMeta) -> Result<Resolution, AppError> {
        let Some(link) = self.link_repository.find_by_slug(slug).await? else {
            debug!(slug, "slug not found");
            return Ok(Resolution::NotFound);
        };

        let entry = NewAccessLog {
            url: link.url.clone(),
            slug: slug.to_string(),
            ip: meta.ip.clone(),
            referer: meta.referer.clone(),
            ua: meta.user_agent.clone(),
            create_time: self.time_formatter.now(),
        };

        if let Err(e) = self.access_log_repository.record(entry).await {
            error!(slug, error = %e, "failed to record access log entry");
        }

        Ok(Resolution::Redirect(link.url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Link;
    use crate::domain::repositories::{MockAccessLogRepository, MockLinkRepository};

    fn stored_link(slug: &str, url: &str) -> Link {
        Link {
            slug: slug.to_string(),
            url: url.to_string(),
            ip: None,
            status: 1,
            ua: None,
            create_time: "July 1, 2024 14:05:30".to_string(),
        }
    }

    fn meta() -> RequestMeta {
        RequestMeta {
            ip: Some("203.0.113.9".to_string()),
            user_agent: Some("TestBot/1.0".to_string()),
            referer: Some("https://google.com".to_string()),
            host: Some("s.example.com".to_string()),
            scheme: "https".to_string(),
        }
    }

    #[tokio::test]
    async fn test_resolve_records_access_and_redirects() {
        let mut links = MockLinkRepository::new();
        let mut logs = MockAccessLogRepository::new();

        links
            .expect_find_by_slug()
            .withf(|slug| slug == "ab")
            .times(1)
            .returning(|_| Ok(Some(stored_link("ab", "https://example.com/a"))));

        logs.expect_record()
            .withf(|entry| {
                entry.slug == "ab"
                    && entry.url == "https://example.com/a"
                    && entry.ip.as_deref() == Some("203.0.113.9")
                    && entry.ua.as_deref() == Some("TestBot/1.0")
                    && entry.referer.as_deref() == Some("https://google.com")
                    && !entry.create_time.is_empty()
            })
            .times(1)
            .returning(|_| Ok(()));

        let resolver = Resolver::new(Arc::new(links), Arc::new(logs), TimeFormatter::default());

        let result = resolver.resolve("ab", &meta()).await.unwrap();
        assert_eq!(
            result,
            Resolution::Redirect("https://example.com/a".to_string())
        );
    }

    #[tokio::test]
    async fn test_resolve_unknown_slug_skips_logging() {
        let mut links = MockLinkRepository::new();
        let mut logs = MockAccessLogRepository::new();

        links.expect_find_by_slug().times(1).returning(|_| Ok(None));
        logs.expect_record().times(0);

        let resolver = Resolver::new(Arc::new(links), Arc::new(logs), TimeFormatter::default());

        let result = resolver.resolve("missing", &meta()).await.unwrap();
        assert_eq!(result, Resolution::NotFound);
    }

    #[tokio::test]
    async fn test_resolve_ignores_log_failure() {
        let mut links = MockLinkRepository::new();
        let mut logs = MockAccessLogRepository::new();

        links
            .expect_find_by_slug()
            .times(1)
            .returning(|_| Ok(Some(stored_link("ab", "https://example.com/a"))));

        logs.expect_record()
            .times(1)
            .returning(|_| Err(AppError::Database(sqlx::Error::PoolTimedOut)));

        let resolver = Resolver::new(Arc::new(links), Arc::new(logs), TimeFormatter::default());

        let result = resolver.resolve("ab", &meta()).await.unwrap();
        assert_eq!(
            result,
            Resolution::Redirect("https://example.com/a".to_string())
        );
    }

    #[tokio::test]
    async fn test_resolve_propagates_lookup_failure() {
        let mut links = MockLinkRepository::new();
        let mut logs = MockAccessLogRepository::new();

        links
            .expect_find_by_slug()
            .times(1)
            .returning(|_| Err(AppError::Database(sqlx::Error::PoolClosed)));
        logs.expect_record().times(0);

        let resolver = Resolver::new(Arc::new(links), Arc::new(logs), TimeFormatter::default());

        let result = resolver.resolve("ab", &meta()).await;
        assert!(matches!(result, Err(AppError::Database(_))));
    }
}
