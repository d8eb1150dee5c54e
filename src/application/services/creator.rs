//! Link creation: input validation, deduplication, persistence.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::entities::NewLink;
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::request_meta::RequestMeta;
use crate::utils::slug::{generate_slug, validate_custom_slug};
use crate::utils::target_url::{ensure_foreign_host, require_url, validate_url_format};
use crate::utils::time_format::TimeFormatter;

/// Raw creation input as submitted by the caller.
///
/// Empty strings are treated the same as absent values.
#[derive(Debug, Clone, Default)]
pub struct CreateLink {
    pub url: Option<String>,
    pub slug: Option<String>,
}

/// A slug together with its full short URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortLink {
    pub slug: String,
    pub link: String,
}

/// What a successful create call did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateOutcome {
    /// A new row was inserted.
    Created(ShortLink),
    /// An equivalent mapping already existed and was returned as is.
    Existing(ShortLink),
    /// The custom slug is taken by a different URL.
    SlugTaken,
}

/// Validates and persists new slug to URL mappings.
pub struct Creator {
    link_repository: Arc<dyn LinkRepository>,
    time_formatter: TimeFormatter,
}

impl Creator {
    pub fn new(link_repository: Arc<dyn LinkRepository>, time_formatter: TimeFormatter) -> Self {
        Self {
            link_repository,
            time_formatter,
        }
    }

    /// Creates (or returns an existing) short link.
    ///
    /// # Validation
    ///
    /// Checks run in order and stop at the first failure:
    ///
    /// 1. `url` is present
    /// 2. `url` starts with `http://` or `https://` and has at least 3 more characters
    /// 3. a custom slug is 2-10 characters and does not look like a file name
    /// 4. `url` does not point at the service's own hostname
    ///
    /// # Deduplication
    ///
    /// - With a custom slug: an existing row with the same slug and URL is
    ///   returned; the same slug with another URL yields [`CreateOutcome::SlugTaken`].
    /// - Without one: an existing row for the URL is returned.
    ///
    /// Generated slugs are drawn once and inserted without a collision check.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for rejected input and
    /// [`AppError::Database`] on database errors.
    pub async fn create(
        &self,
        input: CreateLink,
        meta: &RequestMeta,
    ) -> Result<CreateOutcome, AppError> {
        let url = require_url(input.url.as_deref())?;
        validate_url_format(url)?;

        let custom_slug = input.slug.as_deref().filter(|s| !s.is_empty());
        if let Some(slug) = custom_slug {
            validate_custom_slug(slug)?;
        }

        let (Some(host), Some(origin)) = (meta.host.as_deref(), meta.origin()) else {
            return Err(AppError::bad_request("Missing Host header."));
        };
        ensure_foreign_host(url, host)?;

        let slug = match custom_slug {
            Some(slug) => match self.link_repository.find_by_slug(slug).await? {
                Some(existing) if existing.url == url => {
                    debug!(slug, "custom slug already maps to this url");
                    return Ok(CreateOutcome::Existing(short_link(&origin, existing.slug)));
                }
                Some(_) => {
                    debug!(slug, "custom slug taken by another url");
                    return Ok(CreateOutcome::SlugTaken);
                }
                None => slug.to_string(),
            },
            None => {
                if let Some(existing) = self.link_repository.find_by_url(url).await? {
                    debug!(slug = %existing.slug, "url already shortened");
                    return Ok(CreateOutcome::Existing(short_link(&origin, existing.slug)));
                }
                generate_slug()
            }
        };

        let new_link = NewLink::active(
            slug,
            url.to_string(),
            meta.ip.clone(),
            meta.user_agent.clone(),
            self.time_formatter.now(),
        );

        let link = self.link_repository.create(new_link).await?;
        info!(slug = %link.slug, url = %link.url, "short link created");

        Ok(CreateOutcome::Created(short_link(&origin, link.slug)))
    }
}

fn short_link(origin: &str, slug: String) -> ShortLink {
    ShortLink {
        link: format!("{}/{}", origin, slug),
        slug,
    }
}
