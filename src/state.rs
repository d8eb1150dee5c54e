//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{Creator, Resolver};
use crate::domain::repositories::{AccessLogRepository, LinkRepository};
use crate::utils::time_format::TimeFormatter;

/// Page served for unknown slugs when no custom page is configured.
pub const DEFAULT_NOT_FOUND_PAGE: &str = include_str!("../static/404.html");

/// Handler state.
///
/// Holds only handles to the datastore and immutable settings; no request
/// data survives between calls.
#[derive(Clone)]
pub struct AppState {
    pub resolver: Arc<Resolver>,
    pub creator: Arc<Creator>,
    pub link_repository: Arc<dyn LinkRepository>,
    /// HTML body of the 404 page.
    pub not_found_page: Arc<str>,
    /// Trust `X-Forwarded-*` headers for client IP and scheme.
    pub behind_proxy: bool,
    /// Scheme used to build short links when the request does not carry one.
    pub public_scheme: Arc<str>,
}

impl AppState {
    /// Wires services over the given repositories.
    pub fn new(
        link_repository: Arc<dyn LinkRepository>,
        access_log_repository: Arc<dyn AccessLogRepository>,
        time_formatter: TimeFormatter,
    ) -> Self {
        let resolver = Arc::new(Resolver::new(
            link_repository.clone(),
            access_log_repository,
            time_formatter.clone(),
        ));
        let creator = Arc::new(Creator::new(link_repository.clone(), time_formatter));

        Self {
            resolver,
            creator,
            link_repository,
            not_found_page: Arc::from(DEFAULT_NOT_FOUND_PAGE),
            behind_proxy: false,
            public_scheme: Arc::from("https"),
        }
    }

    /// Replaces the 404 page body.
    pub fn with_not_found_page(mut self, page: impl Into<Arc<str>>) -> Self {
        self.not_found_page = page.into();
        self
    }

    /// Sets proxy trust and the fallback public scheme.
    pub fn with_forwarding(mut self, behind_proxy: bool, public_scheme: impl Into<Arc<str>>) -> Self {
        self.behind_proxy = behind_proxy;
        self.public_scheme = public_scheme.into();
        self
    }
}
