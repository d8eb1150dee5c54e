//! Checks applied to the URL submitted for shortening.

use crate::error::AppError;
use regex::Regex;
use std::sync::LazyLock;
use url::Url;

/// Scheme followed by at least three more characters.
static URL_FORMAT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://.{3,}").expect("url format regex is valid"));

const ILLEGAL_URL_MESSAGE: &str = "Illegal format: url.";

/// Returns the URL if it is present and non-empty.
///
/// # Errors
///
/// Returns [`AppError::Validation`] when the URL is missing.
pub fn require_url(url: Option<&str>) -> Result<&str, AppError> {
    match url {
        Some(url) if !url.is_empty() => Ok(url),
        _ => Err(AppError::bad_request("Missing required parameter: url.")),
    }
}

/// Checks the URL has an `http://` or `https://` prefix and a non-trivial remainder.
///
/// # Errors
///
/// Returns [`AppError::Validation`] on mismatch.
pub fn validate_url_format(url: &str) -> Result<(), AppError> {
    if URL_FORMAT_REGEX.is_match(url) {
        Ok(())
    } else {
        Err(AppError::bad_request(ILLEGAL_URL_MESSAGE))
    }
}

/// Rejects URLs pointing back at the service itself.
///
/// `service_host` is the hostname the request was addressed to, without port.
/// Comparison ignores ASCII case.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if the URL cannot be parsed or its host
/// equals `service_host`.
pub fn ensure_foreign_host(url: &str, service_host: &str) -> Result<(), AppError> {
    let parsed = Url::parse(url).map_err(|_| AppError::bad_request(ILLEGAL_URL_MESSAGE))?;

    let target_host = parsed.host_str().unwrap_or_default();

    if target_host.eq_ignore_ascii_case(service_host) {
        return Err(AppError::bad_request(
            "You cannot shorten a link to the same domain.",
        ));
    }

    Ok(())
}
