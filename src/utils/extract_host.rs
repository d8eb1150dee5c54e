//! Hostname extraction from HTTP requests.

use axum::http::{HeaderMap, Uri, header};

/// Returns the hostname a request was addressed to, lowercased and without port.
///
/// The `Host` header is preferred. HTTP/2 requests carry the authority in the
/// URI instead, which is used as a fallback.
///
/// # Examples
///
/// ```ignore
/// let mut headers = HeaderMap::new();
/// headers.insert(header::HOST, "S.Example.com:8080".parse().unwrap());
///
/// let host = extract_hostname(&headers, &Uri::from_static("/create"));
/// assert_eq!(host.as_deref(), Some("s.example.com"));
/// ```
pub fn extract_hostname(headers: &HeaderMap, uri: &Uri) -> Option<String> {
    let host = headers
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .or_else(|| uri.authority().map(|a| a.as_str()))?;

    let host = strip_port(host.trim());

    if host.is_empty() {
        None
    } else {
        Some(host.to_ascii_lowercase())
    }
}

/// Removes a trailing `:port`, keeping IPv6 literals bracketed.
fn strip_port(host: &str) -> &str {
    // Drop any userinfo that can appear in an absolute-form authority.
    let host = host.rsplit('@').next().unwrap_or(host);

    if host.starts_with('[') {
        match host.find(']') {
            Some(end_bracket) => &host[..=end_bracket],
            None => host,
        }
    } else {
        host.split(':').next().unwrap_or(host)
    }
}
