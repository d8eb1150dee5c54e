//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use tracing::{error, warn};
use url::Url;

use crate::application::services::Resolution;
use crate::state::AppState;
use crate::utils::request_meta::RequestMeta;

/// Redirects a slug to its stored URL.
///
/// # Endpoint
///
/// `GET /{slug}`
///
/// # Request Flow
///
/// 1. Look up the slug
/// 2. Record an access log entry (failures are logged and ignored)
/// 3. Return `302 Found` with `Location` set to the stored URL
///
/// Unknown slugs get the static 404 page with `text/html` content type. A
/// failing lookup is logged and answered the same way, as is a stored URL
/// that cannot be sent as a `Location` header at all.
pub async fn redirect_handler(
    Path(slug): Path<String>,
    State(state): State<AppState>,
    meta: RequestMeta,
) -> Response {
    match state.resolver.resolve(&slug, &meta).await {
        Ok(Resolution::Redirect(url)) => match location(&url) {
            Some(location) => (StatusCode::FOUND, [(header::LOCATION, location)]).into_response(),
            None => {
                warn!(slug, url, "stored url cannot be used as a Location header");
                not_found_page(&state)
            }
        },
        Ok(Resolution::NotFound) => not_found_page(&state),
        Err(e) => {
            error!(slug, error = %e, "failed to resolve slug");
            not_found_page(&state)
        }
    }
}

/// The stored URL as a header value.
///
/// URLs that are not plain visible ASCII (control characters, non-ASCII hosts
/// or paths) are sent in their WHATWG serialization instead, which strips
/// tabs and newlines, punycodes the host and percent-encodes the rest.
fn location(url: &str) -> Option<HeaderValue> {
    HeaderValue::from_str(url).ok().or_else(|| {
        let parsed = Url::parse(url).ok()?;
        HeaderValue::from_str(parsed.as_str()).ok()
    })
}

fn not_found_page(state: &AppState) -> Response {
    (
        StatusCode::NOT_FOUND,
        [(header::CONTENT_TYPE, "text/html;charset=UTF-8")],
        state.not_found_page.to_string(),
    )
        .into_response()
}
