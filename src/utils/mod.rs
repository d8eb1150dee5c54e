//! Helpers shared by the request handlers and services.
//!
//! - [`slug`] - Random slug generation and custom slug validation
//! - [`target_url`] - Checks applied to the URL being shortened
//! - [`extract_host`] - Service hostname from the `Host` header
//! - [`request_meta`] - Client provenance extractor (IP, user agent, referer, origin)
//! - [`time_format`] - Configurable timestamp formatting for stored rows

pub mod extract_host;
pub mod request_meta;
pub mod slug;
pub mod target_url;
pub mod time_format;
