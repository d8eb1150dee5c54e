//! Client provenance captured from each request.

use axum::extract::{ConnectInfo, FromRequestParts};
use axum::http::{HeaderMap, header, request::Parts};
use std::convert::Infallible;
use std::net::SocketAddr;

use crate::state::AppState;
use crate::utils::extract_host::extract_hostname;

const X_FORWARDED_FOR: &str = "x-forwarded-for";
const X_REAL_IP: &str = "x-real-ip";
const X_FORWARDED_PROTO: &str = "x-forwarded-proto";

/// Who sent a request and where it was addressed.
///
/// Every field is optional because clients may omit the headers; a missing
/// value is stored as `NULL` rather than failing the request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestMeta {
    pub ip: Option<String>,
    pub user_agent: Option<String>,
    pub referer: Option<String>,
    /// Hostname of the service as seen by the client, lowercased, no port.
    pub host: Option<String>,
    /// `http` or `https`.
    pub scheme: String,
}

impl RequestMeta {
    /// Reads provenance from request parts.
    ///
    /// When `behind_proxy` is set, client IP and scheme are taken from
    /// `X-Forwarded-For` / `X-Real-IP` / `X-Forwarded-Proto`. Otherwise the
    /// peer socket address is used and the scheme is `default_scheme`.
    pub fn from_parts(parts: &Parts, behind_proxy: bool, default_scheme: &str) -> Self {
        let headers = &parts.headers;

        let peer_ip = parts
            .extensions
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| addr.ip().to_string());

        let ip = if behind_proxy {
            forwarded_ip(headers).or(peer_ip)
        } else {
            peer_ip
        };

        let forwarded_scheme = behind_proxy
            .then(|| header_str(headers, X_FORWARDED_PROTO))
            .flatten()
            .and_then(|v| v.split(',').next())
            .map(|v| v.trim().to_ascii_lowercase())
            .filter(|v| v == "http" || v == "https");

        let scheme = forwarded_scheme.unwrap_or_else(|| default_scheme.to_string());

        Self {
            ip,
            user_agent: header_str(headers, header::USER_AGENT.as_str()).map(str::to_string),
            referer: header_str(headers, header::REFERER.as_str()).map(str::to_string),
            host: extract_hostname(headers, &parts.uri),
            scheme,
        }
    }

    /// Scheme and hostname of the service, e.g. `https://s.example.com`.
    pub fn origin(&self) -> Option<String> {
        self.host
            .as_ref()
            .map(|host| format!("{}://{}", self.scheme, host))
    }
}

impl FromRequestParts<AppState> for RequestMeta {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(Self::from_parts(
            parts,
            state.behind_proxy,
            &state.public_scheme,
        ))
    }
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
}

/// First hop of `X-Forwarded-For`, then `X-Real-IP`.
fn forwarded_ip(headers: &HeaderMap) -> Option<String> {
    header_str(headers, X_FORWARDED_FOR)
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .or_else(|| header_str(headers, X_REAL_IP))
        .map(str::to_string)
}
