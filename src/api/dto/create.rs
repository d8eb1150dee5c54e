//! DTOs for the link creation endpoint.

use serde::{Deserialize, Serialize};

use crate::application::services::{CreateLink, ShortLink};

/// Body of `POST /create`.
///
/// Both fields are optional at the decoding stage so a missing `url` is
/// reported as a validation error rather than a decoding failure.
#[derive(Debug, Default, Deserialize)]
pub struct CreateRequest {
    #[serde(default)]
    pub url: Option<String>,

    #[serde(default)]
    pub slug: Option<String>,
}

impl From<CreateRequest> for CreateLink {
    fn from(req: CreateRequest) -> Self {
        Self {
            url: req.url,
            slug: req.slug,
        }
    }
}

/// Successful creation (or lookup) result.
///
/// ```json
/// { "slug": "aZ3k9Q", "link": "https://s.example.com/aZ3k9Q" }
/// ```
#[derive(Debug, Serialize)]
pub struct CreateResponse {
    pub slug: String,
    pub link: String,
}

impl From<ShortLink> for CreateResponse {
    fn from(short: ShortLink) -> Self {
        Self {
            slug: short.slug,
            link: short.link,
        }
    }
}

/// Message-only body, used for the taken slug notice.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}
