//! DTOs for the create-short-URL endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to shorten a URL.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The original URL to shorten (must be valid HTTP/HTTPS).
    #[validate(url(message = "Invalid URL format"))]
    pub url: String,
}

#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub short_id: String,
    pub url: String,

    /// Full short link, rendered only when a public base URL is configured.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_url: Option<String>,
}
