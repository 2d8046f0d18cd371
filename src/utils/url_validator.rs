//! Destination URL validation.
//!
//! Accepted ASCII URLs are stored exactly as submitted (after trimming
//! surrounding whitespace) so redirects return the caller's own spelling of
//! the URL. URLs with non-ASCII characters are stored in their parsed form
//! (punycode host, percent-encoded path). Every stored URL is therefore valid
//! as a `Location` header value.

use url::Url;

/// Maximum accepted URL length in bytes.
pub const MAX_URL_LENGTH: usize = 2048;

/// Errors that can occur during URL validation.
#[derive(Debug, thiserror::Error)]
pub enum UrlValidationError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("URL must include a host")]
    MissingHost,

    #[error("URL exceeds 2048 characters")]
    TooLong,

    #[error("URL must not contain whitespace or control characters")]
    InvalidCharacters,
}

/// Validates a destination URL and returns the string to persist.
///
/// # Rules
///
/// 1. Must parse as an absolute URL
/// 2. Scheme must be `http` or `https`
/// 3. Must have a non-empty host
/// 4. Must be at most [`MAX_URL_LENGTH`] bytes
/// 5. Must not contain whitespace or control characters, which the URL parser
///    would otherwise strip or encode silently
///
/// # Errors
///
/// Returns the first [`UrlValidationError`] rule violated.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(validate_url(" https://example.com ").unwrap(), "https://example.com");
/// assert!(validate_url("not-a-url").is_err());
/// assert!(validate_url("javascript:alert(1)").is_err());
/// ```
pub fn validate_url(input: &str) -> Result<String, UrlValidationError> {
    let trimmed = input.trim();

    if trimmed.len() > MAX_URL_LENGTH {
        return Err(UrlValidationError::TooLong);
    }

    if trimmed
        .chars()
        .any(|c| c.is_whitespace() || c.is_control())
    {
        return Err(UrlValidationError::InvalidCharacters);
    }

    let url = Url::parse(trimmed).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(UrlValidationError::UnsupportedProtocol),
    }

    match url.host_str() {
        Some(host) if !host.is_empty() => {}
        _ => return Err(UrlValidationError::MissingHost),
    }

    if trimmed.is_ascii() {
        Ok(trimmed.to_string())
    } else {
        Ok(url.as_str().to_string())
    }
}
