//! Typed errors for non-success responses from the release endpoints.

use anyhow::Result;
use reqwest::{Response, StatusCode};

/// HTTP-status failures surfaced to the user.
#[derive(Debug)]
pub enum FetchError {
    /// Rate limit exceeded (HTTP 429)
    RateLimited,
    /// Forbidden access, often an unauthenticated rate limit (HTTP 403)
    Forbidden,
    /// Resource not found (HTTP 404)
    NotFound,
    /// Any other non-success status
    Status(u16),
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchError::RateLimited => {
                write!(f, "Rate limit exceeded (HTTP 429). Try again later.")
            }
            FetchError::Forbidden => {
                write!(
                    f,
                    "Access forbidden (HTTP 403). You may be rate limited; try setting the GITHUB_TOKEN environment variable."
                )
            }
            FetchError::NotFound => {
                write!(f, "The requested resource was not found (HTTP 404)")
            }
            FetchError::Status(code) => write!(f, "GitHub returned HTTP {}", code),
        }
    }
}

impl std::error::Error for FetchError {}

/// Passes 2xx responses through; maps anything else to a [`FetchError`]
/// carrying the status code.
pub fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    Err(match status {
        StatusCode::TOO_MANY_REQUESTS => FetchError::RateLimited.into(),
        StatusCode::FORBIDDEN => FetchError::Forbidden.into(),
        StatusCode::NOT_FOUND => FetchError::NotFound.into(),
        _ => FetchError::Status(status.as_u16()).into(),
    })
}
