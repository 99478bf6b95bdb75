//! Error types for fetching and rendering release statistics.

use reqwest::StatusCode;
use thiserror::Error;

/// Failure while reaching or reading the release-listing API.
///
/// Any of these aborts the whole fetch; pages collected before the failure
/// are discarded.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The configured API base URL is not an absolute http(s) URL.
    #[error("Invalid API base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// The request could not be sent or the response body could not be read.
    #[error("Failed to send request to {url}: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// HTTP 403 with a rate-limit message, or HTTP 429.
    #[error(
        "Rate limit exceeded for {url}. Try again later or set the GITHUB_TOKEN environment variable."
    )]
    RateLimitExceeded { url: String },

    /// HTTP 401.
    #[error("Authentication failed for {url}. Check your GITHUB_TOKEN.")]
    AuthenticationFailed { url: String },

    /// HTTP 404, usually an unknown owner or repository.
    #[error("Not found: {url}")]
    NotFound { url: String },

    /// HTTP 403 that is not a rate limit.
    #[error("Access forbidden: {url}. You may need authentication.")]
    Forbidden { url: String },

    /// Any other non-success status.
    #[error("Request to {url} failed with HTTP {status}")]
    Status { url: String, status: StatusCode },

    /// The response body is not a valid page of releases.
    #[error("Failed to parse JSON response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// The API pointed back at a page that was already fetched.
    #[error("Pagination loop detected: page {page} was already requested")]
    Pagination { page: u32 },
}

/// Failure while serializing a report.
#[derive(Error, Debug)]
pub enum FormatError {
    #[error("Failed to serialize release history: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to write text report")]
    Text(#[from] std::fmt::Error),
}
