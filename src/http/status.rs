//! Mapping of non-success HTTP responses to user-facing fetch errors.

use reqwest::StatusCode;

use crate::error::FetchError;

/// Classifies a non-success response.
///
/// GitHub reports primary rate limits as 403 with `x-ratelimit-remaining: 0`
/// and a body mentioning the rate limit, secondary ones as 429.
pub fn classify_status(
    status: StatusCode,
    ratelimit_remaining: Option<&str>,
    body: &str,
    url: &str,
) -> FetchError {
    let url = url.to_string();
    match status {
        StatusCode::UNAUTHORIZED => FetchError::AuthenticationFailed { url },
        StatusCode::FORBIDDEN if is_rate_limited(ratelimit_remaining, body) => {
            FetchError::RateLimitExceeded { url }
        }
        StatusCode::FORBIDDEN => FetchError::Forbidden { url },
        StatusCode::TOO_MANY_REQUESTS => FetchError::RateLimitExceeded { url },
        StatusCode::NOT_FOUND => FetchError::NotFound { url },
        status => FetchError::Status { url, status },
    }
}

fn is_rate_limited(remaining: Option<&str>, body: &str) -> bool {
    remaining.map(str::trim) == Some("0") || body.to_lowercase().contains("rate limit")
}
