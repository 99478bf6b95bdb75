//! HTTP client for paginated JSON endpoints.

use log::debug;
use reqwest::{Client, header::LINK};
use serde::de::DeserializeOwned;

use super::link::next_page;
use super::status::classify_status;
use crate::error::FetchError;

/// A decoded page plus the page number the server advertised as next.
#[derive(Debug)]
pub struct JsonPage<T> {
    pub items: T,
    pub next_page: Option<u32>,
}

/// Thin wrapper around a configured reqwest [`Client`].
///
/// Requests are made exactly once; a failure is returned to the caller as-is.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Creates a new HTTP client wrapping the given reqwest Client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Performs a GET request with query parameters, deserializes the JSON
    /// body and reads the next page from the `Link` header.
    #[tracing::instrument(skip(self, query))]
    pub async fn get_json_page<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<JsonPage<T>, FetchError> {
        debug!("GET JSON from {} with query {:?}...", url, query);

        let request_error = |source: reqwest::Error| FetchError::Request {
            url: url.to_string(),
            source,
        };

        let response = self
            .client
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(request_error)?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = response.text().await.map_err(request_error)?;

        if !status.is_success() {
            let remaining = headers
                .get("x-ratelimit-remaining")
                .and_then(|v| v.to_str().ok());
            debug!("{} returned HTTP {}", url, status);
            return Err(classify_status(status, remaining, &body, url));
        }

        let next = headers
            .get(LINK)
            .and_then(|v| v.to_str().ok())
            .and_then(next_page);

        let items = serde_json::from_str(&body).map_err(|source| FetchError::Decode {
            url: url.to_string(),
            source,
        })?;

        Ok(JsonPage {
            items,
            next_page: next,
        })
    }
}
