//! GitHub implementation of [`ReleaseSource`].

use async_trait::async_trait;
use log::debug;
use reqwest::Url;

use super::{ReleasePage, ReleaseRecord, ReleaseSource, RepoId};
use crate::error::FetchError;
use crate::http::{HttpClient, JsonPage};

/// Public GitHub REST endpoint.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Releases requested per page. GitHub clamps anything above 100.
pub const PER_PAGE: u32 = 200;

/// Lists releases from `{api_url}/repos/{owner}/{repo}/releases`.
pub struct GitHubSource {
    http_client: HttpClient,
    api_url: String,
}

impl GitHubSource {
    /// Create from an existing HttpClient, validating the base URL.
    ///
    /// Enterprise hosts are usually of the form `https://host/api/v3/`; the
    /// trailing slash is dropped.
    pub fn from_http_client(http_client: HttpClient, api_url: &str) -> Result<Self, FetchError> {
        let api_url = normalize_api_url(api_url)?;
        Ok(Self {
            http_client,
            api_url,
        })
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    fn releases_url(&self, repo: &RepoId) -> String {
        format!("{}/repos/{}/{}/releases", self.api_url, repo.owner, repo.repo)
    }
}

#[async_trait]
impl ReleaseSource for GitHubSource {
    #[tracing::instrument(skip(self))]
    async fn list_releases(&self, repo: &RepoId, page: u32) -> Result<ReleasePage, FetchError> {
        let url = self.releases_url(repo);
        debug!("Fetching releases page {} from {}...", page, url);

        let per_page = PER_PAGE.to_string();
        let page_str = page.to_string();
        let JsonPage { items, next_page } = self
            .http_client
            .get_json_page::<Vec<ReleaseRecord>>(
                &url,
                &[("per_page", per_page.as_str()), ("page", page_str.as_str())],
            )
            .await?;

        debug!(
            "Page {} of {} returned {} releases (next: {:?})",
            page,
            repo,
            items.len(),
            next_page
        );

        Ok(ReleasePage {
            releases: items,
            next_page,
        })
    }
}

fn normalize_api_url(api_url: &str) -> Result<String, FetchError> {
    let invalid = |reason: String| FetchError::InvalidBaseUrl {
        url: api_url.to_string(),
        reason,
    };

    let parsed = Url::parse(api_url.trim()).map_err(|e| invalid(e.to_string()))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme '{}'", parsed.scheme())));
    }
    if parsed.query().is_some() || parsed.fragment().is_some() {
        return Err(invalid("query strings and fragments are not allowed".to_string()));
    }

    Ok(parsed.as_str().trim_end_matches('/').to_string())
}
