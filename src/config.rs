//! Options for one report run and construction of the services they imply.

use anyhow::Result;
use log::debug;
use reqwest::{
    Client,
    header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue},
};

use crate::{
    github::{DEFAULT_API_URL, GitHubSource, RepoId},
    http::HttpClient,
    report::OutputFormat,
    stats::{AssetFilter, ReleaseFilter},
};

const USER_AGENT: &str = "ghds-cli";

/// Everything a single invocation needs, fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub repo: RepoId,
    /// Only report the release with this name or tag.
    pub release: Option<String>,
    pub format: OutputFormat,
    pub api_url: String,
    pub token: Option<String>,
    pub include_prereleases: bool,
    pub skip_checksums: bool,
}

impl Config {
    /// Defaults: every non-pre-release, text output, public GitHub, no token.
    pub fn new(repo: RepoId) -> Self {
        Self {
            repo,
            release: None,
            format: OutputFormat::Text,
            api_url: DEFAULT_API_URL.to_string(),
            token: None,
            include_prereleases: false,
            skip_checksums: false,
        }
    }

    pub fn release_filter(&self) -> ReleaseFilter {
        ReleaseFilter {
            release: self.release.clone(),
            include_prereleases: self.include_prereleases,
        }
    }

    pub fn asset_filter(&self) -> AssetFilter {
        AssetFilter {
            skip_checksums: self.skip_checksums,
        }
    }
}

/// Build an HTTP client with optional authentication token
pub fn build_http_client(token: Option<&str>) -> Result<HttpClient> {
    let mut headers = HeaderMap::new();
    headers.insert(
        ACCEPT,
        HeaderValue::from_static("application/vnd.github+json"),
    );

    if let Some(token) = token {
        let mut auth_value = HeaderValue::from_str(&format!("Bearer {}", token))?;
        auth_value.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth_value);
        debug!("Using token for authentication: {}", mask_token(token));
    }

    let client = Client::builder()
        .user_agent(USER_AGENT)
        .default_headers(headers)
        .build()?;

    Ok(HttpClient::new(client))
}

/// Build the GitHub release source from configuration
pub fn build_source(config: &Config) -> Result<GitHubSource> {
    let http_client = build_http_client(config.token.as_deref())?;
    Ok(GitHubSource::from_http_client(
        http_client,
        &config.api_url,
    )?)
}

/// Keeps the first 4 and last 4 characters of tokens long enough to hide something.
fn mask_token(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    if chars.len() <= 12 {
        return "*".repeat(chars.len());
    }
    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}*********{}", head, tail)
}
