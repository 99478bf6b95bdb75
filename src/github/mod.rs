//! Access to the release-listing API of a GitHub (or GitHub Enterprise) host.
//!
//! [`ReleaseSource`] is the paginated capability the rest of the crate
//! consumes; [`GitHubSource`] implements it over HTTP and [`fetch_releases`]
//! drains every page of it.

mod fetch;
mod source;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::fmt;

use crate::error::FetchError;

pub use fetch::fetch_releases;
pub use source::{DEFAULT_API_URL, GitHubSource, PER_PAGE};

/// Repository identifier, displayed as `owner/repo`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoId {
    pub owner: String,
    pub repo: String,
}

impl RepoId {
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> anyhow::Result<Self> {
        let (owner, repo) = (owner.into(), repo.into());
        if owner.trim().is_empty() || repo.trim().is_empty() {
            anyhow::bail!("Must set the repo and owner.");
        }
        Ok(Self { owner, repo })
    }
}

impl fmt::Display for RepoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

/// A release exactly as the API reports it, before any filtering.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ReleaseRecord {
    /// Display name; GitHub sends `null` for releases created without a title.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    pub tag_name: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub prerelease: bool,
    #[serde(default)]
    pub assets: Vec<AssetRecord>,
}

/// A downloadable file attached to a [`ReleaseRecord`].
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct AssetRecord {
    pub name: String,
    #[serde(default)]
    pub download_count: u64,
}

/// One page of releases and the page to request after it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReleasePage {
    pub releases: Vec<ReleaseRecord>,
    pub next_page: Option<u32>,
}

/// Paginated release listing.
///
/// Pages are 1-based; `next_page == None` marks the last page.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReleaseSource: Send + Sync {
    /// Fetch a single page of releases.
    async fn list_releases(&self, repo: &RepoId, page: u32) -> Result<ReleasePage, FetchError>;
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
