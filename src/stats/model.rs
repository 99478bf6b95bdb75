//! Report model: assets, releases and the per-repository history.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One downloadable file of a release and how often it was fetched.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ReleaseAsset {
    pub name: String,
    #[serde(rename = "download_count")]
    pub downloads: u64,
}

/// A release that made it into the report.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Release {
    pub name: String,
    pub date: DateTime<Utc>,
    pub assets: Vec<ReleaseAsset>,
    /// Sum of `assets[].downloads`.
    pub total_downloads: u64,
}

impl Release {
    pub fn new(name: impl Into<String>, date: DateTime<Utc>, assets: Vec<ReleaseAsset>) -> Self {
        let total_downloads = assets
            .iter()
            .fold(0u64, |total, asset| total.saturating_add(asset.downloads));
        Self {
            name: name.into(),
            date,
            assets,
            total_downloads,
        }
    }
}

/// Download statistics for every reported release of one repository.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ReleaseHistory {
    /// `owner/repo`
    pub repository: String,
    pub releases: Vec<Release>,
    /// Always `releases.len()`.
    pub release_count: usize,
}

impl ReleaseHistory {
    pub fn new(repository: impl Into<String>, releases: Vec<Release>) -> Self {
        Self {
            repository: repository.into(),
            release_count: releases.len(),
            releases,
        }
    }

    /// Downloads across all reported releases.
    pub fn total_downloads(&self) -> u64 {
        self.releases
            .iter()
            .fold(0u64, |total, r| total.saturating_add(r.total_downloads))
    }
}
