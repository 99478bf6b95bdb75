//! Release-level and asset-level inclusion rules.

use crate::github::{AssetRecord, ReleaseRecord};

/// Asset names ending with this are checksum files.
pub const CHECKSUM_SUFFIX: &str = "sha256";

/// Decides which releases appear in a report.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReleaseFilter {
    /// Only the release whose name or tag equals this (case-sensitive).
    pub release: Option<String>,
    pub include_prereleases: bool,
}

impl ReleaseFilter {
    /// Checked in order: requested release, pre-release opt-in, at least one asset.
    pub fn includes(&self, record: &ReleaseRecord) -> bool {
        if let Some(wanted) = &self.release {
            if !matches_name(&record.name, wanted) && !matches_name(&record.tag_name, wanted) {
                return false;
            }
        }

        if record.prerelease && !self.include_prereleases {
            return false;
        }

        !record.assets.is_empty()
    }
}

// A blank field never matches, even a blank request.
fn matches_name(field: &str, wanted: &str) -> bool {
    !field.is_empty() && field == wanted
}

/// Decides which assets of an included release are listed and counted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AssetFilter {
    pub skip_checksums: bool,
}

impl AssetFilter {
    pub fn includes(&self, asset: &AssetRecord) -> bool {
        !(self.skip_checksums && asset.name.ends_with(CHECKSUM_SUFFIX))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn record(name: &str, tag: &str, prerelease: bool, assets: usize) -> ReleaseRecord {
        ReleaseRecord {
            name: name.to_string(),
            tag_name: tag.to_string(),
            created_at: Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap(),
            prerelease,
            assets: (0..assets)
                .map(|i| AssetRecord {
                    name: format!("asset-{i}.zip"),
                    download_count: 1,
                })
                .collect(),
        }
    }

    fn only(release: &str) -> ReleaseFilter {
        ReleaseFilter {
            release: Some(release.to_string()),
            include_prereleases: false,
        }
    }

    #[test]
    fn test_no_assets_excluded() {
        let filter = ReleaseFilter::default();
        assert!(!filter.includes(&record("", "", false, 0)));

        let everything = ReleaseFilter {
            release: Some("v1".into()),
            include_prereleases: true,
        };
        assert!(!everything.includes(&record("v1", "v1", true, 0)));
    }

    #[test]
    fn test_prerelease_excluded_by_default() {
        let filter = ReleaseFilter::default();
        assert!(!filter.includes(&record("", "v1-rc1", true, 1)));
    }

    #[test]
    fn test_prerelease_matching_requested_release_still_excluded() {
        assert!(!only("v1").includes(&record("v1", "v1", true, 1)));
    }

    #[test]
    fn test_prerelease_opt_in() {
        let filter = ReleaseFilter {
            release: None,
            include_prereleases: true,
        };
        assert!(filter.includes(&record("v1-rc1", "v1-rc1", true, 1)));
        assert!(filter.includes(&record("v1", "v1", false, 1)));
    }

    #[test]
    fn test_empty_name_included_without_request() {
        let filter = ReleaseFilter::default();
        assert!(filter.includes(&record("", "", false, 1)));
    }

    #[test]
    fn test_empty_request_does_not_match_empty_name() {
        assert!(!only("").includes(&record("", "", false, 1)));
    }

    #[test]
    fn test_requested_release_matches_name() {
        assert!(only("v1").includes(&record("v1", "release-1", false, 1)));
        assert!(!only("v2").includes(&record("v1", "release-1", false, 1)));
    }

    #[test]
    fn test_requested_release_matches_tag() {
        assert!(only("v1.0.0").includes(&record("First stable", "v1.0.0", false, 1)));
        assert!(only("v1.0.0").includes(&record("", "v1.0.0", false, 1)));
    }

    #[test]
    fn test_requested_release_is_case_sensitive() {
        assert!(!only("V1").includes(&record("v1", "v1", false, 1)));
    }

    #[test]
    fn test_asset_filter() {
        let checksum = AssetRecord {
            name: "tool.tar.gz.sha256".into(),
            download_count: 3,
        };
        let archive = AssetRecord {
            name: "tool.tar.gz".into(),
            download_count: 3,
        };

        let keep_all = AssetFilter::default();
        assert!(keep_all.includes(&checksum));
        assert!(keep_all.includes(&archive));

        let skip = AssetFilter {
            skip_checksums: true,
        };
        assert!(!skip.includes(&checksum));
        assert!(skip.includes(&archive));
        assert!(!skip.includes(&AssetRecord {
            name: "checksums_sha256".into(),
            download_count: 0,
        }));
        assert!(skip.includes(&AssetRecord {
            name: "SHA256SUMS".into(),
            download_count: 0,
        }));
    }
}
