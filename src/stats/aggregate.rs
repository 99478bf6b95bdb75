//! The filter-and-sum pass from raw records to a [`ReleaseHistory`].

use log::debug;

use super::{AssetFilter, Release, ReleaseAsset, ReleaseFilter, ReleaseHistory};
use crate::github::{ReleaseRecord, RepoId};

/// Filters raw records and totals their downloads, preserving input order.
///
/// Assets rejected by `assets` are neither listed nor counted.
pub fn aggregate(
    repo: &RepoId,
    records: &[ReleaseRecord],
    releases: &ReleaseFilter,
    assets: &AssetFilter,
) -> ReleaseHistory {
    let included: Vec<Release> = records
        .iter()
        .filter(|record| releases.includes(record))
        .map(|record| {
            let kept = record
                .assets
                .iter()
                .filter(|asset| assets.includes(asset))
                .map(|asset| ReleaseAsset {
                    name: asset.name.clone(),
                    downloads: asset.download_count,
                })
                .collect();
            Release::new(record.name.clone(), record.created_at, kept)
        })
        .collect();

    debug!(
        "{} of {} releases of {} included",
        included.len(),
        records.len(),
        repo
    );

    ReleaseHistory::new(repo.to_string(), included)
}
