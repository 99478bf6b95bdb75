//! Sequential pagination over a [`ReleaseSource`].

use log::{debug, info};
use std::collections::HashSet;

use super::{ReleaseRecord, ReleaseSource, RepoId};
use crate::error::FetchError;

/// Collects every release of `repo`, one page after another.
///
/// All-or-nothing: the first failing page aborts the fetch and the pages
/// already collected are dropped.
#[tracing::instrument(skip(source))]
pub async fn fetch_releases<S>(source: &S, repo: &RepoId) -> Result<Vec<ReleaseRecord>, FetchError>
where
    S: ReleaseSource + ?Sized,
{
    let mut releases = Vec::new();
    let mut requested = HashSet::new();
    let mut page = 1;

    loop {
        if !requested.insert(page) {
            return Err(FetchError::Pagination { page });
        }

        let result = source.list_releases(repo, page).await?;
        releases.extend(result.releases);

        match result.next_page {
            Some(next) => page = next,
            None => break,
        }
    }

    debug!("Fetched {} pages for {}", requested.len(), repo);
    info!("Found {} releases in {}", releases.len(), repo);

    Ok(releases)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::{AssetRecord, MockReleaseSource, ReleasePage};
    use chrono::{TimeZone, Utc};
    use mockall::predicate::eq;
    use mockall::Sequence;

    fn record(tag: &str) -> ReleaseRecord {
        ReleaseRecord {
            name: tag.to_string(),
            tag_name: tag.to_string(),
            created_at: Utc.with_ymd_and_hms(2013, 2, 27, 19, 35, 32).unwrap(),
            prerelease: false,
            assets: vec![AssetRecord {
                name: "example.zip".to_string(),
                download_count: 1,
            }],
        }
    }

    fn foo_bar() -> RepoId {
        RepoId::new("foo", "bar").unwrap()
    }

    #[tokio::test]
    async fn test_fetch_single_page() {
        let mut source = MockReleaseSource::new();
        source
            .expect_list_releases()
            .with(eq(foo_bar()), eq(1))
            .times(1)
            .returning(|_, _| {
                Ok(ReleasePage {
                    releases: vec![record("v2.0.0"), record("v1.0.0")],
                    next_page: None,
                })
            });

        let releases = fetch_releases(&source, &foo_bar()).await.unwrap();

        let tags: Vec<_> = releases.iter().map(|r| r.tag_name.as_str()).collect();
        assert_eq!(tags, ["v2.0.0", "v1.0.0"]);
    }

    #[tokio::test]
    async fn test_fetch_concatenates_pages_in_order() {
        let mut seq = Sequence::new();
        let mut source = MockReleaseSource::new();
        source
            .expect_list_releases()
            .with(eq(foo_bar()), eq(1))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| {
                Ok(ReleasePage {
                    releases: vec![record("v3.0.0"), record("v2.0.0")],
                    next_page: Some(2),
                })
            });
        source
            .expect_list_releases()
            .with(eq(foo_bar()), eq(2))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| {
                Ok(ReleasePage {
                    releases: vec![record("v1.0.0")],
                    next_page: None,
                })
            });

        let releases = fetch_releases(&source, &foo_bar()).await.unwrap();

        let tags: Vec<_> = releases.iter().map(|r| r.tag_name.as_str()).collect();
        assert_eq!(tags, ["v3.0.0", "v2.0.0", "v1.0.0"]);
    }

    #[tokio::test]
    async fn test_fetch_fails_when_second_page_fails() {
        let mut source = MockReleaseSource::new();
        source
            .expect_list_releases()
            .with(eq(foo_bar()), eq(1))
            .times(1)
            .returning(|_, _| {
                Ok(ReleasePage {
                    releases: vec![record("v2.0.0")],
                    next_page: Some(2),
                })
            });
        source
            .expect_list_releases()
            .with(eq(foo_bar()), eq(2))
            .times(1)
            .returning(|_, _| {
                Err(FetchError::NotFound {
                    url: "http://localhost/repos/foo/bar/releases".to_string(),
                })
            });

        let result = fetch_releases(&source, &foo_bar()).await;

        assert!(matches!(result, Err(FetchError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_fetch_detects_page_loop() {
        let mut source = MockReleaseSource::new();
        source
            .expect_list_releases()
            .with(eq(foo_bar()), eq(1))
            .times(1)
            .returning(|_, _| {
                Ok(ReleasePage {
                    releases: vec![record("v1.0.0")],
                    next_page: Some(1),
                })
            });

        let result = fetch_releases(&source, &foo_bar()).await;

        assert!(matches!(result, Err(FetchError::Pagination { page: 1 })));
    }

    #[tokio::test]
    async fn test_fetch_empty_repository() {
        let mut source = MockReleaseSource::new();
        source
            .expect_list_releases()
            .times(1)
            .returning(|_, _| Ok(ReleasePage::default()));

        let releases = fetch_releases(&source, &foo_bar()).await.unwrap();
        assert!(releases.is_empty());
    }
}
