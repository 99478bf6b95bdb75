//! Fetch → aggregate → render.

use anyhow::{Context, Result};
use log::info;

use crate::{
    config::{Config, build_source},
    github::{ReleaseSource, fetch_releases},
    report::render,
    stats::aggregate,
};

/// Produces the download report for `config.repo` from the configured API.
#[tracing::instrument(skip(config), fields(repo = %config.repo))]
pub async fn run(config: &Config) -> Result<String> {
    let source = build_source(config)?;
    report(&source, config).await
}

/// Produces the download report using an already built release source.
pub async fn report<S>(source: &S, config: &Config) -> Result<String>
where
    S: ReleaseSource + ?Sized,
{
    let records = fetch_releases(source, &config.repo)
        .await
        .with_context(|| format!("Failed to fetch releases of {}", config.repo))?;

    let history = aggregate(
        &config.repo,
        &records,
        &config.release_filter(),
        &config.asset_filter(),
    );
    info!(
        "Reporting {} releases of {} ({} downloads)",
        history.release_count,
        history.repository,
        history.total_downloads()
    );

    render(&history, config.format).context("Failed to format download statistics")
}
