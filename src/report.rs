//! Rendering of a [`ReleaseHistory`] as a text table or a JSON document.

use std::fmt::Write;

use crate::error::FormatError;
use crate::stats::{Release, ReleaseHistory};

const DIVIDER: &str = "------------------------------------------";
const ASSET_HEADER: &str = " Asset:";
const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S %z UTC";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

pub fn render(history: &ReleaseHistory, format: OutputFormat) -> Result<String, FormatError> {
    match format {
        OutputFormat::Json => render_json(history),
        OutputFormat::Text => render_text(history),
    }
}

/// Compact JSON, dates in RFC 3339.
pub fn render_json(history: &ReleaseHistory) -> Result<String, FormatError> {
    Ok(serde_json::to_string(history)?)
}

/// Human-readable report: a repository header, then one block per release,
/// each closed by a divider line.
pub fn render_text(history: &ReleaseHistory) -> Result<String, FormatError> {
    let mut out = String::new();
    writeln!(out, "Repository: {}", history.repository)?;
    writeln!(out)?;

    for release in &history.releases {
        write_release(&mut out, release)?;
    }

    Ok(out)
}

fn write_release<W: Write>(out: &mut W, release: &Release) -> std::fmt::Result {
    let labels: Vec<String> = release
        .assets
        .iter()
        .map(|asset| format!(" - {}", asset.name))
        .collect();
    let width = labels
        .iter()
        .map(|label| label.chars().count())
        .chain(std::iter::once(ASSET_HEADER.len()))
        .max()
        .unwrap_or_default()
        + 1;

    writeln!(
        out,
        "Release: {} Date: {}",
        release.name,
        release.date.format(DATE_FORMAT)
    )?;
    writeln!(out)?;
    writeln!(out, "{:<width$}Downloads:", ASSET_HEADER)?;
    for (label, asset) in labels.iter().zip(&release.assets) {
        writeln!(out, "{:<width$} {}", label, asset.downloads)?;
    }
    writeln!(out)?;
    writeln!(out, "Total downloads: {}", release.total_downloads)?;
    writeln!(out)?;
    writeln!(out, "{}", DIVIDER)
}
