//! Parsing of RFC 8288 `Link` headers as sent by the GitHub REST API.
//!
//! ```text
//! <https://api.github.com/repositories/1/releases?per_page=200&page=2>; rel="next",
//! <https://api.github.com/repositories/1/releases?per_page=200&page=5>; rel="last"
//! ```

use reqwest::Url;

/// Returns the `page` query parameter of the `rel="next"` entry, if any.
pub fn next_page(header: &str) -> Option<u32> {
    split_entries(header)
        .into_iter()
        .filter_map(parse_entry)
        .find(|(_, rels)| rels.iter().any(|r| *r == "next"))
        .and_then(|(target, _)| page_param(target))
}

/// Splits on the commas between entries; commas inside `<...>` belong to the target.
fn split_entries(header: &str) -> Vec<&str> {
    let mut entries = Vec::new();
    let mut in_target = false;
    let mut start = 0;

    for (i, c) in header.char_indices() {
        match c {
            '<' => in_target = true,
            '>' => in_target = false,
            ',' if !in_target => {
                entries.push(&header[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    entries.push(&header[start..]);
    entries
}

/// Splits one `<target>; param=value; ...` entry into its target and rel values.
fn parse_entry(entry: &str) -> Option<(&str, Vec<&str>)> {
    let (target, params) = entry.trim().strip_prefix('<')?.split_once('>')?;

    let rels = params
        .split(';')
        .filter_map(|param| {
            let (key, value) = param.split_once('=')?;
            if key.trim().eq_ignore_ascii_case("rel") {
                Some(value.trim().trim_matches('"'))
            } else {
                None
            }
        })
        .flat_map(str::split_whitespace)
        .collect();

    Some((target, rels))
}

fn page_param(target: &str) -> Option<u32> {
    let url = Url::parse(target).ok()?;
    url.query_pairs()
        .find(|(key, _)| key == "page")
        .and_then(|(_, value)| value.parse().ok())
}
