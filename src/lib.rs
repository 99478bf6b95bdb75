//! Release download statistics for GitHub repositories.
//!
//! [`github::fetch_releases`] pages through the release-listing API,
//! [`stats::aggregate`] filters the raw records and totals their downloads,
//! and [`report::render`] turns the result into text or JSON. [`app::run`]
//! wires the three together from a [`config::Config`].

pub mod app;
pub mod config;
pub mod error;
pub mod github;
pub mod http;
pub mod report;
pub mod stats;
