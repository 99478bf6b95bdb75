//! HTTP plumbing for the release-listing API: a JSON page client, status
//! classification and `Link` header pagination.

mod client;
mod link;
mod status;

pub use client::{HttpClient, JsonPage};
