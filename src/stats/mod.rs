//! Download statistics: the report model and the pure filter/aggregate pass
//! that builds it from raw release records.

mod aggregate;
mod filter;
mod model;

pub use aggregate::aggregate;
pub use filter::{AssetFilter, CHECKSUM_SUFFIX, ReleaseFilter};
pub use model::{Release, ReleaseAsset, ReleaseHistory};
