//! Domain logic - version and build code values, independent of where strings come from

pub mod build_code;
pub mod marker;
pub mod parser;
pub mod tag;
pub mod version;

pub use build_code::BuildCode;
pub use marker::PreReleaseMarker;
pub use tag::{latest_version, scan_refs, sorted_versions, RefScan, TagPattern};
pub use version::Version;
