pub mod boundary;
pub mod capability;
pub mod config;
pub mod domain;
pub mod encoding;
pub mod error;
pub mod format;
pub mod scheme;
pub mod ui;

pub use capability::{Clock, Confirm, Interaction, Prompt};
pub use domain::{BuildCode, PreReleaseMarker, TagPattern, Version};
pub use encoding::BuildCodeEncoding;
pub use error::{ReleaseError, Result};
pub use scheme::{VersionBump, VersioningScheme};
