//! Build code derivation strategies
//!
//! Each encoding maps `(Version, current BuildCode)` to a new [`BuildCode`].
//! Every encoding receives both operands; the one it has no use for is simply
//! not read. Digit-width violations are rejected with
//! [`ReleaseError::EncodingOverflow`] rather than truncated.

use crate::capability::Clock;
use crate::domain::{BuildCode, Version};
use crate::error::{ReleaseError, Result};
use crate::format::{four_part_string, pad};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// How a build code is derived
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BuildCodeEncoding {
    /// Current code plus one
    SimpleIncrement,
    /// `1` followed by major, minor, patch and build, each padded to two digits
    #[default]
    DerivedConcatV1,
    /// Unpadded major, one-digit minor and patch, two-digit build
    DerivedConcatV2,
    /// `major.minor.patch.build`
    FourPartPassthrough,
    /// `major.minor.patch.YYYYMMDD` for today's date
    DateStamped,
    /// Current code unchanged
    IntegerPassthrough,
}

impl BuildCodeEncoding {
    /// Derive a build code from `version` and/or the `current` code
    pub fn derive(&self, version: &Version, current: Option<&BuildCode>, clock: &dyn Clock) -> Result<BuildCode> {
        debug!(encoding = %self, version = %version, current = %BuildCode::render(current), "deriving build code");
        match self {
            BuildCodeEncoding::SimpleIncrement => {
                let current = current.ok_or_else(|| {
                    ReleaseError::build_code("no current build code to increment")
                })?;
                let next = current.as_integer()?.checked_add(1).ok_or_else(|| {
                    ReleaseError::build_code(format!("'{}' cannot be incremented", current))
                })?;
                Ok(BuildCode::from_int(next))
            }
            BuildCodeEncoding::DerivedConcatV1 => {
                let code = format!(
                    "1{}{}{}{}",
                    pad("major", version.major, 2)?,
                    pad("minor", version.minor, 2)?,
                    pad("patch", version.patch_or_zero(), 2)?,
                    pad("build", version.pre_release_or_zero(), 2)?
                );
                Ok(BuildCode::new(code))
            }
            BuildCodeEncoding::DerivedConcatV2 => {
                let code = format!(
                    "{}{}{}{}",
                    version.major,
                    pad("minor", version.minor, 1)?,
                    pad("patch", version.patch_or_zero(), 1)?,
                    pad("build", version.pre_release_or_zero(), 2)?
                );
                Ok(BuildCode::new(code))
            }
            BuildCodeEncoding::FourPartPassthrough => Ok(BuildCode::new(four_part_string(version))),
            BuildCodeEncoding::DateStamped => {
                let stamp = clock.today().format("%Y%m%d");
                Ok(BuildCode::new(format!(
                    "{}.{}.{}.{}",
                    version.major,
                    version.minor,
                    version.patch_or_zero(),
                    stamp
                )))
            }
            BuildCodeEncoding::IntegerPassthrough => {
                Ok(BuildCode::new(BuildCode::render(current)))
            }
        }
    }
}

impl fmt::Display for BuildCodeEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BuildCodeEncoding::SimpleIncrement => "simple-increment",
            BuildCodeEncoding::DerivedConcatV1 => "derived-concat-v1",
            BuildCodeEncoding::DerivedConcatV2 => "derived-concat-v2",
            BuildCodeEncoding::FourPartPassthrough => "four-part-passthrough",
            BuildCodeEncoding::DateStamped => "date-stamped",
            BuildCodeEncoding::IntegerPassthrough => "integer-passthrough",
        };
        f.write_str(name)
    }
}

impl FromStr for BuildCodeEncoding {
    type Err = ReleaseError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "simple-increment" => Ok(BuildCodeEncoding::SimpleIncrement),
            "derived-concat-v1" => Ok(BuildCodeEncoding::DerivedConcatV1),
            "derived-concat-v2" => Ok(BuildCodeEncoding::DerivedConcatV2),
            "four-part-passthrough" => Ok(BuildCodeEncoding::FourPartPassthrough),
            "date-stamped" => Ok(BuildCodeEncoding::DateStamped),
            "integer-passthrough" => Ok(BuildCodeEncoding::IntegerPassthrough),
            other => Err(ReleaseError::config(format!(
                "Unknown build code encoding: '{}'",
                other
            ))),
        }
    }
}
