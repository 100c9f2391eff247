//! Pre-release marker tokens
//!
//! The marker is the word that separates a release triple from its pre-release
//! number in loosely formatted versions (`1.2-rc-3`, `1.2.3beta4`, `1.2b1`).
//! When rendering, it is a configured token rather than something derived from
//! the version itself.

use crate::error::{ReleaseError, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Pre-release marker (rc, beta, or a custom token)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum PreReleaseMarker {
    /// Release candidate (`rc`)
    #[default]
    ReleaseCandidate,
    /// Beta build (`beta`, or the short form `b`)
    Beta,
    /// Custom token used only for rendering, e.g. `alpha` or `internal`
    Custom(String),
}

impl PreReleaseMarker {
    /// Parse a marker from a string
    ///
    /// Accepts "rc", "beta" and "b" case-insensitively; any other
    /// alphanumeric token becomes [`PreReleaseMarker::Custom`].
    pub fn parse(s: &str) -> Result<Self> {
        s.parse()
    }

    /// Whether the version parser recognizes this marker inside a version string
    pub fn is_recognized(&self) -> bool {
        !matches!(self, PreReleaseMarker::Custom(_))
    }

    /// The token written when rendering a pre-release string
    pub fn token(&self) -> &str {
        match self {
            PreReleaseMarker::ReleaseCandidate => "rc",
            PreReleaseMarker::Beta => "beta",
            PreReleaseMarker::Custom(s) => s,
        }
    }
}

impl FromStr for PreReleaseMarker {
    type Err = ReleaseError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "rc" => Ok(PreReleaseMarker::ReleaseCandidate),
            "beta" | "b" => Ok(PreReleaseMarker::Beta),
            "" => Err(ReleaseError::config("Empty pre-release marker")),
            other => {
                if other.chars().all(|c| c.is_ascii_alphanumeric()) {
                    Ok(PreReleaseMarker::Custom(other.to_string()))
                } else {
                    Err(ReleaseError::config(format!(
                        "Invalid pre-release marker: '{}'",
                        s
                    )))
                }
            }
        }
    }
}

impl fmt::Display for PreReleaseMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl Serialize for PreReleaseMarker {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.token())
    }
}

impl<'de> Deserialize<'de> for PreReleaseMarker {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
