use crate::error::{ReleaseError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Machine-readable build identifier (Android `versionCode`, iOS build number)
///
/// Stored as a string: numeric encodings hold digits only, the four-part and
/// date-stamped encodings hold dotted strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BuildCode(String);

impl BuildCode {
    pub fn new(code: impl Into<String>) -> Self {
        BuildCode(code.into())
    }

    pub fn from_int(code: u64) -> Self {
        BuildCode(code.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric value of this build code
    pub fn as_integer(&self) -> Result<u64> {
        self.0
            .trim()
            .parse::<u64>()
            .map_err(|_| ReleaseError::build_code(format!("'{}' is not an integer", self.0)))
    }

    pub fn is_numeric(&self) -> bool {
        !self.0.is_empty() && self.0.chars().all(|c| c.is_ascii_digit())
    }

    /// Render an optional build code; absence is the empty string
    pub fn render(code: Option<&BuildCode>) -> String {
        code.map(|c| c.0.clone()).unwrap_or_default()
    }
}

impl fmt::Display for BuildCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<u64> for BuildCode {
    fn from(code: u64) -> Self {
        BuildCode::from_int(code)
    }
}
