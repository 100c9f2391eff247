use crate::error::{ReleaseError, Result};
use crate::format;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// Minor value at which the generic engine carries into the major component.
pub const MINOR_ROLLOVER: u32 = 10;

/// Release version with an optional patch and pre-release build number
///
/// `patch` may be absent in source notation (`"1.2"`); it then behaves as 0 for
/// ordering, equality and formatting, but [`Version::has_patch`] still reports
/// that it was missing. `pre_release` absent means a final release; present
/// (including `Some(0)`) means pre-release build N.
#[derive(Debug, Clone, Copy)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: Option<u32>,
    pub pre_release: Option<u32>,
}

impl Version {
    /// Create a final release version `major.minor.patch`
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        Version {
            major,
            minor,
            patch: Some(patch),
            pre_release: None,
        }
    }

    /// Create a two-component version with no patch slot (e.g. `10.1`)
    pub fn short(major: u32, minor: u32) -> Self {
        Version {
            major,
            minor,
            patch: None,
            pre_release: None,
        }
    }

    /// Create a version from all four slots
    pub fn from_parts(major: u32, minor: u32, patch: Option<u32>, pre_release: Option<u32>) -> Self {
        Version {
            major,
            minor,
            patch,
            pre_release,
        }
    }

    /// Copy of this version carrying pre-release build `number`
    pub fn with_pre_release(self, number: u32) -> Self {
        Version {
            pre_release: Some(number),
            ..self
        }
    }

    /// Copy of this version as a final release (pre-release dropped)
    pub fn release(self) -> Self {
        Version {
            pre_release: None,
            ..self
        }
    }

    /// Parse a loosely formatted version string
    ///
    /// See [`crate::domain::parser`] for the accepted shapes.
    pub fn parse(raw: &str) -> Result<Self> {
        super::parser::parse(raw)
    }

    /// Parse a string, returning `None` when it is not a version at all
    pub fn try_parse(raw: &str) -> Option<Self> {
        super::parser::try_parse(raw)
    }

    pub fn has_patch(&self) -> bool {
        self.patch.is_some()
    }

    pub fn is_pre_release(&self) -> bool {
        self.pre_release.is_some()
    }

    pub fn patch_or_zero(&self) -> u32 {
        self.patch.unwrap_or(0)
    }

    pub fn pre_release_or_zero(&self) -> u32 {
        self.pre_release.unwrap_or(0)
    }

    /// Release triple with a missing patch normalized to 0
    pub fn triple(&self) -> (u32, u32, u32) {
        (self.major, self.minor, self.patch_or_zero())
    }

    /// True if `self` is a pre-release of the final release `other`
    pub fn is_rc_of(&self, other: &Version) -> bool {
        self.is_pre_release() && !other.is_pre_release() && self.triple() == other.triple()
    }

    /// True if both are pre-releases of the same triple with different build numbers
    pub fn is_different_rc_of(&self, other: &Version) -> bool {
        match (self.pre_release, other.pre_release) {
            (Some(a), Some(b)) => self.triple() == other.triple() && a != b,
            _ => false,
        }
    }

    /// True if major and minor match but the patch differs
    pub fn is_different_patch_of(&self, other: &Version) -> bool {
        self.major == other.major
            && self.minor == other.minor
            && self.patch_or_zero() != other.patch_or_zero()
    }

    /// `major+1.0.0`, pre-release dropped
    ///
    /// Forward bumps saturate: a component already at `u32::MAX` stays there,
    /// so bumping the largest representable version does not move it forward.
    pub fn next_major(&self) -> Self {
        Version::new(self.major.saturating_add(1), 0, 0)
    }

    /// `minor+1`, carrying into the major once the new minor reaches [`MINOR_ROLLOVER`]
    pub fn next_minor(&self) -> Self {
        let minor = self.minor.saturating_add(1);
        if minor >= MINOR_ROLLOVER {
            self.next_major()
        } else {
            Version::new(self.major, minor, 0)
        }
    }

    /// `patch+1`, pre-release dropped
    pub fn next_patch(&self) -> Self {
        Version::new(self.major, self.minor, self.patch_or_zero().saturating_add(1))
    }

    /// Start pre-release build 1, or increment the current build number
    pub fn next_pre_release(&self) -> Self {
        let number = match self.pre_release {
            Some(n) => n.saturating_add(1),
            None => 1,
        };
        self.with_pre_release(number)
    }

    /// `major-1.0.0`
    pub fn previous_major(&self) -> Result<Self> {
        match self.major.checked_sub(1) {
            Some(major) => Ok(Version::new(major, 0, 0)),
            None => Err(ReleaseError::invalid_state(format!(
                "{} has no previous major version",
                self
            ))),
        }
    }

    /// `minor-1`, borrowing from the major (`x.0` becomes `(x-1).9`)
    pub fn previous_minor(&self) -> Result<Self> {
        if let Some(minor) = self.minor.checked_sub(1) {
            return Ok(Version::new(self.major, minor, 0));
        }
        match self.major.checked_sub(1) {
            Some(major) => Ok(Version::new(major, MINOR_ROLLOVER - 1, 0)),
            None => Err(ReleaseError::invalid_state(format!(
                "{} has no previous minor version",
                self
            ))),
        }
    }

    /// `patch-1`, pre-release dropped
    pub fn previous_patch(&self) -> Result<Self> {
        match self.patch_or_zero().checked_sub(1) {
            Some(patch) => Ok(Version::new(self.major, self.minor, patch)),
            None => Err(ReleaseError::invalid_state(format!(
                "{} has no previous patch version",
                self
            ))),
        }
    }

    /// Previous pre-release build; build 1 has no predecessor
    pub fn previous_pre_release(&self) -> Result<Self> {
        match self.pre_release {
            Some(n) if n > 1 => Ok(self.with_pre_release(n - 1)),
            _ => Err(ReleaseError::invalid_state(format!(
                "{} has no previous pre-release",
                self
            ))),
        }
    }

    /// Hotfix release on top of the final release `self`
    pub fn hotfix(&self) -> Result<Self> {
        if self.is_pre_release() {
            return Err(ReleaseError::invalid_state(format!(
                "cannot create a hotfix from pre-release {}",
                self
            )));
        }
        Ok(self.next_patch())
    }

    fn order_key(&self) -> (u32, u32, u32, u8, u32) {
        match self.pre_release {
            Some(n) => (self.major, self.minor, self.patch_or_zero(), 0, n),
            None => (self.major, self.minor, self.patch_or_zero(), 1, 0),
        }
    }
}

/// Equality is not field-wise: an absent patch equals a patch of 0, so
/// `1.2 == 1.2.0`. It agrees with `Ord` and `Hash`. An absent pre-release
/// never equals `Some(0)`.
impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.order_key() == other.order_key()
    }
}

impl Eq for Version {}

impl Hash for Version {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.order_key().hash(state);
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    /// Release triple first; a final release outranks its pre-releases
    fn cmp(&self, other: &Self) -> Ordering {
        self.order_key().cmp(&other.order_key())
    }
}

impl fmt::Display for Version {
    /// Android version name notation (`1.2`, `1.2.3`, `1.2-rc-4`), which parses back
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format::android_version_name(self))
    }
}

impl FromStr for Version {
    type Err = ReleaseError;

    fn from_str(s: &str) -> Result<Self> {
        Version::parse(s)
    }
}

impl Serialize for Version {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Version {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Version::parse(&raw).map_err(serde::de::Error::custom)
    }
}
