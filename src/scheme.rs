//! Bump engine
//!
//! A [`VersioningScheme`] selects the carry rules used when moving a [`Version`]
//! forward or backward:
//!
//! - **Semantic**: the generic rules on [`Version`]; the minor carries into the
//!   major once the incremented minor reaches 10.
//! - **Marketing**: carries only when the current minor is exactly 9. For minors
//!   0–9 this matches Semantic; they diverge on out-of-range minors (`1.10`
//!   becomes `1.11` here and `2.0` under Semantic). Both behaviors are kept as
//!   separate schemes.
//! - **CalendarDate**: the major is a year and minors count releases within it,
//!   starting at 1. Releases in December ask whether the next release opens a
//!   new year.
//! - **FourPart**: a plain 4-tuple with no carry; results always have all four
//!   slots populated.
//!
//! Every bump except the pre-release ones drops the pre-release build (for
//! FourPart, resets the fourth slot to 0).

use crate::capability::Interaction;
use crate::domain::Version;
use crate::error::{ReleaseError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, info};

/// Minor value from which the Marketing scheme carries into the major.
pub const MARKETING_ROLLOVER_MINOR: u32 = 9;

/// Release-versioning scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VersioningScheme {
    #[default]
    Semantic,
    Marketing,
    CalendarDate,
    FourPart,
}

/// Which part of a version to move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VersionBump {
    Major,
    Minor,
    Patch,
    PreRelease,
    /// The scheme's notion of "the next release" (may ask questions)
    Release,
    /// Patch release off an existing final release
    Hotfix,
}

fn four_part(major: u32, minor: u32, patch: u32, build: u32) -> Version {
    Version::from_parts(major, minor, Some(patch), Some(build))
}

fn underflow(version: &Version, what: &str) -> ReleaseError {
    ReleaseError::invalid_state(format!("{} has no previous {}", version, what))
}

impl VersioningScheme {
    pub fn next_major(&self, v: &Version) -> Version {
        match self {
            VersioningScheme::Semantic | VersioningScheme::Marketing => v.next_major(),
            VersioningScheme::CalendarDate => Version::new(v.major.saturating_add(1), 1, 0),
            VersioningScheme::FourPart => four_part(v.major.saturating_add(1), 0, 0, 0),
        }
    }

    pub fn next_minor(&self, v: &Version) -> Version {
        match self {
            VersioningScheme::Semantic => v.next_minor(),
            VersioningScheme::Marketing => {
                if v.minor == MARKETING_ROLLOVER_MINOR {
                    v.next_major()
                } else {
                    Version::new(v.major, v.minor.saturating_add(1), 0)
                }
            }
            VersioningScheme::CalendarDate => Version::new(v.major, v.minor.saturating_add(1), 0),
            VersioningScheme::FourPart => four_part(v.major, v.minor.saturating_add(1), 0, 0),
        }
    }

    pub fn next_patch(&self, v: &Version) -> Version {
        match self {
            VersioningScheme::FourPart => {
                four_part(v.major, v.minor, v.patch_or_zero().saturating_add(1), 0)
            }
            _ => v.next_patch(),
        }
    }

    pub fn next_pre_release(&self, v: &Version) -> Version {
        match self {
            VersioningScheme::FourPart => four_part(
                v.major,
                v.minor,
                v.patch_or_zero(),
                v.pre_release_or_zero().saturating_add(1),
            ),
            _ => v.next_pre_release(),
        }
    }

    pub fn previous_major(&self, v: &Version) -> Result<Version> {
        match self {
            VersioningScheme::Semantic | VersioningScheme::Marketing => v.previous_major(),
            VersioningScheme::CalendarDate => v
                .major
                .checked_sub(1)
                .map(|year| Version::new(year, 1, 0))
                .ok_or_else(|| underflow(v, "year")),
            VersioningScheme::FourPart => v
                .major
                .checked_sub(1)
                .map(|major| four_part(major, 0, 0, 0))
                .ok_or_else(|| underflow(v, "major version")),
        }
    }

    pub fn previous_minor(&self, v: &Version) -> Result<Version> {
        match self {
            VersioningScheme::Semantic | VersioningScheme::Marketing => v.previous_minor(),
            VersioningScheme::CalendarDate => {
                if v.minor > 1 {
                    Ok(Version::new(v.major, v.minor - 1, 0))
                } else {
                    Err(ReleaseError::invalid_state(format!(
                        "{} is the first release of its year; use the previous release instead",
                        v
                    )))
                }
            }
            VersioningScheme::FourPart => v
                .minor
                .checked_sub(1)
                .map(|minor| four_part(v.major, minor, 0, 0))
                .ok_or_else(|| underflow(v, "minor version")),
        }
    }

    pub fn previous_patch(&self, v: &Version) -> Result<Version> {
        match self {
            VersioningScheme::FourPart => v
                .patch_or_zero()
                .checked_sub(1)
                .map(|patch| four_part(v.major, v.minor, patch, 0))
                .ok_or_else(|| underflow(v, "patch version")),
            _ => v.previous_patch(),
        }
    }

    pub fn previous_pre_release(&self, v: &Version) -> Result<Version> {
        match self {
            VersioningScheme::FourPart => v
                .pre_release_or_zero()
                .checked_sub(1)
                .map(|build| four_part(v.major, v.minor, v.patch_or_zero(), build))
                .ok_or_else(|| underflow(v, "build")),
            _ => v.previous_pre_release(),
        }
    }

    /// Next release under this scheme
    ///
    /// CalendarDate bumps the release counter, except in December, where the
    /// caller is asked whether the release is the first of the next year.
    /// Every other scheme moves to the next minor.
    pub fn next_release(&self, v: &Version, interaction: &Interaction<'_>) -> Result<Version> {
        match self {
            VersioningScheme::CalendarDate => next_calendar_release(v, interaction),
            _ => Ok(self.next_minor(v)),
        }
    }

    /// Previous release under this scheme
    ///
    /// CalendarDate steps the release counter back; stepping back from the
    /// first release of a year asks for the last release number of the
    /// previous year. Every other scheme moves to the previous minor.
    pub fn previous_release(&self, v: &Version, interaction: &Interaction<'_>) -> Result<Version> {
        match self {
            VersioningScheme::CalendarDate => previous_calendar_release(v, interaction),
            _ => self.previous_minor(v),
        }
    }

    /// Move `v` forward by `bump`
    pub fn bump(&self, v: &Version, bump: VersionBump, interaction: &Interaction<'_>) -> Result<Version> {
        debug!(scheme = %self, ?bump, version = %v, "bumping");
        match bump {
            VersionBump::Major => Ok(self.next_major(v)),
            VersionBump::Minor => Ok(self.next_minor(v)),
            VersionBump::Patch => Ok(self.next_patch(v)),
            VersionBump::PreRelease => Ok(self.next_pre_release(v)),
            VersionBump::Release => self.next_release(v, interaction),
            VersionBump::Hotfix => {
                // four-part versions always carry a build; build 0 is a final release
                let base = match self {
                    VersioningScheme::FourPart if v.pre_release_or_zero() == 0 => v.release(),
                    _ => *v,
                };
                base.hotfix()?;
                Ok(self.next_patch(v))
            }
        }
    }

    /// Move `v` backward by `bump`
    pub fn revert(&self, v: &Version, bump: VersionBump, interaction: &Interaction<'_>) -> Result<Version> {
        debug!(scheme = %self, ?bump, version = %v, "reverting");
        match bump {
            VersionBump::Major => self.previous_major(v),
            VersionBump::Minor => self.previous_minor(v),
            VersionBump::Patch | VersionBump::Hotfix => self.previous_patch(v),
            VersionBump::PreRelease => self.previous_pre_release(v),
            VersionBump::Release => self.previous_release(v, interaction),
        }
    }
}

fn next_calendar_release(v: &Version, interaction: &Interaction<'_>) -> Result<Version> {
    let next_in_year = Version::new(v.major, v.minor.saturating_add(1), 0);
    if !interaction.is_december() {
        return Ok(next_in_year);
    }

    let next_year = v.major.saturating_add(1);
    let question = format!("Is this the first release of {}?", next_year);
    if interaction.confirm.ask(&question)? {
        info!(year = next_year, "starting a new release year");
        Ok(Version::new(next_year, 1, 0))
    } else {
        Ok(next_in_year)
    }
}

fn previous_calendar_release(v: &Version, interaction: &Interaction<'_>) -> Result<Version> {
    if v.minor > 1 {
        return Ok(Version::new(v.major, v.minor - 1, 0));
    }

    let previous_year = v.major.checked_sub(1).ok_or_else(|| underflow(v, "year"))?;
    let question = format!("What was the last release number of {}?", previous_year);
    let minor = interaction.prompt.ask_int(&question)?;
    info!(year = previous_year, minor, "using prompted release number");
    Ok(Version::new(previous_year, minor, 0))
}

impl fmt::Display for VersioningScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            VersioningScheme::Semantic => "semantic",
            VersioningScheme::Marketing => "marketing",
            VersioningScheme::CalendarDate => "calendar-date",
            VersioningScheme::FourPart => "four-part",
        };
        f.write_str(name)
    }
}

impl FromStr for VersioningScheme {
    type Err = ReleaseError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "semantic" | "semver" => Ok(VersioningScheme::Semantic),
            "marketing" => Ok(VersioningScheme::Marketing),
            "calendar-date" | "calendar" | "date" => Ok(VersioningScheme::CalendarDate),
            "four-part" | "fourpart" => Ok(VersioningScheme::FourPart),
            other => Err(ReleaseError::config(format!(
                "Unknown versioning scheme: '{}'",
                other
            ))),
        }
    }
}

impl FromStr for VersionBump {
    type Err = ReleaseError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "major" => Ok(VersionBump::Major),
            "minor" => Ok(VersionBump::Minor),
            "patch" => Ok(VersionBump::Patch),
            "pre-release" | "prerelease" | "rc" => Ok(VersionBump::PreRelease),
            "release" => Ok(VersionBump::Release),
            "hotfix" => Ok(VersionBump::Hotfix),
            other => Err(ReleaseError::config(format!("Unknown bump: '{}'", other))),
        }
    }
}
