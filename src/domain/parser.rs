//! Free-form version parsing
//!
//! Accepts the shapes found in tags, release branch names and config values:
//!
//! - `1.2`, `1.2.3`, `1.2.3.4` (the fourth number is the pre-release build)
//! - an optional leading `v`/`V`
//! - a pre-release marker (`rc`, `beta` or `b`, any case) followed by its build
//!   number, with `.`, `-` or nothing on either side: `1.2rc1`, `1.2-rc-1`,
//!   `1.2.3.rc.4`, `1.2.3b4`
//!
//! With a marker, the release components and the numbers after the marker must
//! add up to three or four slots; three slots get `patch = 0` inserted. Without a
//! marker, two to four components are accepted and missing slots stay absent.

use super::marker::PreReleaseMarker;
use super::version::Version;
use crate::error::{ReleaseError, Result};
use regex::Regex;
use tracing::debug;

const VERSION_PATTERN: &str = r"(?i)^(?P<release>\d+(?:[.\-]\d+)*)(?:[.\-]?(?P<marker>rc|beta|b)[.\-]?(?P<build>\d+(?:[.\-]\d+)*))?$";

/// Parse a version, failing with [`ReleaseError::InvalidVersion`] on any other shape
pub fn parse(raw: &str) -> Result<Version> {
    parse_marked(raw).map(|(version, _)| version)
}

/// Parse a version, returning `None` for strings that are not versions
///
/// Intended for scanning arbitrary refs (`trunk`, `feature/login`, commit SHAs).
pub fn try_parse(raw: &str) -> Option<Version> {
    match parse(raw) {
        Ok(version) => Some(version),
        Err(e) => {
            debug!(input = raw, error = %e, "not a version");
            None
        }
    }
}

/// Parse a version and report which pre-release marker it used, if any
pub fn parse_marked(raw: &str) -> Result<(Version, Option<PreReleaseMarker>)> {
    let trimmed = raw.trim();
    let clean = trimmed
        .strip_prefix('v')
        .or_else(|| trimmed.strip_prefix('V'))
        .unwrap_or(trimmed);

    let re = Regex::new(VERSION_PATTERN)
        .map_err(|e| ReleaseError::invalid_state(format!("version pattern: {}", e)))?;
    let captures = re
        .captures(clean)
        .ok_or_else(|| ReleaseError::invalid_version(raw, "not a dotted numeric version"))?;

    let components = digit_runs(raw, captures.name("release").map(|m| m.as_str()))?;
    let marker = match captures.name("marker") {
        Some(m) => Some(PreReleaseMarker::parse(m.as_str())?),
        None => None,
    };
    let build_segments = digit_runs(raw, captures.name("build").map(|m| m.as_str()))?;

    let version = match marker {
        Some(_) => combine_with_build(raw, components, build_segments)?,
        None => combine_release(raw, &components)?,
    };
    Ok((version, marker))
}

fn digit_runs(raw: &str, segment: Option<&str>) -> Result<Vec<u32>> {
    let Some(segment) = segment else {
        return Ok(Vec::new());
    };
    segment
        .split(['.', '-'])
        .map(|run| {
            run.parse::<u32>().map_err(|_| {
                ReleaseError::invalid_version(raw, format!("component '{}' is out of range", run))
            })
        })
        .collect()
}

fn combine_release(raw: &str, components: &[u32]) -> Result<Version> {
    match *components {
        [major, minor] => Ok(Version::from_parts(major, minor, None, None)),
        [major, minor, patch] => Ok(Version::from_parts(major, minor, Some(patch), None)),
        [major, minor, patch, build] => {
            Ok(Version::from_parts(major, minor, Some(patch), Some(build)))
        }
        _ => Err(ReleaseError::invalid_version(
            raw,
            format!("expected 2 to 4 components, found {}", components.len()),
        )),
    }
}

fn combine_with_build(raw: &str, components: Vec<u32>, build: Vec<u32>) -> Result<Version> {
    if components.len() < 2 {
        return Err(ReleaseError::invalid_version(
            raw,
            "major and minor are required before the pre-release marker",
        ));
    }

    let mut slots = components;
    slots.extend(build);
    if slots.len() == 3 {
        slots.insert(2, 0);
    }

    match slots[..] {
        [major, minor, patch, build] => {
            Ok(Version::from_parts(major, minor, Some(patch), Some(build)))
        }
        _ => Err(ReleaseError::invalid_version(
            raw,
            format!("expected 3 or 4 slots, found {}", slots.len()),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_two_components() {
        let v = parse("1.2").unwrap();
        assert_eq!((v.major, v.minor, v.patch, v.pre_release), (1, 2, None, None));
    }

    #[test]
    fn test_parse_three_components() {
        let v = parse("v1.2.3").unwrap();
        assert_eq!((v.major, v.minor, v.patch, v.pre_release), (1, 2, Some(3), None));
    }

    #[test]
    fn test_parse_four_components() {
        let v = parse("1.2.3.4").unwrap();
        assert_eq!(
            (v.major, v.minor, v.patch, v.pre_release),
            (1, 2, Some(3), Some(4))
        );
    }

    #[test]
    fn test_parse_uppercase_v() {
        assert_eq!(parse("V1.2.3").unwrap(), Version::new(1, 2, 3));
    }

    #[test]
    fn test_parse_marker_inserts_patch() {
        let v = parse("1.2-rc-1").unwrap();
        assert_eq!(
            (v.major, v.minor, v.patch, v.pre_release),
            (1, 2, Some(0), Some(1))
        );
    }

    #[test]
    fn test_parse_marker_separators() {
        let expected = Version::new(1, 2, 0).with_pre_release(1);
        for raw in ["1.2rc1", "1.2-rc-1", "1.2.rc.1", "1.2-rc1", "1.2rc.1", "1.2.RC.1"] {
            assert_eq!(parse(raw).unwrap(), expected, "input {}", raw);
        }
    }

    #[test]
    fn test_parse_beta_markers() {
        let (v, marker) = parse_marked("1.2.3b4").unwrap();
        assert_eq!(v, Version::new(1, 2, 3).with_pre_release(4));
        assert_eq!(marker, Some(PreReleaseMarker::Beta));

        let (v, marker) = parse_marked("1.2.3-beta-4").unwrap();
        assert_eq!(v, Version::new(1, 2, 3).with_pre_release(4));
        assert_eq!(marker, Some(PreReleaseMarker::Beta));
    }

    #[test]
    fn test_parse_marked_reports_none_without_marker() {
        let (_, marker) = parse_marked("1.2.3.4").unwrap();
        assert_eq!(marker, None);
    }

    #[test]
    fn test_parse_leading_zeros() {
        let v = parse("01.2").unwrap();
        assert_eq!(v.major, 1);
        assert_eq!(parse("1.02.003").unwrap(), Version::new(1, 2, 3));
    }

    #[test]
    fn test_parse_too_many_slots() {
        assert!(parse("1.2.3.4.5").is_err());
        assert!(parse("1.2.3.4-rc-5").is_err());
    }

    #[test]
    fn test_parse_too_few_components() {
        assert!(parse("1").is_err());
        assert!(parse("1rc2").is_err());
    }

    #[test]
    fn test_parse_marker_without_number() {
        assert!(parse("1.2.3-rc").is_err());
    }

    #[test]
    fn test_parse_rejects_non_versions() {
        for raw in ["", "trunk", "release/1.2", "feature/login", "abc1234", "1.x", "v"] {
            assert!(parse(raw).is_err(), "input {} should be rejected", raw);
        }
    }

    #[test]
    fn test_parse_error_names_input() {
        let err = parse("release/1.2").unwrap_err();
        assert_eq!(err.offending_input(), Some("release/1.2"));
    }

    #[test]
    fn test_parse_component_overflow() {
        assert!(parse("1.99999999999").is_err());
    }

    #[test]
    fn test_try_parse() {
        assert_eq!(try_parse("10.1"), Some(Version::short(10, 1)));
        assert_eq!(try_parse("develop"), None);
    }
}
