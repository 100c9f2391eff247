use super::version::Version;
use crate::boundary::BoundaryWarning;
use crate::error::{ReleaseError, Result};
use tracing::{debug, warn};

/// Tag or branch naming pattern (e.g., "v{version}", "release/{version}")
///
/// The default pattern is the bare `{version}`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TagPattern {
    prefix: String,
    suffix: String,
}

impl TagPattern {
    /// Create a pattern; it must contain exactly one `{version}` placeholder
    pub fn new(pattern: &str) -> Result<Self> {
        let parts: Vec<&str> = pattern.split("{version}").collect();
        if parts.len() != 2 {
            return Err(ReleaseError::config(format!(
                "Invalid pattern '{}': should have exactly one {{version}} placeholder",
                pattern
            )));
        }
        Ok(TagPattern {
            prefix: parts[0].to_string(),
            suffix: parts[1].to_string(),
        })
    }

    /// Format a rendered version according to the pattern
    /// Example: pattern="release/{version}", version="10.1" -> "release/10.1"
    pub fn format(&self, version: &str) -> String {
        format!("{}{}{}", self.prefix, version, self.suffix)
    }

    /// Version part of `name`, if it has the pattern's prefix and suffix
    pub fn version_part<'a>(&self, name: &'a str) -> Option<&'a str> {
        name.strip_prefix(self.prefix.as_str())?
            .strip_suffix(self.suffix.as_str())
            .filter(|part| !part.is_empty())
    }

    /// True for the bare `{version}` pattern, which every ref matches
    pub fn is_bare(&self) -> bool {
        self.prefix.is_empty() && self.suffix.is_empty()
    }

    /// Extract the version carried by `name`
    pub fn extract(&self, name: &str) -> Option<Version> {
        self.version_part(name).and_then(Version::try_parse)
    }
}

/// Versions found among a set of refs
#[derive(Debug, Clone, Default)]
pub struct RefScan {
    /// Ref names with their versions, ascending by version
    pub found: Vec<(String, Version)>,
    /// Refs that looked versioned but failed to parse
    pub warnings: Vec<BoundaryWarning>,
}

impl RefScan {
    /// Greatest version found, optionally ignoring pre-releases
    pub fn latest(&self, include_pre_releases: bool) -> Option<&(String, Version)> {
        self.found
            .iter()
            .filter(|(_, v)| include_pre_releases || !v.is_pre_release())
            .max_by(|(_, a), (_, b)| a.cmp(b))
    }

    pub fn versions(&self) -> Vec<Version> {
        self.found.iter().map(|(_, v)| *v).collect()
    }
}

/// Scan arbitrary refs for versions matching `pattern`
///
/// Refs outside the pattern are skipped silently; refs inside it whose version
/// part does not parse are reported as [`BoundaryWarning::UnparsableRef`]. With
/// the bare pattern only refs starting with a digit (after an optional `v`) are
/// reported, so names like `main` stay quiet.
pub fn scan_refs<I, S>(refs: I, pattern: &TagPattern) -> RefScan
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut scan = RefScan::default();
    for name in refs {
        let name = name.as_ref();
        let Some(part) = pattern.version_part(name) else {
            debug!(name, "ref does not match pattern");
            continue;
        };
        match Version::parse(part) {
            Ok(version) => scan.found.push((name.to_string(), version)),
            Err(e) if pattern.is_bare() && !starts_numeric(part) => {
                debug!(name, error = %e, "ref is not a version");
            }
            Err(e) => {
                warn!(name, error = %e, "skipping ref");
                scan.warnings.push(BoundaryWarning::UnparsableRef {
                    name: name.to_string(),
                    reason: e.to_string(),
                });
            }
        }
    }
    scan.found.sort_by(|(_, a), (_, b)| a.cmp(b));
    scan
}

fn starts_numeric(part: &str) -> bool {
    part.trim_start_matches(['v', 'V'])
        .starts_with(|c: char| c.is_ascii_digit())
}

/// Greatest version among `refs`, or `None` if no ref carries one
pub fn latest_version<I, S>(refs: I, pattern: &TagPattern, include_pre_releases: bool) -> Option<Version>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    scan_refs(refs, pattern)
        .latest(include_pre_releases)
        .map(|(_, v)| *v)
}

/// All versions among `refs`, ascending
pub fn sorted_versions<I, S>(refs: I, pattern: &TagPattern) -> Vec<Version>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    scan_refs(refs, pattern).versions()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_format() {
        let pattern = TagPattern::new("v{version}").unwrap();
        assert_eq!(pattern.format("1.2.3"), "v1.2.3");
    }

    #[test]
    fn test_pattern_format_with_prefix_path() {
        let pattern = TagPattern::new("release/{version}").unwrap();
        assert_eq!(pattern.format("10.1"), "release/10.1");
    }

    #[test]
    fn test_pattern_requires_placeholder() {
        assert!(TagPattern::new("release").is_err());
        assert!(TagPattern::new("{version}-{version}").is_err());
    }

    #[test]
    fn test_pattern_extract() {
        let pattern = TagPattern::new("release/{version}").unwrap();
        assert_eq!(pattern.extract("release/10.1"), Some(Version::short(10, 1)));
        assert_eq!(pattern.extract("release/"), None);
        assert_eq!(pattern.extract("feature/10.1"), None);
        assert_eq!(pattern.extract("release/next"), None);
    }

    #[test]
    fn test_default_pattern_accepts_bare_versions() {
        let pattern = TagPattern::default();
        assert_eq!(pattern.extract("1.2.3"), Some(Version::new(1, 2, 3)));
        assert_eq!(pattern.format("1.2.3"), "1.2.3");
    }

    #[test]
    fn test_scan_refs_sorts_and_warns() {
        let pattern = TagPattern::new("release/{version}").unwrap();
        let refs = ["release/10.2", "trunk", "release/9.9", "release/next", "release/10.1"];
        let scan = scan_refs(refs, &pattern);

        assert_eq!(
            scan.versions(),
            vec![Version::short(9, 9), Version::short(10, 1), Version::short(10, 2)]
        );
        assert_eq!(scan.warnings.len(), 1);
        assert!(matches!(
            &scan.warnings[0],
            BoundaryWarning::UnparsableRef { name, .. } if name == "release/next"
        ));
    }

    #[test]
    fn test_latest_version_pre_release_filter() {
        let pattern = TagPattern::default();
        let refs = ["1.2", "1.3-rc-1", "main"];
        assert_eq!(
            latest_version(refs, &pattern, true),
            Some(Version::new(1, 3, 0).with_pre_release(1))
        );
        assert_eq!(latest_version(refs, &pattern, false), Some(Version::short(1, 2)));
    }

    #[test]
    fn test_bare_pattern_only_warns_on_numeric_refs() {
        let scan = scan_refs(["main", "v1.2.x", "2.0"], &TagPattern::default());
        assert_eq!(scan.versions(), vec![Version::short(2, 0)]);
        assert_eq!(scan.warnings.len(), 1);
    }

    #[test]
    fn test_latest_version_none() {
        let pattern = TagPattern::default();
        assert_eq!(latest_version(["main", "develop"], &pattern, true), None);
    }
}
