//! Rendering versions back to strings
//!
//! Release strings omit a zero patch (`10.1`, not `10.1.0`), which is the form
//! used for release branches and milestone titles. Platform identifiers have
//! fixed shapes.

use crate::domain::{PreReleaseMarker, Version};
use crate::error::{ReleaseError, Result};
use serde::{Deserialize, Serialize};

/// `major.minor`, plus `.patch` when the patch is non-zero
pub fn release_string(v: &Version) -> String {
    match v.patch_or_zero() {
        0 => format!("{}.{}", v.major, v.minor),
        patch => format!("{}.{}.{}", v.major, v.minor, patch),
    }
}

/// `{release}-{marker}-{n}`; requires a pre-release build of at least 1
pub fn pre_release_string(v: &Version, marker: &PreReleaseMarker) -> Result<String> {
    match v.pre_release {
        Some(n) if n >= 1 => Ok(format!("{}-{}-{}", release_string(v), marker, n)),
        Some(_) => Err(ReleaseError::invalid_state(format!(
            "pre-release build of {} must be at least 1",
            release_string(v)
        ))),
        None => Err(ReleaseError::invalid_state(format!(
            "{} is not a pre-release",
            release_string(v)
        ))),
    }
}

/// `major.minor.patch.build` with absent slots as 0
pub fn four_part_string(v: &Version) -> String {
    format!(
        "{}.{}.{}.{}",
        v.major,
        v.minor,
        v.patch_or_zero(),
        v.pre_release_or_zero()
    )
}

/// Android `versionName`: the release string, plus `-rc-{n}` for pre-releases
pub fn android_version_name(v: &Version) -> String {
    match v.pre_release {
        Some(n) => format!("{}-rc-{}", release_string(v), n),
        None => release_string(v),
    }
}

/// iOS `CFBundleVersion`: always four parts
pub fn ios_version_number(v: &Version) -> String {
    four_part_string(v)
}

/// Digit layout for Android `versionCode`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AndroidCodeLayout {
    /// Leading digit that keeps the code from starting with zero
    #[serde(default = "default_prefix_digit")]
    pub prefix_digit: u32,
    /// Zero-padded width of each of major, minor, patch and build
    #[serde(default = "default_field_width")]
    pub field_width: usize,
}

fn default_prefix_digit() -> u32 {
    1
}

fn default_field_width() -> usize {
    2
}

impl Default for AndroidCodeLayout {
    fn default() -> Self {
        AndroidCodeLayout {
            prefix_digit: default_prefix_digit(),
            field_width: default_field_width(),
        }
    }
}

impl AndroidCodeLayout {
    pub fn new(prefix_digit: u32, field_width: usize) -> Self {
        AndroidCodeLayout {
            prefix_digit,
            field_width,
        }
    }

    /// Check that the prefix is a single non-zero digit and fields have a width
    pub fn validate(&self) -> Result<()> {
        if !(1..=9).contains(&self.prefix_digit) {
            return Err(ReleaseError::config(format!(
                "Android prefix digit must be between 1 and 9, got {}",
                self.prefix_digit
            )));
        }
        if self.field_width == 0 {
            return Err(ReleaseError::config("Android field width must be at least 1"));
        }
        Ok(())
    }

    /// Android `versionCode` for `v`
    ///
    /// Fields wider than `field_width` are rejected, never truncated.
    pub fn version_code(&self, v: &Version) -> Result<String> {
        self.validate()?;
        let mut code = self.prefix_digit.to_string();
        for (field, value) in [
            ("major", v.major),
            ("minor", v.minor),
            ("patch", v.patch_or_zero()),
            ("build", v.pre_release_or_zero()),
        ] {
            code.push_str(&pad(field, value, self.field_width)?);
        }
        Ok(code)
    }
}

/// Android `versionCode` with the given prefix digit and field width
pub fn android_version_code(v: &Version, prefix_digit: u32, field_width: usize) -> Result<String> {
    AndroidCodeLayout::new(prefix_digit, field_width).version_code(v)
}

/// Zero-pad `value` to `width` digits, rejecting values that need more
pub(crate) fn pad(field: &'static str, value: u32, width: usize) -> Result<String> {
    let digits = value.to_string();
    if digits.len() > width {
        return Err(ReleaseError::overflow(field, value, width));
    }
    Ok(format!("{:0>width$}", digits, width = width))
}
