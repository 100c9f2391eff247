use crate::domain::{PreReleaseMarker, TagPattern, Version};
use crate::encoding::BuildCodeEncoding;
use crate::error::{ReleaseError, Result};
use crate::format::AndroidCodeLayout;
use crate::scheme::VersioningScheme;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

/// File name looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "release-toolkit.toml";

/// Represents the complete configuration for release-toolkit.
///
/// Selects the versioning scheme, build code encoding, platform layouts and
/// ref naming used by the command line front end.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub versioning: VersioningConfig,

    #[serde(default)]
    pub build_code: BuildCodeConfig,

    #[serde(default)]
    pub android: AndroidCodeLayout,

    #[serde(default)]
    pub tags: TagsConfig,
}

/// Returns the version assumed when no ref carries one.
fn default_initial_version() -> Version {
    Version::short(1, 0)
}

/// Configuration for version parsing and bumping.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct VersioningConfig {
    #[serde(default)]
    pub scheme: VersioningScheme,

    #[serde(default)]
    pub prerelease_marker: PreReleaseMarker,

    #[serde(default = "default_initial_version")]
    pub initial_version: Version,
}

impl Default for VersioningConfig {
    fn default() -> Self {
        VersioningConfig {
            scheme: VersioningScheme::default(),
            prerelease_marker: PreReleaseMarker::default(),
            initial_version: default_initial_version(),
        }
    }
}

/// Configuration for build code derivation.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct BuildCodeConfig {
    #[serde(default)]
    pub encoding: BuildCodeEncoding,
}

/// Returns the default ref naming pattern.
fn default_tag_pattern() -> String {
    "{version}".to_string()
}

/// Configuration for tag and release branch names.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct TagsConfig {
    #[serde(default = "default_tag_pattern")]
    pub pattern: String,
}

impl Default for TagsConfig {
    fn default() -> Self {
        TagsConfig {
            pattern: default_tag_pattern(),
        }
    }
}

impl TagsConfig {
    pub fn tag_pattern(&self) -> Result<TagPattern> {
        TagPattern::new(&self.pattern)
    }
}

/// Parses configuration from TOML text.
pub fn parse_config(text: &str) -> Result<Config> {
    let config: Config = toml::from_str(text).map_err(|e| ReleaseError::config(e.to_string()))?;
    config.tags.tag_pattern()?;
    config.android.validate()?;
    Ok(config)
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `release-toolkit.toml` in current directory
/// 3. `.release-toolkit.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If a file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let local = Path::new(".").join(CONFIG_FILE_NAME);
    let config_str = if let Some(path) = config_path {
        debug!(path, "loading configuration");
        fs::read_to_string(path)?
    } else if local.exists() {
        debug!(path = %local.display(), "loading configuration");
        fs::read_to_string(local)?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(format!(".{}", CONFIG_FILE_NAME));
        if config_path.exists() {
            debug!(path = %config_path.display(), "loading configuration");
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    parse_config(&config_str)
}
