//! Configuration file parsing.
//!
//! Parses individual `.mdblocks.toml` files into `RawConfig` values whose fields stay
//! optional until merging decides which file supplies each one.

use std::{fs, path::Path};

use serde::Deserialize;
use serde_with::{OneOrMany, serde_as};
#[cfg(test)]
use toml::de::Error as TomlError;

use crate::ConfigError;

/// Raw configuration as parsed directly from a TOML file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// When true, stop discovery here and ignore parent and global configs.
    pub root: Option<bool>,
    /// `[parse]` section.
    pub parse: Option<RawParseSettings>,
    /// `[extract]` section.
    pub extract: Option<RawExtractSettings>,
}

/// Raw `[parse]` settings.
#[serde_as]
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawParseSettings {
    /// Heading exclusions. Accepts a single string or an array; entries may hold
    /// comma-separated lists.
    #[serde_as(as = "Option<OneOrMany<_>>")]
    pub excluded_headings: Option<Vec<String>>,
    /// Maximum block text length.
    pub max_len: Option<usize>,
    /// Minimum body length for listed blocks.
    pub min_len: Option<usize>,
    /// Drop sections that have headings but no body.
    pub skip_blocks_with_headings_only: Option<bool>,
}

/// Raw `[extract]` settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawExtractSettings {
    /// Per-line character limit.
    pub chars_per_line: Option<usize>,
    /// Total character budget.
    pub max_chars: Option<usize>,
}

/// Parses a configuration file from disk.
pub fn parse_config_file(path: &Path) -> Result<RawConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    parse_config_str(&contents, path)
}

/// Parses configuration from a TOML string.
///
/// The `path` parameter is used for error reporting.
pub fn parse_config_str(contents: &str, path: &Path) -> Result<RawConfig, ConfigError> {
    toml::from_str(contents).map_err(|source| ConfigError::ParseToml {
        path: path.to_path_buf(),
        source,
    })
}

/// Parses configuration from a TOML string without path context.
#[cfg(test)]
pub fn parse_config(contents: &str) -> Result<RawConfig, TomlError> {
    toml::from_str(contents)
}

/// Checks if a config file has `root = true` set.
///
/// Returns false if the file cannot be read or parsed; the error surfaces later when the
/// file is loaded for real.
pub fn is_root_config(path: &Path) -> bool {
    let Ok(contents) = fs::read_to_string(path) else {
        return false;
    };
    let Ok(config) = toml::from_str::<RawConfig>(&contents) else {
        return false;
    };
    config.root == Some(true)
}
