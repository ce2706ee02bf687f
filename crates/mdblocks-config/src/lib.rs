//! Configuration system for mdblocks.
//!
//! mdblocks reads TOML files named `.mdblocks.toml`. Configuration is resolved by walking up
//! the directory tree from the working directory, collecting every `.mdblocks.toml` found,
//! then loading `~/.mdblocks.toml` with the lowest precedence.

#![warn(missing_docs)]

mod discovery;
mod error;
mod merge;
mod parse;
mod templates;
#[cfg(test)]
mod test_support;
mod validate;

use std::path::{Path, PathBuf};

pub use discovery::{
    CONFIG_FILENAME, discover_config_files, global_config_path, is_global_config,
    require_global_config_path,
};
pub use error::ConfigError;
use mdblocks_document::{
    DEFAULT_MAX_LEN, DEFAULT_MIN_LEN, ExtractOptions, ParseOptions, split_exclusions,
};
pub use merge::{ParsedConfig, merge_configs};
pub use parse::{
    RawConfig, RawExtractSettings, RawParseSettings, parse_config_file, parse_config_str,
};
use serde::Serialize;
pub use templates::{global_template, local_template};
pub use validate::ConfigWarning;
use validate::validate_config;

/// Fully merged configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Settings for splitting documents into blocks.
    pub parse: ParseSettings,
    /// Settings for extracting a section by block path.
    pub extract: ExtractSettings,
    /// Directory containing the most specific config file.
    pub config_root: Option<PathBuf>,
}

impl Config {
    /// Loads configuration by discovering and merging all relevant `.mdblocks.toml` files.
    ///
    /// Returns `Ok(Config::default())` if no configuration files are found.
    pub fn load(cwd: &Path) -> Result<Self, ConfigError> {
        let config_files = discover_config_files(cwd);
        Self::load_from_files(&config_files)
    }

    /// Loads configuration from config files given highest precedence first.
    pub fn load_from_files(files: &[PathBuf]) -> Result<Self, ConfigError> {
        let parsed = files
            .iter()
            .map(|path| {
                Ok(ParsedConfig {
                    path: path.clone(),
                    config: parse_config_file(path)?,
                })
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;

        Ok(merge_configs(&parsed))
    }

    /// Validates the configuration and returns any warnings.
    pub fn validate(&self) -> Vec<ConfigWarning> {
        validate_config(self)
    }

    /// Serializes the effective settings in `.mdblocks.toml` format.
    pub fn settings_to_toml(&self) -> Result<String, ConfigError> {
        let serializable = SerializableSettings {
            parse: &self.parse,
            extract: &self.extract,
        };
        Ok(toml::to_string_pretty(&serializable)?)
    }
}

/// Effective `[parse]` settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParseSettings {
    /// Exclusion entries as configured; each may be a comma-separated list.
    pub excluded_headings: Vec<String>,
    /// Maximum block text length. Zero selects the default.
    pub max_len: usize,
    /// Minimum body length for listed blocks. Zero selects the default.
    pub min_len: usize,
    /// Drop sections that have headings but no body.
    pub skip_blocks_with_headings_only: bool,
}

impl Default for ParseSettings {
    fn default() -> Self {
        Self {
            excluded_headings: Vec::new(),
            max_len: DEFAULT_MAX_LEN,
            min_len: DEFAULT_MIN_LEN,
            skip_blocks_with_headings_only: false,
        }
    }
}

impl ParseSettings {
    /// Every configured exclusion, comma lists split apart.
    pub fn exclusions(&self) -> Vec<String> {
        self.excluded_headings
            .iter()
            .flat_map(|entry| split_exclusions(entry))
            .collect()
    }

    /// Parser options for these settings.
    pub fn to_options(&self) -> ParseOptions {
        ParseOptions {
            excluded_headings: self.exclusions(),
            max_len: self.max_len,
            min_len: self.min_len,
            skip_blocks_with_headings_only: self.skip_blocks_with_headings_only,
        }
    }
}

/// Effective `[extract]` settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ExtractSettings {
    /// Per-line character limit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chars_per_line: Option<usize>,
    /// Total character budget.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_chars: Option<usize>,
}

impl ExtractSettings {
    /// Extractor options for these settings.
    pub fn to_options(self) -> ExtractOptions {
        ExtractOptions {
            chars_per_line: self.chars_per_line,
            max_chars: self.max_chars,
        }
    }
}

/// Borrowed view of the settings for TOML output.
#[derive(Serialize)]
struct SerializableSettings<'a> {
    /// `[parse]` section.
    parse: &'a ParseSettings,
    /// `[extract]` section.
    extract: &'a ExtractSettings,
}
