//! Configuration merging.
//!
//! Folds parsed config files into a single `Config`. Files are given highest precedence
//! first; each field takes the first value any file defines.

use std::path::{Path, PathBuf};

use crate::{
    Config, ExtractSettings, ParseSettings,
    parse::{RawConfig, RawExtractSettings, RawParseSettings},
};

/// A parsed config file with its source path.
#[derive(Debug, Clone)]
pub struct ParsedConfig {
    /// Path to the config file.
    pub path: PathBuf,
    /// Parsed raw configuration.
    pub config: RawConfig,
}

/// Merges configuration files, highest precedence first, into a `Config`.
///
/// `config_root` is the directory holding the highest-precedence file.
pub fn merge_configs(configs: &[ParsedConfig]) -> Config {
    let config_root = configs
        .first()
        .and_then(|c| c.path.parent())
        .map(Path::to_path_buf);

    Config {
        parse: merge_parse_settings(configs),
        extract: merge_extract_settings(configs),
        config_root,
    }
}

/// Merges `[parse]` sections.
fn merge_parse_settings(configs: &[ParsedConfig]) -> ParseSettings {
    let mut result = ParseSettings::default();

    // Lowest precedence first, so closer files overwrite.
    for parsed in configs.iter().rev() {
        if let Some(ref parse) = parsed.config.parse {
            apply_raw_parse(&mut result, parse);
        }
    }

    result
}

/// Applies the fields a raw `[parse]` section defines.
fn apply_raw_parse(result: &mut ParseSettings, raw: &RawParseSettings) {
    if let Some(ref v) = raw.excluded_headings {
        result.excluded_headings.clone_from(v);
    }
    if let Some(v) = raw.max_len {
        result.max_len = v;
    }
    if let Some(v) = raw.min_len {
        result.min_len = v;
    }
    if let Some(v) = raw.skip_blocks_with_headings_only {
        result.skip_blocks_with_headings_only = v;
    }
}

/// Merges `[extract]` sections.
fn merge_extract_settings(configs: &[ParsedConfig]) -> ExtractSettings {
    let mut result = ExtractSettings::default();

    for parsed in configs.iter().rev() {
        if let Some(ref extract) = parsed.config.extract {
            apply_raw_extract(&mut result, extract);
        }
    }

    result
}

/// Applies the fields a raw `[extract]` section defines.
fn apply_raw_extract(result: &mut ExtractSettings, raw: &RawExtractSettings) {
    if raw.chars_per_line.is_some() {
        result.chars_per_line = raw.chars_per_line;
    }
    if raw.max_chars.is_some() {
        result.max_chars = raw.max_chars;
    }
}
