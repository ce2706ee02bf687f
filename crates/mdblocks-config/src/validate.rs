//! Configuration validation.
//!
//! Reports settings that load fine but are probably not what the user meant.

use std::fmt;

use mdblocks_document::{BlockParser, DEFAULT_MAX_LEN};

use crate::Config;

/// A non-fatal warning about the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    /// `parse.max_len` is zero and falls back to the default.
    ZeroMaxLen,
    /// `parse.min_len` is larger than `parse.max_len` after defaults are applied.
    MinLenExceedsMaxLen {
        /// Effective minimum body length.
        min_len: usize,
        /// Effective maximum block length.
        max_len: usize,
    },
    /// `extract.chars_per_line` is zero.
    ZeroCharsPerLine,
    /// `extract.max_chars` is zero.
    ZeroMaxChars,
    /// An `excluded_headings` entry contains an empty item.
    EmptyExclusion {
        /// The entry as written in the config file.
        entry: String,
    },
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroMaxLen => {
                write!(f, "parse.max_len is 0, using the default of {DEFAULT_MAX_LEN}")
            }
            Self::MinLenExceedsMaxLen { min_len, max_len } => {
                write!(
                    f,
                    "parse.min_len ({min_len}) is greater than parse.max_len ({max_len})"
                )
            }
            Self::ZeroCharsPerLine => {
                write!(f, "extract.chars_per_line is 0, every line is cut to \"...\"")
            }
            Self::ZeroMaxChars => {
                write!(f, "extract.max_chars is 0, sections extract as \"...\"")
            }
            Self::EmptyExclusion { entry } => {
                write!(f, "parse.excluded_headings has an empty item in {entry:?}")
            }
        }
    }
}

/// Validates the configuration and returns any warnings.
pub fn validate_config(config: &Config) -> Vec<ConfigWarning> {
    let mut warnings = Vec::new();

    if config.parse.max_len == 0 {
        warnings.push(ConfigWarning::ZeroMaxLen);
    }

    let parser = BlockParser::new(config.parse.to_options());
    if parser.min_len() > parser.max_len() {
        warnings.push(ConfigWarning::MinLenExceedsMaxLen {
            min_len: parser.min_len(),
            max_len: parser.max_len(),
        });
    }

    for entry in &config.parse.excluded_headings {
        if entry.split(',').any(|item| item.trim().is_empty()) {
            warnings.push(ConfigWarning::EmptyExclusion {
                entry: entry.clone(),
            });
        }
    }

    if config.extract.chars_per_line == Some(0) {
        warnings.push(ConfigWarning::ZeroCharsPerLine);
    }
    if config.extract.max_chars == Some(0) {
        warnings.push(ConfigWarning::ZeroMaxChars);
    }

    warnings
}
