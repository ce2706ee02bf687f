//! Shared context for running CLI commands.

use std::{
    env,
    path::{Path, PathBuf},
    process::ExitCode,
};

use mdblocks_config::Config;
use mdblocks_document::{BlockParser, ExtractOptions, split_exclusions};
use tracing::debug;

use super::args::{ExtractArgs, ParseArgs};

/// Command execution context built once per CLI invocation.
pub struct CommandContext {
    /// Current working directory.
    pub cwd: PathBuf,
    /// Loaded configuration (default if no config files were found).
    pub config: Config,
}

impl CommandContext {
    /// Loads the current directory and configuration.
    pub fn load() -> Result<Self, ExitCode> {
        let cwd = current_dir_or_failure()?;
        let config = load_config_or_failure(&cwd)?;
        debug!(root = ?config.config_root, "configuration loaded");
        Ok(Self { cwd, config })
    }

    /// Loads only the current directory, skipping configuration parsing.
    pub fn load_cwd_only() -> Result<Self, ExitCode> {
        let cwd = current_dir_or_failure()?;
        Ok(Self {
            cwd,
            config: Config::default(),
        })
    }

    /// Builds a parser from the configuration with CLI overrides applied.
    ///
    /// `--exclude` values are added to the configured exclusions.
    pub fn parser(&self, args: &ParseArgs) -> BlockParser {
        let mut options = self.config.parse.to_options();
        if let Some(max_len) = args.max_len {
            options.max_len = max_len;
        }
        if let Some(min_len) = args.min_len {
            options.min_len = min_len;
        }
        options
            .excluded_headings
            .extend(args.exclude.iter().flat_map(|list| split_exclusions(list)));
        options.skip_blocks_with_headings_only |= args.skip_headings_only;
        BlockParser::new(options)
    }

    /// Builds extraction options from the configuration with CLI overrides applied.
    pub fn extract_options(&self, args: &ExtractArgs) -> ExtractOptions {
        let configured = self.config.extract.to_options();
        ExtractOptions {
            chars_per_line: args.chars_per_line.or(configured.chars_per_line),
            max_chars: args.max_chars.or(configured.max_chars),
        }
    }
}

/// Returns the current working directory or exits with a consistent error.
fn current_dir_or_failure() -> Result<PathBuf, ExitCode> {
    env::current_dir().map_err(|e| {
        eprintln!("error: could not determine current directory: {e}");
        ExitCode::FAILURE
    })
}

/// Loads configuration from the provided directory or exits with an error.
fn load_config_or_failure(cwd: &Path) -> Result<Config, ExitCode> {
    Config::load(cwd).map_err(|e| {
        eprintln!("error: failed to load configuration: {e}");
        ExitCode::FAILURE
    })
}
