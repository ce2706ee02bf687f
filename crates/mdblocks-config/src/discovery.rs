//! Configuration file discovery.
//!
//! Walks up from the working directory collecting `.mdblocks.toml` files, then appends
//! `~/.mdblocks.toml` unless a file on the way up declared itself the root.

use std::path::{Path, PathBuf};

use directories::BaseDirs;

use crate::{ConfigError, parse::is_root_config};

/// The configuration filename.
pub const CONFIG_FILENAME: &str = ".mdblocks.toml";

/// Discovers all configuration files relevant to the given directory.
///
/// Returns paths in precedence order: closest to `cwd` first, global last. Discovery stops
/// at the first file with `root = true`, and the global file is skipped in that case.
pub fn discover_config_files(cwd: &Path) -> Vec<PathBuf> {
    let mut configs = Vec::new();
    let mut found_root = false;

    for dir in cwd.ancestors() {
        let config_path = dir.join(CONFIG_FILENAME);
        if !config_path.is_file() {
            continue;
        }
        let is_root = is_root_config(&config_path);
        configs.push(config_path);
        if is_root {
            found_root = true;
            break;
        }
    }

    if !found_root
        && let Some(global_path) = global_config_path()
        && global_path.is_file()
        && !configs.contains(&global_path)
    {
        configs.push(global_path);
    }

    configs
}

/// Returns the path to the global configuration file (`~/.mdblocks.toml`).
///
/// Returns `None` if the home directory cannot be determined.
pub fn global_config_path() -> Option<PathBuf> {
    BaseDirs::new().map(|dirs| dirs.home_dir().join(CONFIG_FILENAME))
}

/// Like [`global_config_path`], but reports a missing home directory as an error.
pub fn require_global_config_path() -> Result<PathBuf, ConfigError> {
    global_config_path().ok_or(ConfigError::NoHomeDirectory)
}

/// Checks if a path is the global configuration file.
pub fn is_global_config(path: &Path) -> bool {
    global_config_path().is_some_and(|global| path == global)
}
