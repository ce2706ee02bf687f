//! Implementation of `mdblocks check`.

use std::process::ExitCode;

use mdblocks_config::{ConfigWarning, discover_config_files};

use crate::cli::context::CommandContext;

/// Lists config files in precedence order and reports validation warnings.
///
/// Exits with failure when any warning is found.
pub fn run(ctx: &CommandContext) -> ExitCode {
    let config_files = discover_config_files(&ctx.cwd);

    if config_files.is_empty() {
        println!("No configuration files found.");
        println!();
        println!("Run 'mdblocks init' to create a configuration file.");
        return ExitCode::SUCCESS;
    }

    println!("Config files (highest precedence first):");
    for path in &config_files {
        println!("  {}", path.display());
    }
    println!();

    let warnings = ctx.config.validate();
    if warnings.is_empty() {
        println!("No issues found.");
        return ExitCode::SUCCESS;
    }

    println!("Warnings ({}):", warnings.len());
    for warning in &warnings {
        println!("  - {warning}");
    }
    println!();

    print_hints(&warnings);

    ExitCode::FAILURE
}

/// Prints hints for resolving the warnings found.
fn print_hints(warnings: &[ConfigWarning]) {
    let mut hints: Vec<&str> = warnings
        .iter()
        .map(|warning| match warning {
            ConfigWarning::ZeroMaxLen => "Remove max_len or set it above 0.",
            ConfigWarning::MinLenExceedsMaxLen { .. } => {
                "Lower parse.min_len or raise parse.max_len."
            }
            ConfigWarning::ZeroCharsPerLine | ConfigWarning::ZeroMaxChars => {
                "Remove the [extract] limit or set it above 0."
            }
            ConfigWarning::EmptyExclusion { .. } => {
                "Remove stray commas and blank entries from excluded_headings."
            }
        })
        .collect();

    hints.sort_unstable();
    hints.dedup();

    println!("Hints:");
    for hint in hints {
        println!("  - {hint}");
    }
}
