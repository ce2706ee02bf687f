//! Clap argument definitions for the `mdblocks` CLI.

use clap::{Args, Parser, Subcommand};

/// Top-level CLI options.
#[derive(Parser)]
#[command(name = "mdblocks")]
#[command(about = "Split markdown into addressable blocks and pull sections back out by path")]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Flags that override `[parse]` settings from `.mdblocks.toml`.
#[derive(Args, Debug, Clone, Default)]
pub struct ParseArgs {
    /// Hide blocks whose body is shorter than this [default: 5]
    #[arg(long)]
    pub min_len: Option<usize>,

    /// Cut block text to this many characters [default: 1000]
    #[arg(long)]
    pub max_len: Option<usize>,

    /// Skip blocks whose heading path contains this text (repeatable, comma lists allowed)
    #[arg(short = 'x', long = "exclude")]
    pub exclude: Vec<String>,

    /// Drop sections that contain only headings
    #[arg(long)]
    pub skip_headings_only: bool,
}

/// Flags that override `[extract]` settings from `.mdblocks.toml`.
#[derive(Args, Debug, Clone, Default)]
pub struct ExtractArgs {
    /// Cut lines longer than this and end them with "..."
    #[arg(long)]
    pub chars_per_line: Option<usize>,

    /// Stop after this many characters
    #[arg(long)]
    pub max_chars: Option<usize>,
}

/// Arguments for `mdblocks blocks`.
#[derive(Args, Debug, Clone)]
pub struct BlocksCommand {
    /// Markdown file to split (.md, .markdown or .txt)
    pub file: String,

    #[command(flatten)]
    /// Parser overrides.
    pub parse: ParseArgs,

    /// Output a table of block paths and lengths
    #[arg(long, conflicts_with = "json")]
    pub list: bool,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,

    /// Print skipped-block diagnostics to stderr
    #[arg(long)]
    pub log: bool,
}

/// Arguments for `mdblocks get`.
#[derive(Args, Debug, Clone)]
pub struct GetCommand {
    /// Block path (file.md#Heading#Subheading{n}) or a bare file path
    pub block_path: String,

    #[command(flatten)]
    /// Extraction overrides.
    pub extract: ExtractArgs,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `mdblocks init`.
#[derive(Args, Debug, Clone)]
pub struct InitCommand {
    /// Create global ~/.mdblocks.toml instead
    #[arg(long)]
    pub global: bool,

    /// Overwrite existing configuration file
    #[arg(long)]
    pub force: bool,
}

/// Supported `mdblocks` subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Split a markdown file into blocks
    #[command(after_help = "\
EXAMPLES:
  mdblocks blocks notes/guide.md
  mdblocks blocks notes/guide.md --list
  mdblocks blocks notes/guide.md --exclude Changelog --skip-headings-only
  mdblocks blocks notes/guide.md --json")]
    Blocks(BlocksCommand),

    /// Print the section a block path points to
    #[command(after_help = "\
BLOCK PATHS:
  guide.md                  The whole file
  guide.md#Install          Text under the '# Install' heading
  guide.md#Install#Linux    Text under '## Linux' inside '# Install'
  guide.md#Install#Linux{1} The second such section")]
    Get(GetCommand),

    /// Initialize mdblocks configuration in current directory
    Init(InitCommand),

    /// Show effective configuration settings
    Config,

    /// Validate configuration and diagnose issues
    Check,
}
