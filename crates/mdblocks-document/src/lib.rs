//! Markdown block segmentation and path-addressed extraction for mdblocks.
//!
//! This crate splits markdown into addressable blocks and retrieves sections again later.
//! It supports:
//! - Line-based heading detection (`#` followed by `#` or a space)
//! - One block per heading section with a breadcrumb line and a unique heading path
//! - Re-locating a section by block path, with code-fence handling and character budgets
//!
//! The parser and the extractor never call each other. They share the rules in
//! [`classify`] and [`heading`] so that every block path the parser emits can be resolved
//! by the extractor against the same document.

#![warn(missing_docs)]

mod block_path;
pub mod classify;
mod error;
mod extract;
mod file;
pub mod heading;
mod parser;

use serde::Serialize;

pub use block_path::BlockPath;
pub use error::DocumentError;
pub use extract::{ExtractOptions, Extracted, get_block_from_path};
pub use file::{extract_from_file, parse_file};
pub use parser::{BlockParser, DEFAULT_MAX_LEN, DEFAULT_MIN_LEN, ParseOptions, split_exclusions};

/// One emitted, independently addressable unit of document text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Block {
    /// Breadcrumb line followed by the body, trimmed and possibly truncated.
    pub text: String,
    /// Document path followed by the (possibly disambiguated) heading path.
    pub path: String,
    /// Character count of the body, excluding the breadcrumb line, before truncation.
    pub length: usize,
    /// The (possibly disambiguated) heading path, e.g. `#Intro#Setup{1}`.
    pub heading: String,
}

impl Block {
    /// The breadcrumb line.
    pub fn breadcrumb(&self) -> &str {
        self.text.split_once('\n').map_or(&self.text, |(line, _)| line)
    }

    /// The text after the breadcrumb line. Empty for headings-only blocks.
    pub fn body(&self) -> &str {
        self.text.split_once('\n').map_or("", |(_, body)| body)
    }
}

/// Result of parsing one document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParseOutput {
    /// Blocks in document order.
    pub blocks: Vec<Block>,
    /// Human-readable diagnostics for every dropped block.
    pub log: Vec<String>,
    /// Logical document path the blocks were parsed under.
    pub file_path: String,
}

impl ParseOutput {
    /// Blocks whose body is at least `min_len` characters long.
    pub fn blocks_with_min_len(&self, min_len: usize) -> impl Iterator<Item = &Block> {
        self.blocks.iter().filter(move |b| b.length >= min_len)
    }
}
