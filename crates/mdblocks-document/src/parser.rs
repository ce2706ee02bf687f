//! Markdown block parser.
//!
//! Walks a document line by line, tracking the open headings, and emits one [`Block`] per
//! heading section. Each block's text starts with a breadcrumb line:
//!
//! ```text
//! notes > guide: Install > Linux:
//! first body line
//! second body line
//! ```
//!
//! Sections are never regrouped after the fact: a block boundary is exactly a heading line
//! or the end of the document.

use std::mem;

use tracing::debug;

use crate::{
    Block, ParseOutput,
    classify::{heading_level, heading_text, is_content_line, is_heading, truncate_chars},
    heading::{HeadingFrame, HeadingStack, PathRegistry, file_path_to_breadcrumbs},
};

/// Default maximum block text length, in characters.
pub const DEFAULT_MAX_LEN: usize = 1000;

/// Default minimum body length, in characters, for caller-side filtering.
pub const DEFAULT_MIN_LEN: usize = 5;

/// Parser configuration as supplied by the caller.
///
/// Zero lengths mean "unset" and resolve to the defaults when the parser is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// Substrings matched against a block's full heading path.
    pub excluded_headings: Vec<String>,
    /// Maximum block text length before truncation.
    pub max_len: usize,
    /// Minimum body length callers should accept. Not applied by the parser.
    pub min_len: usize,
    /// Drop sections that have headings but no body lines.
    pub skip_blocks_with_headings_only: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            excluded_headings: Vec::new(),
            max_len: DEFAULT_MAX_LEN,
            min_len: DEFAULT_MIN_LEN,
            skip_blocks_with_headings_only: false,
        }
    }
}

impl ParseOptions {
    /// Sets the exclusions from a comma-separated list such as `"Changelog, Archive"`.
    pub fn with_excluded_headings_list(mut self, list: &str) -> Self {
        self.excluded_headings = split_exclusions(list);
        self
    }
}

/// Splits a comma-separated exclusion list, trimming entries and dropping empty ones.
pub fn split_exclusions(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Splits markdown documents into blocks.
///
/// Configuration is resolved once in [`BlockParser::new`] and never changes afterwards, so
/// a parser can be shared freely between callers.
#[derive(Debug, Clone)]
pub struct BlockParser {
    /// Non-empty exclusion substrings.
    excluded_headings: Vec<String>,
    /// Resolved maximum block text length.
    max_len: usize,
    /// Resolved minimum body length.
    min_len: usize,
    /// Whether headings-only sections are dropped.
    skip_blocks_with_headings_only: bool,
}

impl Default for BlockParser {
    fn default() -> Self {
        Self::new(ParseOptions::default())
    }
}

impl BlockParser {
    /// Builds a parser, resolving unset values to their defaults.
    pub fn new(options: ParseOptions) -> Self {
        let excluded_headings = options
            .excluded_headings
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();

        Self {
            excluded_headings,
            max_len: non_zero_or(options.max_len, DEFAULT_MAX_LEN),
            min_len: non_zero_or(options.min_len, DEFAULT_MIN_LEN),
            skip_blocks_with_headings_only: options.skip_blocks_with_headings_only,
        }
    }

    /// Maximum block text length.
    pub fn max_len(&self) -> usize {
        self.max_len
    }

    /// Minimum body length callers should accept.
    pub fn min_len(&self) -> usize {
        self.min_len
    }

    /// Active exclusion substrings.
    pub fn excluded_headings(&self) -> &[String] {
        &self.excluded_headings
    }

    /// Parses `content` into blocks addressed under `file_path`.
    ///
    /// A missing `file_path` is treated as the empty string.
    pub fn parse(&self, content: &str, file_path: Option<&str>) -> ParseOutput {
        let mut acc = Accumulator::new(file_path.unwrap_or_default());

        for line in content.split('\n').filter(|line| is_content_line(line)) {
            if is_heading(line) {
                self.output_block(&mut acc);
                acc.open_heading(line);
            } else {
                acc.push_line(line);
            }
        }
        self.output_block(&mut acc);

        acc.finish()
    }

    /// Returns true if the heading path contains any exclusion substring.
    fn is_excluded(&self, heading_path: &str) -> bool {
        self.excluded_headings
            .iter()
            .any(|exclusion| heading_path.contains(exclusion.as_str()))
    }

    /// Closes the section being accumulated, emitting or dropping it.
    fn output_block(&self, acc: &mut Accumulator<'_>) {
        if !acc.has_content() {
            if acc.stack.is_empty() {
                acc.skip(format!("Skipping empty block: {}", acc.curr));
                return;
            }
            if self.skip_blocks_with_headings_only {
                acc.skip(format!("Skipping headings-only block: {}", acc.curr));
                return;
            }
        }

        if self.is_excluded(&acc.heading_path) {
            acc.skip(format!("Skipping excluded heading: {}", acc.heading_path));
            return;
        }

        let mut text = mem::take(&mut acc.curr);
        let total = text.chars().count();
        let breadcrumb_len = text
            .find('\n')
            .map_or(total, |idx| text[..=idx].chars().count());
        let length = total - breadcrumb_len;

        if total > self.max_len {
            truncate_chars(&mut text, self.max_len);
        }

        debug!(path = %acc.block_path, length, "emitting block");
        acc.blocks.push(Block {
            text: text.trim().to_string(),
            path: acc.block_path.clone(),
            length,
            heading: acc.heading_path.clone(),
        });
    }
}

/// Returns `value`, or `default` when `value` is zero.
fn non_zero_or(value: usize, default: usize) -> usize {
    if value == 0 { default } else { value }
}

/// Transient state for a single parse.
struct Accumulator<'a> {
    /// Logical document path.
    file_path: &'a str,
    /// Document breadcrumbs followed by `": "`.
    crumbs: String,
    /// Open headings.
    stack: HeadingStack,
    /// Heading path of the current section, disambiguated.
    heading_path: String,
    /// Paths handed out so far.
    registry: PathRegistry,
    /// Full block path of the current section.
    block_path: String,
    /// Breadcrumb line plus body of the current section.
    curr: String,
    /// Emitted blocks.
    blocks: Vec<Block>,
    /// Diagnostics for dropped sections.
    log: Vec<String>,
}

impl<'a> Accumulator<'a> {
    /// Starts an accumulator positioned before the first heading.
    fn new(file_path: &'a str) -> Self {
        let crumbs = format!("{}: ", file_path_to_breadcrumbs(file_path));
        Self {
            file_path,
            curr: crumbs.clone(),
            crumbs,
            stack: HeadingStack::new(),
            heading_path: String::new(),
            registry: PathRegistry::new(),
            block_path: file_path.to_string(),
            blocks: Vec::new(),
            log: Vec::new(),
        }
    }

    /// Opens a new section at a heading line.
    fn open_heading(&mut self, line: &str) {
        self.stack.push(HeadingFrame {
            text: heading_text(line),
            level: heading_level(line),
        });
        self.curr = format!("{}{}", self.crumbs, self.stack.breadcrumb());
        self.heading_path = self.registry.claim(self.stack.heading_path());
        self.block_path = format!("{}{}", self.file_path, self.heading_path);
    }

    /// Appends a body line, terminating the breadcrumb line first if needed.
    fn push_line(&mut self, line: &str) {
        if !self.has_content() {
            self.curr.push(':');
        }
        self.curr.push('\n');
        self.curr.push_str(line);
    }

    /// Returns true once a body line has been appended.
    fn has_content(&self) -> bool {
        self.curr.contains('\n')
    }

    /// Records a dropped section.
    fn skip(&mut self, message: String) {
        debug!("{message}");
        self.log.push(message);
    }

    /// Consumes the accumulator into the parse result.
    fn finish(self) -> ParseOutput {
        ParseOutput {
            blocks: self.blocks,
            log: self.log,
            file_path: self.file_path.to_string(),
        }
    }
}
