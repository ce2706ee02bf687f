//! Path-addressed section extraction.
//!
//! Re-locates a heading path inside a raw document and returns only the text beneath it.
//! The document is rescanned from the top on every call; nothing is cached.

use tracing::debug;

use crate::{
    BlockPath,
    classify::{
        CODE_INDENT, ELLIPSIS, FENCE, LINE_SEPARATOR, heading_level, heading_text,
        is_empty_marker, is_fence, is_heading, truncate_chars,
    },
    heading::{HeadingFrame, HeadingStack},
};

/// Limits applied while extracting a section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Lines longer than this are cut and suffixed with an ellipsis.
    pub chars_per_line: Option<usize>,
    /// Total character budget for the extracted text.
    pub max_chars: Option<usize>,
}

/// A successful extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extracted<'a> {
    /// The block path had no heading part; the whole document is returned unchanged.
    Document(&'a str),
    /// Text under the located section. May be empty.
    Section(String),
}

impl Extracted<'_> {
    /// The extracted text.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Document(raw) => raw,
            Self::Section(text) => text,
        }
    }

    /// Converts into an owned string.
    pub fn into_string(self) -> String {
        match self {
            Self::Document(raw) => raw.to_string(),
            Self::Section(text) => text,
        }
    }
}

/// Retrieves the text under `block_path` from `raw`.
///
/// Returns:
/// - `Some(Extracted::Document(raw))` when `block_path` contains no `#`
/// - `Some(Extracted::Section(text))` when the section was found
/// - `None` when no matching section exists
pub fn get_block_from_path<'a>(
    block_path: &str,
    raw: &'a str,
    options: &ExtractOptions,
) -> Option<Extracted<'a>> {
    let Some(target) = BlockPath::parse(block_path) else {
        return Some(Extracted::Document(raw));
    };

    let lines: Vec<&str> = raw.split('\n').collect();
    let start = find_section_start(&lines, &target).or_else(|| {
        // A heading may itself end in `{n}`; retry with the suffix as part of its text.
        let literal = BlockPath::parse_literal(block_path)?;
        if literal == target {
            return None;
        }
        find_section_start(&lines, &literal)
    });
    let Some(start) = start else {
        debug!(%block_path, "section not found");
        return None;
    };

    debug!(%block_path, start, "section found");
    Some(Extracted::Section(collect_body(&lines[start..], options)))
}

/// Finds the index of the first line after the heading that completes `target`.
///
/// The open heading chain is rebuilt exactly as the parser builds it. Every heading whose
/// chain equals the target chain is one occurrence; headings that do not complete the chain
/// are passed over and scanning continues.
fn find_section_start(lines: &[&str], target: &BlockPath) -> Option<usize> {
    let mut stack = HeadingStack::new();
    let mut occurrence = 0;
    let mut in_code = false;

    for (i, line) in lines.iter().enumerate() {
        if is_fence(line) {
            in_code = !in_code;
        }
        if in_code || is_empty_marker(line) || !is_heading(line) {
            continue;
        }

        stack.push(HeadingFrame {
            text: heading_text(line),
            level: heading_level(line),
        });
        if !stack.matches(&target.headings) {
            continue;
        }

        if occurrence == target.occurrence {
            return Some(i + 1);
        }
        occurrence += 1;
    }

    None
}

/// Collects the section body starting at the line after its heading.
fn collect_body(lines: &[&str], options: &ExtractOptions) -> String {
    let mut block: Vec<String> = Vec::new();
    let mut in_code = false;
    let mut char_count = 0;

    for &raw_line in lines {
        if is_heading(raw_line) {
            break;
        }
        if raw_line.is_empty() {
            continue;
        }

        if is_fence(raw_line) {
            in_code = !in_code;
        }
        if !in_code && is_empty_marker(raw_line) {
            continue;
        }

        let limited = limit_line(raw_line, options.chars_per_line);
        let mut line = if in_code {
            format!("{CODE_INDENT}{limited}")
        } else {
            limited
        };

        let line_len = line.chars().count();
        if let Some(max_chars) = options.max_chars {
            if char_count >= max_chars {
                block.push(ELLIPSIS.to_string());
                break;
            }
            if char_count + line_len > max_chars {
                truncate_chars(&mut line, max_chars - char_count);
                line.push_str(ELLIPSIS);
                block.push(line);
                break;
            }
        }

        char_count += line_len;
        block.push(line);
    }

    if in_code {
        block.push(FENCE.to_string());
    }

    block.join(LINE_SEPARATOR).trim().to_string()
}

/// Applies the per-line character limit.
fn limit_line(line: &str, chars_per_line: Option<usize>) -> String {
    let mut out = line.to_string();
    if let Some(limit) = chars_per_line
        && line.chars().count() > limit
    {
        truncate_chars(&mut out, limit);
        out.push_str(ELLIPSIS);
    }
    out
}
