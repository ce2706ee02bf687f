//! Block path addressing.
//!
//! A block path is a logical document path followed by a heading path, e.g.
//! `notes/guide.md#Install#Linux{1}`. The optional `{n}` suffix on the last segment is
//! the zero-based occurrence index among sections sharing the same heading chain.

use std::fmt;

use crate::heading::PATH_DELIMITER;

/// A parsed block path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BlockPath {
    /// Logical document path (everything before the first `#`).
    pub document: String,
    /// Target heading texts, outermost first.
    pub headings: Vec<String>,
    /// Zero-based occurrence of the final heading chain.
    pub occurrence: usize,
}

impl BlockPath {
    /// Parses a block path.
    ///
    /// Returns `None` when the string contains no `#`, which addresses the whole document.
    pub fn parse(path: &str) -> Option<Self> {
        let mut parsed = Self::parse_literal(path)?;
        if let Some(last) = parsed.headings.last_mut()
            && let Some((text, n)) = split_occurrence(last)
        {
            parsed.occurrence = n;
            let text_len = text.len();
            last.truncate(text_len);
        }
        Some(parsed)
    }

    /// Parses a block path without reading an occurrence suffix.
    ///
    /// A trailing `{n}` stays part of the last heading's text, which addresses the first
    /// section whose heading is literally named that way.
    pub fn parse_literal(path: &str) -> Option<Self> {
        let (document, rest) = path.split_once(PATH_DELIMITER)?;
        Some(Self {
            document: document.to_string(),
            headings: rest.split(PATH_DELIMITER).map(str::to_string).collect(),
            occurrence: 0,
        })
    }

    /// Returns the document part of a block path without parsing the headings.
    pub fn document_of(path: &str) -> &str {
        path.split_once(PATH_DELIMITER).map_or(path, |(doc, _)| doc)
    }

    /// The heading path portion, e.g. `#Install#Linux{1}`.
    pub fn heading_path(&self) -> String {
        let mut out = String::new();
        for heading in &self.headings {
            out.push(PATH_DELIMITER);
            out.push_str(heading);
        }
        if self.occurrence > 0 {
            out.push_str(&format!("{{{}}}", self.occurrence));
        }
        out
    }
}

impl fmt::Display for BlockPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.document, self.heading_path())
    }
}

/// Splits a trailing `{digits}` suffix off a segment.
fn split_occurrence(segment: &str) -> Option<(&str, usize)> {
    let inner = segment.strip_suffix('}')?;
    let (text, digits) = inner.rsplit_once('{')?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let n = digits.parse().ok()?;
    Some((text, n))
}
