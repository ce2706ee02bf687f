//! Heading hierarchy tracking and heading path disambiguation.
//!
//! A heading path is the structural address of a section: `#` followed by every open
//! heading's text joined with `#`, e.g. `#Intro#Setup`. Repeated paths are made unique by
//! appending `{n}`.

use std::collections::HashSet;

/// Delimiter between heading texts in a heading path.
pub const PATH_DELIMITER: char = '#';

/// Separator between segments of a breadcrumb line.
pub const CRUMB_SEPARATOR: &str = " > ";

/// One open heading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadingFrame {
    /// Normalized heading text.
    pub text: String,
    /// Number of leading `#` characters.
    pub level: usize,
}

/// The chain of currently open headings, ordered by strictly increasing level.
#[derive(Debug, Clone, Default)]
pub struct HeadingStack {
    /// Frames from the document root to the innermost open heading.
    frames: Vec<HeadingFrame>,
}

impl HeadingStack {
    /// Creates an empty stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Closes every frame at `frame.level` or deeper, then opens `frame`.
    pub fn push(&mut self, frame: HeadingFrame) {
        let keep = self
            .frames
            .iter()
            .position(|f| f.level >= frame.level)
            .unwrap_or(self.frames.len());
        self.frames.truncate(keep);
        self.frames.push(frame);
    }

    /// Returns true if no heading is open.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Open frames, outermost first.
    pub fn frames(&self) -> &[HeadingFrame] {
        &self.frames
    }

    /// Returns true if the open heading texts are exactly `texts`, in order.
    pub fn matches(&self, texts: &[String]) -> bool {
        self.frames.len() == texts.len() && self.texts().zip(texts).all(|(a, b)| a == b)
    }

    /// Heading texts joined for display, e.g. `Intro > Setup`.
    pub fn breadcrumb(&self) -> String {
        self.texts().collect::<Vec<_>>().join(CRUMB_SEPARATOR)
    }

    /// Structural heading path, e.g. `#Intro#Setup`. Empty when no heading is open.
    pub fn heading_path(&self) -> String {
        self.texts().fold(String::new(), |mut path, text| {
            path.push(PATH_DELIMITER);
            path.push_str(text);
            path
        })
    }

    /// Iterates over the open heading texts.
    fn texts(&self) -> impl Iterator<Item = &str> {
        self.frames.iter().map(|f| f.text.as_str())
    }
}

/// Hands out unique heading paths for one parse.
///
/// The first claim of a path returns it unchanged. Later claims probe `{1}`, `{2}`, ... and
/// return the first suffix not handed out yet.
#[derive(Debug, Default)]
pub struct PathRegistry {
    /// Every path handed out so far, suffixed or not.
    seen: HashSet<String>,
}

impl PathRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a unique version of `path` and records it.
    pub fn claim(&mut self, path: String) -> String {
        if !self.seen.contains(&path) {
            self.seen.insert(path.clone());
            return path;
        }

        let mut n = 1;
        loop {
            let candidate = format!("{path}{{{n}}}");
            if !self.seen.contains(&candidate) {
                self.seen.insert(candidate.clone());
                return candidate;
            }
            n += 1;
        }
    }
}

/// Converts a logical document path into breadcrumb form.
///
/// A trailing `.md` is stripped, the rest is split on `/`, segments are trimmed, empty
/// segments dropped, and the remainder joined with ` > `.
pub fn file_path_to_breadcrumbs(file_path: &str) -> String {
    let stem = file_path.strip_suffix(".md").unwrap_or(file_path);
    stem.split('/')
        .map(str::trim)
        .filter(|crumb| !crumb.is_empty())
        .collect::<Vec<_>>()
        .join(CRUMB_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(text: &str, level: usize) -> HeadingFrame {
        HeadingFrame {
            text: text.into(),
            level,
        }
    }

    #[test]
    fn stack_evicts_same_and_deeper_levels() {
        let mut stack = HeadingStack::new();
        stack.push(frame("A", 1));
        stack.push(frame("B", 2));
        stack.push(frame("C", 3));
        assert_eq!(stack.heading_path(), "#A#B#C");

        stack.push(frame("D", 2));
        assert_eq!(stack.heading_path(), "#A#D");
        assert_eq!(stack.breadcrumb(), "A > D");

        stack.push(frame("E", 1));
        assert_eq!(stack.frames(), &[frame("E", 1)]);
    }

    #[test]
    fn stack_keeps_shallower_frames_when_skipping_levels() {
        let mut stack = HeadingStack::new();
        stack.push(frame("A", 1));
        stack.push(frame("B", 4));
        stack.push(frame("C", 2));
        assert_eq!(stack.heading_path(), "#A#C");
    }

    #[test]
    fn stack_matches_exact_chain() {
        let mut stack = HeadingStack::new();
        stack.push(frame("A", 1));
        stack.push(frame("B", 2));
        assert!(stack.matches(&["A".to_string(), "B".to_string()]));
        assert!(!stack.matches(&["A".to_string()]));
        assert!(!stack.matches(&["B".to_string()]));
        assert!(!stack.matches(&["A".to_string(), "B".to_string(), "C".to_string()]));
    }

    #[test]
    fn empty_stack_has_empty_path() {
        let stack = HeadingStack::new();
        assert!(stack.is_empty());
        assert_eq!(stack.heading_path(), "");
        assert_eq!(stack.breadcrumb(), "");
    }

    #[test]
    fn registry_suffixes_duplicates() {
        let mut registry = PathRegistry::new();
        assert_eq!(registry.claim("#A".into()), "#A");
        assert_eq!(registry.claim("#A#B".into()), "#A#B");
        assert_eq!(registry.claim("#A".into()), "#A{1}");
        assert_eq!(registry.claim("#A".into()), "#A{2}");
        assert_eq!(registry.claim("#A#B".into()), "#A#B{1}");
    }

    #[test]
    fn registry_skips_suffixes_already_taken() {
        let mut registry = PathRegistry::new();
        // A heading literally named "A{1}" occupies the first probe.
        assert_eq!(registry.claim("#A{1}".into()), "#A{1}");
        assert_eq!(registry.claim("#A".into()), "#A");
        assert_eq!(registry.claim("#A".into()), "#A{2}");
    }

    #[test]
    fn breadcrumbs_from_file_path() {
        assert_eq!(file_path_to_breadcrumbs("doc.md"), "doc");
        assert_eq!(
            file_path_to_breadcrumbs("notes/ projects /plan.md"),
            "notes > projects > plan"
        );
        assert_eq!(file_path_to_breadcrumbs("/abs//path.md"), "abs > path");
        assert_eq!(file_path_to_breadcrumbs("readme.txt"), "readme.txt");
        assert_eq!(file_path_to_breadcrumbs(""), "");
    }
}
