//! Line classification shared by the parser and the extractor.
//!
//! Both sides must agree exactly on what counts as a heading and how heading text is
//! normalized, otherwise a block produced by the parser could not be found again by path.

/// Marker that opens or closes a fenced code block.
pub const FENCE: &str = "```";

/// Appended to anything the extractor cuts short.
pub const ELLIPSIS: &str = "...";

/// Separator used when joining extracted lines.
///
/// Lines are joined with a single newline; blank lines in the source are dropped, never
/// reintroduced between sections.
pub const LINE_SEPARATOR: &str = "\n";

/// Prefix applied to lines inside a fenced code block during extraction.
pub const CODE_INDENT: &str = "\t";

/// Bullet and checkbox markers with nothing after them.
const EMPTY_MARKERS: [&str; 2] = ["- ", "- [ ] "];

/// Returns true if the line carries content worth keeping.
///
/// Empty lines and bare bullet or checkbox markers are structurally ignorable.
pub fn is_content_line(line: &str) -> bool {
    !line.is_empty() && !is_empty_marker(line)
}

/// Returns true if the line is exactly an empty bullet (`- `) or checkbox (`- [ ] `).
pub fn is_empty_marker(line: &str) -> bool {
    EMPTY_MARKERS.contains(&line)
}

/// Returns true if the line opens a heading.
///
/// The first character must be `#` and the second either another `#` or a space. This
/// keeps tag-like tokens such as `#mytag` out.
pub fn is_heading(line: &str) -> bool {
    let mut bytes = line.bytes();
    bytes.next() == Some(b'#') && matches!(bytes.next(), Some(b'#' | b' '))
}

/// Number of leading `#` characters.
pub fn heading_level(line: &str) -> usize {
    line.bytes().take_while(|&b| b == b'#').count()
}

/// Heading text with every `#` removed and surrounding whitespace trimmed.
///
/// Removing all `#` characters, not only the leading run, guarantees the text can never
/// contain the heading path delimiter.
pub fn heading_text(line: &str) -> String {
    let stripped: String = line.chars().filter(|&c| c != '#').collect();
    stripped.trim().to_string()
}

/// Returns true if the line toggles a fenced code block.
pub fn is_fence(line: &str) -> bool {
    line.starts_with(FENCE)
}

/// Truncates `text` to at most `max_chars` characters.
pub(crate) fn truncate_chars(text: &mut String, max_chars: usize) {
    if let Some((idx, _)) = text.char_indices().nth(max_chars) {
        text.truncate(idx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_lines() {
        assert!(is_content_line("text"));
        assert!(is_content_line("- item"));
        assert!(is_content_line("- [ ] todo"));
        assert!(is_content_line("-"));
        assert!(!is_content_line(""));
        assert!(!is_content_line("- "));
        assert!(!is_content_line("- [ ] "));
    }

    #[test]
    fn headings_and_tags() {
        assert!(is_heading("# Title"));
        assert!(is_heading("## Section"));
        assert!(is_heading("###### Deep"));
        assert!(is_heading("# "));
        assert!(!is_heading("#mytag"));
        assert!(!is_heading("#"));
        assert!(!is_heading(" # indented"));
        assert!(!is_heading("plain"));
    }

    #[test]
    fn levels() {
        assert_eq!(heading_level("# A"), 1);
        assert_eq!(heading_level("### C"), 3);
        assert_eq!(heading_level("## C# notes"), 2);
        assert_eq!(heading_level("text"), 0);
    }

    #[test]
    fn text_strips_every_hash() {
        assert_eq!(heading_text("## Setup  "), "Setup");
        assert_eq!(heading_text("# C# notes"), "C notes");
        assert_eq!(heading_text("#  "), "");
    }

    #[test]
    fn fences() {
        assert!(is_fence("```"));
        assert!(is_fence("```rust"));
        assert!(!is_fence("``"));
        assert!(!is_fence(" ```"));
    }

    #[test]
    fn truncate_counts_chars_not_bytes() {
        let mut s = String::from("héllo wörld");
        truncate_chars(&mut s, 7);
        assert_eq!(s, "héllo w");

        let mut short = String::from("abc");
        truncate_chars(&mut short, 10);
        assert_eq!(short, "abc");
    }
}
