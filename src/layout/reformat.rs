//! Line-level Markdown rewriting.
//!
//! Only a handful of block markers are recognised. Headings become
//! uppercase titles with a dash underline, `- ` bullets get a bullet glyph,
//! and code fence lines turn into blank lines. Everything else, including
//! ordered list items, is passed through as written.

use super::wrap::wrap_line;

/// Bullet glyph substituted for a leading `- `.
pub const BULLET: char = '\u{2022}';

/// Longest dash underline drawn beneath a heading.
pub const MAX_RULE_WIDTH: usize = 90;

/// Classification of a single source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// `#`-prefixed heading, with markers and surrounding whitespace removed
    Heading(&'a str),
    /// `- ` bullet item, holding the text after the marker
    Bullet(&'a str),
    /// `1. ` ordered item, kept verbatim
    Ordered,
    /// Code fence delimiter
    Fence,
    /// Any other line
    Plain,
}

impl<'a> LineKind<'a> {
    /// Classify a source line by its leading marker.
    pub fn classify(line: &'a str) -> Self {
        if line.starts_with('#') {
            LineKind::Heading(line.trim_start_matches('#').trim())
        } else if let Some(rest) = line.strip_prefix("- ") {
            LineKind::Bullet(rest)
        } else if line.starts_with("1. ") {
            LineKind::Ordered
        } else if line.starts_with("```") {
            LineKind::Fence
        } else {
            LineKind::Plain
        }
    }
}

/// Rewrite one source line into zero or more unwrapped lines.
pub fn rewrite_line(line: &str) -> Vec<String> {
    match LineKind::classify(line) {
        LineKind::Heading(title) => {
            let rule = "-".repeat(title.chars().count().min(MAX_RULE_WIDTH));
            vec![String::new(), title.to_uppercase(), rule, String::new()]
        }
        LineKind::Bullet(rest) => vec![format!("{} {}", BULLET, rest)],
        LineKind::Fence => vec![String::new()],
        LineKind::Ordered | LineKind::Plain => vec![line.to_string()],
    }
}

/// Characters that end a logical line. `\r\n` counts as one break.
fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r'
            | '\x0b'
            | '\x0c'
            | '\x1c'
            | '\x1d'
            | '\x1e'
            | '\u{85}'
            | '\u{2028}'
            | '\u{2029}'
    )
}

/// Split source text into logical lines.
///
/// A break at the very end does not produce a trailing empty line.
pub fn split_lines(source: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = source.char_indices().peekable();

    while let Some((idx, c)) = chars.next() {
        if !is_line_break(c) {
            continue;
        }
        lines.push(&source[start..idx]);
        start = idx + c.len_utf8();
        if c == '\r' {
            if let Some(&(next, '\n')) = chars.peek() {
                chars.next();
                start = next + 1;
            }
        }
    }

    if start < source.len() {
        lines.push(&source[start..]);
    }

    lines
}

/// Reformat Markdown source into wrapped display lines.
///
/// The transform is order preserving and looks at one line at a time.
pub fn reformat(source: &str, wrap_width: usize) -> Vec<String> {
    let mut display = Vec::new();

    for line in split_lines(source) {
        for rewritten in rewrite_line(line) {
            display.extend(wrap_line(&rewritten, wrap_width));
        }
    }

    log::debug!("reformatted source into {} display lines", display.len());
    display
}
