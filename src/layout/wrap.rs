//! Greedy word wrapping to a fixed character budget.
//!
//! Lines break only at spaces. Words are never split, hyphens are not
//! break opportunities, and a single word wider than the budget is put
//! on a line of its own.

const TAB_SIZE: usize = 8;

/// Wrap one logical line into display lines no wider than `width`.
///
/// Blank input (empty or whitespace only) produces exactly one empty
/// line. Widths are counted in Unicode scalar values.
pub fn wrap_line(line: &str, width: usize) -> Vec<String> {
    if line.trim().is_empty() {
        return vec![String::new()];
    }

    let width = width.max(1);
    let text = normalize(line);
    let chunks = split_chunks(&text);

    let mut lines: Vec<String> = Vec::new();
    let mut i = 0;

    while i < chunks.len() {
        // Whitespace at a break point is dropped, except at the very start.
        if !lines.is_empty() && is_space(chunks[i]) {
            i += 1;
            continue;
        }

        let mut current: Vec<&str> = Vec::new();
        let mut current_len = 0;

        while i < chunks.len() {
            let len = char_len(chunks[i]);
            if current_len + len > width {
                break;
            }
            current.push(chunks[i]);
            current_len += len;
            i += 1;
        }

        if current.is_empty() && i < chunks.len() {
            // Overlong word: keep it whole on its own line.
            current.push(chunks[i]);
            i += 1;
        }

        if current.last().is_some_and(|chunk| is_space(chunk)) {
            current.pop();
        }

        if !current.is_empty() {
            lines.push(current.concat());
        }
    }

    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
}

/// Expand tabs and replace every other whitespace or control character
/// with a plain space.
fn normalize(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut column = 0;

    for c in line.chars() {
        if c == '\t' {
            let pad = TAB_SIZE - column % TAB_SIZE;
            out.extend(std::iter::repeat(' ').take(pad));
            column += pad;
        } else if c.is_control() {
            out.push(' ');
            column += 1;
        } else {
            out.push(c);
            column += 1;
        }
    }

    out
}

/// Split into alternating runs of spaces and non-spaces.
fn split_chunks(text: &str) -> Vec<&str> {
    let mut chunks = Vec::new();
    let mut start = 0;
    let mut in_space: Option<bool> = None;

    for (idx, c) in text.char_indices() {
        let space = c == ' ';
        match in_space {
            Some(prev) if prev != space => {
                chunks.push(&text[start..idx]);
                start = idx;
            }
            _ => {}
        }
        in_space = Some(space);
    }

    if start < text.len() {
        chunks.push(&text[start..]);
    }

    chunks
}

fn is_space(chunk: &str) -> bool {
    chunk.bytes().all(|b| b == b' ')
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_line_unchanged() {
        assert_eq!(wrap_line("hello world", 95), vec!["hello world"]);
    }

    #[test]
    fn test_blank_lines() {
        assert_eq!(wrap_line("", 95), vec![""]);
        assert_eq!(wrap_line("   \t ", 95), vec![""]);
    }

    #[test]
    fn test_wraps_at_spaces() {
        assert_eq!(
            wrap_line("aaa bbb ccc ddd", 7),
            vec!["aaa bbb", "ccc ddd"]
        );
    }

    #[test]
    fn test_does_not_break_on_hyphens() {
        assert_eq!(
            wrap_line("one well-known-term here", 10),
            vec!["one", "well-known-term", "here"]
        );
    }

    #[test]
    fn test_long_word_kept_whole() {
        let word = "x".repeat(120);
        let line = format!("a {} b", word);
        assert_eq!(wrap_line(&line, 95), vec!["a".to_string(), word, "b".to_string()]);
    }

    #[test]
    fn test_leading_indent_kept_on_first_line() {
        assert_eq!(wrap_line("    code here", 95), vec!["    code here"]);
        assert_eq!(wrap_line("  aaa bbb", 5), vec!["  aaa", "bbb"]);
    }

    #[test]
    fn test_trailing_whitespace_dropped() {
        assert_eq!(wrap_line("text   ", 95), vec!["text"]);
    }

    #[test]
    fn test_internal_spacing_preserved() {
        assert_eq!(wrap_line("a   b", 95), vec!["a   b"]);
    }

    #[test]
    fn test_tabs_expanded() {
        assert_eq!(wrap_line("a\tb", 95), vec!["a       b"]);
        assert_eq!(wrap_line("\tx", 95), vec!["        x"]);
    }

    #[test]
    fn test_control_characters_replaced() {
        let lines = wrap_line("bell\u{7}here", 95);
        assert_eq!(lines, vec!["bell here"]);
        assert!(lines.iter().all(|l| !l.chars().any(char::is_control)));
    }

    #[test]
    fn test_width_counts_characters_not_bytes() {
        let line = "é".repeat(10);
        assert_eq!(wrap_line(&line, 10), vec![line.clone()]);
    }

    #[test]
    fn test_every_line_within_width() {
        let text = "Lorem ipsum dolor sit amet, consectetur adipiscing elit, sed do eiusmod \
                    tempor incididunt ut labore et dolore magna aliqua. Ut enim ad minim veniam, \
                    quis nostrud exercitation ullamco laboris nisi ut aliquip ex ea commodo.";
        let lines = wrap_line(text, 40);
        assert!(lines.len() > 1);
        assert!(lines.iter().all(|l| l.chars().count() <= 40));
        assert_eq!(lines.join(" "), text.split_whitespace().collect::<Vec<_>>().join(" "));
    }
}
