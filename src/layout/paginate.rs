//! Splitting display lines into fixed-size pages.

/// A contiguous run of display lines rendered on one page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page<'a> {
    /// Page number (1-indexed)
    pub number: usize,

    /// Lines on this page, in reading order
    pub lines: &'a [String],
}

impl<'a> Page<'a> {
    /// Footer text for this page in a document of `total` pages.
    pub fn footer(&self, total: usize) -> String {
        format!("Page {} of {}", self.number, total)
    }

    /// Number of lines on the page.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if the page has no lines. Pages produced by [`paginate`]
    /// never are.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Group lines into pages of at most `max_lines` lines each.
///
/// Only the last page may be shorter. No lines means no pages.
pub fn paginate(lines: &[String], max_lines: usize) -> Vec<Page<'_>> {
    let pages: Vec<Page<'_>> = lines
        .chunks(max_lines.max(1))
        .enumerate()
        .map(|(idx, chunk)| Page {
            number: idx + 1,
            lines: chunk,
        })
        .collect();

    log::debug!(
        "paginated {} lines into {} pages of up to {} lines",
        lines.len(),
        pages.len(),
        max_lines
    );
    pages
}
