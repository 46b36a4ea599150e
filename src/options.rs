//! Page geometry and conversion options.
//!
//! All values default to a fixed US Letter layout. The defaults are what
//! the command line tool always uses; the builder methods exist for
//! library callers and tests.

/// Default word-wrap width in characters.
pub const DEFAULT_WRAP_WIDTH: usize = 95;

/// Fixed page layout, in PDF units (1/72 inch).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageGeometry {
    /// Page width
    pub width: u32,

    /// Page height
    pub height: u32,

    /// Left margin, also the x position of every text line
    pub margin_x: u32,

    /// Distance from the top edge to the first baseline
    pub margin_top: u32,

    /// Space reserved at the bottom of the page
    pub margin_bottom: u32,

    /// Baseline-to-baseline distance of body text
    pub line_height: u32,

    /// Body font size in points
    pub body_font_size: u32,

    /// Footer font size in points
    pub footer_font_size: u32,

    /// Baseline of the page footer
    pub footer_y: u32,
}

impl PageGeometry {
    /// US Letter (8.5 x 11 inches) with the standard margins.
    pub const fn letter() -> Self {
        Self {
            width: 612,
            height: 792,
            margin_x: 50,
            margin_top: 64,
            margin_bottom: 56,
            line_height: 14,
            body_font_size: 10,
            footer_font_size: 9,
            footer_y: 30,
        }
    }

    /// Number of body lines that fit between the top and bottom margins.
    ///
    /// Never returns zero, so pagination always makes progress.
    pub fn max_lines(&self) -> usize {
        let usable = self
            .height
            .saturating_sub(self.margin_top)
            .saturating_sub(self.margin_bottom);
        let lines = usable / self.line_height.max(1);
        (lines as usize).max(1)
    }

    /// Position of the first baseline on a page.
    pub fn text_origin(&self) -> (u32, u32) {
        (self.margin_x, self.height.saturating_sub(self.margin_top))
    }
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self::letter()
    }
}

/// Options for a Markdown to PDF conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Page layout
    pub geometry: PageGeometry,

    /// Maximum display line width in characters
    pub wrap_width: usize,
}

impl ConvertOptions {
    /// Create new conversion options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page geometry.
    pub fn with_geometry(mut self, geometry: PageGeometry) -> Self {
        self.geometry = geometry;
        self
    }

    /// Set the wrap width. Zero is clamped to one.
    pub fn with_wrap_width(mut self, width: usize) -> Self {
        self.wrap_width = width.max(1);
        self
    }
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            geometry: PageGeometry::letter(),
            wrap_width: DEFAULT_WRAP_WIDTH,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_max_lines() {
        assert_eq!(PageGeometry::letter().max_lines(), 51);
    }

    #[test]
    fn test_text_origin() {
        assert_eq!(PageGeometry::default().text_origin(), (50, 728));
    }

    #[test]
    fn test_max_lines_never_zero() {
        let geometry = PageGeometry {
            height: 100,
            margin_top: 80,
            margin_bottom: 80,
            ..PageGeometry::letter()
        };
        assert_eq!(geometry.max_lines(), 1);
    }

    #[test]
    fn test_convert_options_builder() {
        let options = ConvertOptions::new().with_wrap_width(0);
        assert_eq!(options.wrap_width, 1);
        assert_eq!(options.geometry, PageGeometry::letter());

        let options = ConvertOptions::default();
        assert_eq!(options.wrap_width, DEFAULT_WRAP_WIDTH);
    }
}
