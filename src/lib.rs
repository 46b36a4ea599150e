//! # mdpdf
//!
//! Minimal Markdown to PDF converter for Rust.
//!
//! This library lays Markdown text out onto fixed-size pages and writes
//! the result as a PDF 1.4 file using its own object, xref and trailer
//! serializer. No PDF library is involved.
//!
//! ## Quick Start
//!
//! ```no_run
//! use mdpdf::convert_file;
//!
//! fn main() -> mdpdf::Result<()> {
//!     let report = convert_file("README.md", "README.pdf")?;
//!     println!("Wrote {} ({} bytes)", report.output.display(), report.bytes);
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Heading and list rewriting**: `#` headings become uppercase titles
//!   with an underline, `- ` items get a bullet glyph
//! - **Word wrapping**: lines wrap at 95 characters without splitting words
//! - **Pagination**: 51 lines per US Letter page with a `Page n of m` footer
//! - **Self-contained output**: Helvetica from the standard 14 fonts,
//!   uncompressed content streams, classic cross-reference table

pub mod convert;
pub mod error;
pub mod layout;
pub mod options;
pub mod pdf;

// Re-export commonly used types
pub use convert::{render, ConvertReport, RenderedPdf};
pub use error::{Error, Result};
pub use layout::{paginate, reformat, Page};
pub use options::{ConvertOptions, PageGeometry, DEFAULT_WRAP_WIDTH};
pub use pdf::PdfBuilder;

use std::path::Path;

/// Convert Markdown text to PDF bytes with the default layout.
///
/// # Example
///
/// ```
/// let pdf = mdpdf::markdown_to_pdf("# Hello\n\n- world\n");
/// assert!(pdf.starts_with(b"%PDF-1.4"));
/// ```
pub fn markdown_to_pdf(markdown: &str) -> Vec<u8> {
    convert::markdown_to_pdf(markdown, &ConvertOptions::default())
}

/// Convert a Markdown file to a PDF file with the default layout.
///
/// # Arguments
///
/// * `input` - Path to the UTF-8 Markdown source
/// * `output` - Path of the PDF to write; parent directories are created
///
/// # Returns
///
/// A `Result` containing a [`ConvertReport`] or an error. No output is
/// produced when the input cannot be read.
pub fn convert_file<P: AsRef<Path>, Q: AsRef<Path>>(input: P, output: Q) -> Result<ConvertReport> {
    convert::convert_file(input, output, &ConvertOptions::default())
}

/// Convert a Markdown file to a PDF file with custom options.
pub fn convert_file_with_options<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
    options: &ConvertOptions,
) -> Result<ConvertReport> {
    convert::convert_file(input, output, options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markdown_to_pdf_header_and_trailer() {
        let pdf = markdown_to_pdf("hello");
        assert!(pdf.starts_with(pdf::HEADER));
        assert!(pdf.ends_with(b"%%EOF\n"));
    }

    #[test]
    fn test_markdown_to_pdf_is_deterministic() {
        let source = "# Notes\n- one\n- two\n";
        assert_eq!(markdown_to_pdf(source), markdown_to_pdf(source));
    }

    #[test]
    fn test_convert_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("README.md");
        let output = dir.path().join("out/readme.pdf");
        std::fs::write(&input, "# Readme\n\nSome text.\n").unwrap();

        let report = convert_file(&input, &output).unwrap();
        let written = std::fs::read(&output).unwrap();

        assert_eq!(report.output, output);
        assert_eq!(report.bytes, written.len());
        assert_eq!(report.pages, 1);
        assert_eq!(written, markdown_to_pdf("# Readme\n\nSome text.\n"));
    }

    #[test]
    fn test_convert_file_with_options_geometry() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.md");
        let output = dir.path().join("in.pdf");
        let source: String = (0..10).map(|i| format!("line {}\n", i)).collect();
        std::fs::write(&input, source).unwrap();

        let geometry = PageGeometry {
            height: 64 + 56 + 14 * 4,
            ..PageGeometry::letter()
        };
        let options = ConvertOptions::new().with_geometry(geometry);
        let report = convert_file_with_options(&input, &output, &options).unwrap();

        assert_eq!(report.lines, 10);
        assert_eq!(report.pages, 3);
    }
}
