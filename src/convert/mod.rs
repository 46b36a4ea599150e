//! Conversion pipeline: Markdown text in, PDF bytes out.
//!
//! # Example
//!
//! ```no_run
//! use mdpdf::convert::{convert_file, ConvertOptions};
//!
//! fn main() -> mdpdf::Result<()> {
//!     let report = convert_file("README.md", "out/readme.pdf", &ConvertOptions::default())?;
//!     println!("{} pages, {} bytes", report.pages, report.bytes);
//!     Ok(())
//! }
//! ```

mod output;

pub use crate::options::{ConvertOptions, PageGeometry};
pub use output::write_atomic;

use crate::error::{Error, Result};
use crate::layout::{paginate, reformat};
use crate::pdf::PdfBuilder;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// A rendered document together with layout statistics.
#[derive(Debug, Clone)]
pub struct RenderedPdf {
    /// Complete PDF file contents
    pub bytes: Vec<u8>,

    /// Number of pages in the document
    pub pages: usize,

    /// Number of display lines laid out
    pub lines: usize,
}

/// Summary of a file conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertReport {
    /// Path the document was written to
    pub output: PathBuf,

    /// Size of the written file in bytes
    pub bytes: usize,

    /// Number of pages in the document
    pub pages: usize,

    /// Number of display lines laid out
    pub lines: usize,
}

/// Render Markdown source into a PDF document.
pub fn render(markdown: &str, options: &ConvertOptions) -> RenderedPdf {
    let lines = reformat(markdown, options.wrap_width);
    let pages = paginate(&lines, options.geometry.max_lines());
    let page_count = pages.len();
    let bytes = PdfBuilder::new(options.geometry).build(&pages);

    RenderedPdf {
        bytes,
        pages: page_count,
        lines: lines.len(),
    }
}

/// Render Markdown source into PDF bytes.
pub fn markdown_to_pdf(markdown: &str, options: &ConvertOptions) -> Vec<u8> {
    render(markdown, options).bytes
}

/// Read a UTF-8 source file in full.
pub fn read_source(path: &Path) -> Result<String> {
    let data = fs::read(path).map_err(|e| Error::read(path, e))?;
    String::from_utf8(data)
        .map_err(|e| Error::read(path, io::Error::new(io::ErrorKind::InvalidData, e)))
}

/// Convert a Markdown file into a PDF file.
///
/// Nothing is written if the input cannot be read. The output is replaced
/// atomically.
pub fn convert_file<P, Q>(input: P, output: Q, options: &ConvertOptions) -> Result<ConvertReport>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let input = input.as_ref();
    let output = output.as_ref();

    let source = read_source(input)?;
    let rendered = render(&source, options);
    write_atomic(output, &rendered.bytes)?;

    log::info!(
        "wrote {} ({} pages, {} bytes)",
        output.display(),
        rendered.pages,
        rendered.bytes.len()
    );

    Ok(ConvertReport {
        output: output.to_path_buf(),
        bytes: rendered.bytes.len(),
        pages: rendered.pages,
        lines: rendered.lines,
    })
}
