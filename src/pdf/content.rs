//! Per-page content streams.

use super::encoding::literal_string;
use super::FONT_RESOURCE;
use crate::layout::Page;
use crate::options::PageGeometry;

/// Builder for the text instructions of one page.
///
/// Instructions are collected as separate operations and joined with
/// newlines when the stream is finished.
#[derive(Debug, Default, Clone)]
pub struct ContentStream {
    ops: Vec<Vec<u8>>,
}

impl ContentStream {
    /// Create an empty content stream.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the content stream for a page of a `total`-page document.
    pub fn for_page(page: &Page<'_>, total: usize, geometry: &PageGeometry) -> Self {
        let (x, y) = geometry.text_origin();
        let mut stream = Self::new();

        stream.op("BT");
        stream.op(format!("/{} {} Tf", FONT_RESOURCE, geometry.body_font_size));
        stream.op(format!("{} TL", geometry.line_height));
        stream.op(format!("{} {} Td", x, y));
        for (idx, line) in page.lines.iter().enumerate() {
            if idx > 0 {
                stream.op("T*");
            }
            stream.show(line);
        }
        stream.op("ET");

        let mut footer = format!(
            "BT /{} {} Tf {} {} Td ",
            FONT_RESOURCE, geometry.footer_font_size, geometry.margin_x, geometry.footer_y
        )
        .into_bytes();
        footer.extend(literal_string(&page.footer(total)));
        footer.extend_from_slice(b" Tj ET");
        stream.ops.push(footer);

        stream
    }

    /// Append a raw operation.
    pub fn op(&mut self, op: impl Into<String>) {
        self.ops.push(op.into().into_bytes());
    }

    /// Append a `Tj` operation showing `text`.
    pub fn show(&mut self, text: &str) {
        let mut op = literal_string(text);
        op.extend_from_slice(b" Tj");
        self.ops.push(op);
    }

    /// Stream body: all operations joined by newlines.
    pub fn body(&self) -> Vec<u8> {
        self.ops.join(&b'\n')
    }

    /// Complete stream object with an exact `/Length`.
    pub fn into_object(self) -> Vec<u8> {
        let body = self.body();
        let mut object = format!("<< /Length {} >>\nstream\n", body.len()).into_bytes();
        object.extend(body);
        object.extend_from_slice(b"\nendstream");
        object
    }
}
