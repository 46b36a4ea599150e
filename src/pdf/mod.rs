//! Minimal PDF emitter.
//!
//! Produces a PDF 1.4 file from paginated display lines without any PDF
//! library. The document always has the same shape:
//!
//! ```text
//! 1             Font (Helvetica)
//! 2 ..= n+1     one content stream per page
//! n+2           Pages tree
//! n+3 ..= 2n+2  one Page per content stream
//! 2n+3          Catalog
//! ```
//!
//! The Pages tree and its Page children reference each other. The tree is
//! allocated first as an empty placeholder so that every Page can name its
//! parent, then its body is overwritten once all Page ids are known.

mod content;
pub mod encoding;
mod object;
mod writer;

pub use content::ContentStream;
pub use object::{ObjectId, ObjectTable};
pub use writer::{serialize, HEADER};

use crate::layout::Page;
use crate::options::PageGeometry;

/// Resource name under which the body font is registered on every page.
pub const FONT_RESOURCE: &str = "F1";

const FONT_OBJECT: &str =
    "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica /Encoding /WinAnsiEncoding >>";

/// Builds the object table for a paginated document.
#[derive(Debug, Clone)]
pub struct PdfBuilder {
    geometry: PageGeometry,
    objects: ObjectTable,
}

impl PdfBuilder {
    /// Create a builder for the given page geometry.
    pub fn new(geometry: PageGeometry) -> Self {
        Self {
            geometry,
            objects: ObjectTable::new(),
        }
    }

    /// Build and serialize a document containing `pages`.
    ///
    /// Zero pages still yields a well-formed file with an empty Pages tree.
    pub fn build(mut self, pages: &[Page<'_>]) -> Vec<u8> {
        let root = self.add_objects(pages);
        log::debug!(
            "serializing {} objects for {} pages",
            self.objects.len(),
            pages.len()
        );
        serialize(&self.objects, root)
    }

    /// Populate the object table and return the catalog id.
    fn add_objects(&mut self, pages: &[Page<'_>]) -> ObjectId {
        let geometry = self.geometry;
        let font = self.objects.add(FONT_OBJECT);

        let total = pages.len();
        let contents: Vec<ObjectId> = pages
            .iter()
            .map(|page| {
                let stream = ContentStream::for_page(page, total, &geometry);
                self.objects.add(stream.into_object())
            })
            .collect();

        let tree = self.objects.add(pages_tree(&[]));

        let kids: Vec<ObjectId> = contents
            .iter()
            .map(|&content| self.objects.add(page_object(&geometry, tree, font, content)))
            .collect();

        self.objects.replace(tree, pages_tree(&kids));

        self.objects
            .add(format!("<< /Type /Catalog /Pages {} >>", tree))
    }

    /// Object table built so far.
    pub fn objects(&self) -> &ObjectTable {
        &self.objects
    }
}

impl Default for PdfBuilder {
    fn default() -> Self {
        Self::new(PageGeometry::default())
    }
}

fn page_object(
    geometry: &PageGeometry,
    parent: ObjectId,
    font: ObjectId,
    content: ObjectId,
) -> String {
    format!(
        "<< /Type /Page /Parent {} /MediaBox [0 0 {} {}] \
         /Resources << /Font << /{} {} >> >> /Contents {} >>",
        parent, geometry.width, geometry.height, FONT_RESOURCE, font, content
    )
}

fn pages_tree(kids: &[ObjectId]) -> String {
    let refs: Vec<String> = kids.iter().map(ObjectId::to_string).collect();
    format!(
        "<< /Type /Pages /Kids [{}] /Count {} >>",
        refs.join(" "),
        kids.len()
    )
}
