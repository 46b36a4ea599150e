//! File-level serialization: header, object bodies, xref and trailer.

use super::object::{ObjectId, ObjectTable};

/// File header. The second line is a binary comment marking the file as
/// containing 8-bit data.
pub const HEADER: &[u8] = b"%PDF-1.4\n%\xE2\xE3\xCF\xD3\n";

/// Serialize a complete document whose catalog is `root`.
pub fn serialize(objects: &ObjectTable, root: ObjectId) -> Vec<u8> {
    let mut pdf = Vec::new();
    pdf.extend_from_slice(HEADER);

    let mut offsets = Vec::with_capacity(objects.len());
    for (id, body) in objects.iter() {
        offsets.push(pdf.len());
        write_object(&mut pdf, id, body);
    }

    let xref_offset = pdf.len();
    write_xref(&mut pdf, &offsets);
    write_trailer(&mut pdf, objects.len(), root, xref_offset);

    pdf
}

fn write_object(pdf: &mut Vec<u8>, id: ObjectId, body: &[u8]) {
    pdf.extend_from_slice(format!("{} 0 obj\n", id.number()).as_bytes());
    pdf.extend_from_slice(body);
    pdf.extend_from_slice(b"\nendobj\n");
}

fn write_xref(pdf: &mut Vec<u8>, offsets: &[usize]) {
    pdf.extend_from_slice(format!("xref\n0 {}\n", offsets.len() + 1).as_bytes());
    pdf.extend_from_slice(b"0000000000 65535 f \n");
    for offset in offsets {
        pdf.extend_from_slice(format!("{:010} 00000 n \n", offset).as_bytes());
    }
}

fn write_trailer(pdf: &mut Vec<u8>, object_count: usize, root: ObjectId, xref_offset: usize) {
    let trailer = format!(
        "trailer\n<< /Size {} /Root {} >>\nstartxref\n{}\n%%EOF\n",
        object_count + 1,
        root,
        xref_offset
    );
    pdf.extend_from_slice(trailer.as_bytes());
}
