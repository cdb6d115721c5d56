//! PDF file writer
//!
//! Handles object numbering, the cross-reference table, stream
//! compression and the header/body/xref/trailer file structure.
//! [`write_document`] assembles a finished single-page document from a
//! rendered [`PageSurface`].

use std::io::Write;

use flate2::write::ZlibEncoder;
use flate2::Compression;

use crate::document::{create_catalog, create_pages, DocumentInfo, PdfPage};
use crate::error::Result;
use crate::fonts::{create_standard_font_dict, FontManager, StandardFont};
use crate::objects::{PdfDictionary, PdfObject, PdfSerializer, PdfStream};
use crate::page::PageSurface;

/// An object written to the file, with the byte offset the xref table
/// needs to point at.
#[derive(Debug)]
struct ObjectEntry {
    obj_num: u32,
    gen_num: u16,
    offset: u64,
}

/// Low-level PDF file writer.
pub struct PdfWriter<W: Write> {
    writer: W,
    /// Current byte position.
    position: u64,
    objects: Vec<ObjectEntry>,
    next_obj_num: u32,
    /// Whether to compress streams.
    compress: bool,
}

impl<W: Write> PdfWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            position: 0,
            objects: Vec::new(),
            next_obj_num: 1,
            compress: true,
        }
    }

    pub fn set_compression(&mut self, compress: bool) {
        self.compress = compress;
    }

    fn write_bytes(&mut self, data: &[u8]) -> Result<()> {
        self.writer.write_all(data)?;
        self.position += data.len() as u64;
        Ok(())
    }

    fn write_str(&mut self, s: &str) -> Result<()> {
        self.write_bytes(s.as_bytes())
    }

    /// Allocate the next object number.
    pub fn allocate_object(&mut self) -> u32 {
        let num = self.next_obj_num;
        self.next_obj_num += 1;
        num
    }

    /// Write the PDF header and the binary marker comment.
    pub fn write_header(&mut self) -> Result<()> {
        self.write_str("%PDF-1.4\n")?;
        self.write_bytes(&[b'%', 0xE2, 0xE3, 0xCF, 0xD3, b'\n'])?;
        Ok(())
    }

    /// Write an indirect object and record its offset.
    pub fn write_object(&mut self, obj_num: u32, object: PdfObject) -> Result<()> {
        let offset = self.position;

        self.write_str(&format!("{} 0 obj\n", obj_num))?;

        let mut serializer = PdfSerializer::new(Vec::new());
        serializer.write_object(&object)?;
        self.write_bytes(&serializer.into_inner())?;

        self.write_str("\nendobj\n")?;

        self.objects.push(ObjectEntry {
            obj_num,
            gen_num: 0,
            offset,
        });

        Ok(())
    }

    /// Write a stream object, compressing its data first when
    /// compression is enabled.
    pub fn write_stream_object(&mut self, obj_num: u32, mut stream: PdfStream) -> Result<()> {
        if self.compress && !stream.compressed {
            stream = compress_stream(stream)?;
        }
        stream
            .dict
            .insert("Length", PdfObject::Integer(stream.data.len() as i64));

        let offset = self.position;

        self.write_str(&format!("{} 0 obj\n", obj_num))?;

        let mut serializer = PdfSerializer::new(Vec::new());
        serializer.write_object(&PdfObject::Stream(stream))?;
        self.write_bytes(&serializer.into_inner())?;

        self.write_str("\nendobj\n")?;

        self.objects.push(ObjectEntry {
            obj_num,
            gen_num: 0,
            offset,
        });

        Ok(())
    }

    /// Write the cross-reference table and trailer.
    pub fn write_xref_and_trailer(&mut self, catalog_ref: u32, info_ref: Option<u32>) -> Result<()> {
        let xref_offset = self.position;

        self.objects.sort_by_key(|e| e.obj_num);
        let entries: Vec<_> = self
            .objects
            .iter()
            .map(|e| (e.obj_num, e.offset, e.gen_num))
            .collect();
        let next_obj_num = self.next_obj_num;

        self.write_str("xref\n")?;
        self.write_str(&format!("0 {}\n", next_obj_num))?;

        // Object 0 is the head of the free list.
        self.write_str("0000000000 65535 f \n")?;

        let mut expected_num = 1u32;
        for (obj_num, offset, gen_num) in entries {
            // Objects that were allocated but never written become
            // free entries so the table stays dense.
            while expected_num < obj_num {
                self.write_str("0000000000 65535 f \n")?;
                expected_num += 1;
            }

            self.write_str(&format!("{:010} {:05} n \n", offset, gen_num))?;
            expected_num = obj_num + 1;
        }

        self.write_str("trailer\n")?;

        let mut trailer = PdfDictionary::new();
        trailer.insert("Size", PdfObject::Integer(next_obj_num as i64));
        trailer.insert("Root", PdfObject::Reference(catalog_ref));
        if let Some(info) = info_ref {
            trailer.insert("Info", PdfObject::Reference(info));
        }

        let mut serializer = PdfSerializer::new(Vec::new());
        serializer.write_object(&PdfObject::Dictionary(trailer))?;
        self.write_bytes(&serializer.into_inner())?;
        self.write_str("\n")?;

        self.write_str("startxref\n")?;
        self.write_str(&format!("{}\n", xref_offset))?;
        self.write_str("%%EOF\n")?;

        Ok(())
    }

    /// Flush and return the inner writer.
    pub fn finish(mut self) -> Result<W> {
        self.writer.flush()?;
        Ok(self.writer)
    }
}

fn compress_stream(mut stream: PdfStream) -> Result<PdfStream> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(&stream.data)?;
    stream.data = encoder.finish()?;
    stream.compressed = true;
    stream.dict.insert("Filter", PdfObject::name("FlateDecode"));
    Ok(stream)
}

/// Write a rendered page as a complete PDF document.
pub fn write_document<W: Write>(
    surface: &PageSurface,
    info: &DocumentInfo,
    writer: W,
) -> Result<()> {
    let mut pdf = PdfWriter::new(writer);
    pdf.write_header()?;

    let catalog_ref = pdf.allocate_object();
    let pages_ref = pdf.allocate_object();
    let info_ref = pdf.allocate_object();

    let mut fonts = FontManager::new();
    let content = surface.render(&mut fonts);

    let font_refs: Vec<(String, StandardFont, u32)> = fonts
        .fonts()
        .map(|font| (font.name.clone(), font.font, pdf.allocate_object()))
        .collect();
    let content_ref = pdf.allocate_object();
    let page_ref = pdf.allocate_object();

    pdf.write_object(
        catalog_ref,
        PdfObject::Dictionary(create_catalog(pages_ref)),
    )?;
    pdf.write_object(
        pages_ref,
        PdfObject::Dictionary(create_pages(&[page_ref])),
    )?;
    pdf.write_object(info_ref, PdfObject::Dictionary(info.to_dictionary()))?;

    for (_, font, font_ref) in &font_refs {
        let font_dict = create_standard_font_dict(*font);
        pdf.write_object(*font_ref, PdfObject::Dictionary(font_dict))?;
    }

    pdf.write_stream_object(content_ref, PdfStream::new(content.into_bytes()))?;

    let page = PdfPage {
        media_box: surface.media_box(),
        content_ref,
        fonts: font_refs
            .into_iter()
            .map(|(name, _, font_ref)| (name, font_ref))
            .collect(),
    };
    pdf.write_object(page_ref, PdfObject::Dictionary(page.to_dictionary(pages_ref)))?;

    pdf.write_xref_and_trailer(catalog_ref, Some(info_ref))?;
    pdf.finish()?;

    Ok(())
}

/// Write a rendered page into an in-memory buffer.
pub fn document_to_bytes(surface: &PageSurface, info: &DocumentInfo) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    write_document(surface, info, &mut buffer)?;
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ContentStream;
    use sheet_layout::{DrawSurface, Point, Rect, SheetStyle, StyleRegistry, TextAlign};

    fn sheet_surface() -> PageSurface {
        let mut surface = PageSurface::a4();
        let registry = StyleRegistry::new();
        surface.draw_text(
            "FF-07: EMBLEM",
            registry.get(SheetStyle::Heading2),
            Rect::new(20.0, 20.0, 555.0, 20.0),
            TextAlign::Center,
        );
        surface.draw_line(Point::new(20.0, 50.0), Point::new(575.0, 50.0));
        surface
    }

    #[test]
    fn test_writer_object_framing() {
        let mut buffer = Vec::new();
        {
            let mut writer = PdfWriter::new(&mut buffer);
            let obj_num = writer.allocate_object();
            writer.write_object(obj_num, PdfObject::Integer(42)).unwrap();
            writer.finish().unwrap();
        }

        let output = String::from_utf8_lossy(&buffer);
        assert!(output.contains("1 0 obj"));
        assert!(output.contains("42"));
        assert!(output.contains("endobj"));
    }

    #[test]
    fn test_document_structure() {
        let bytes = document_to_bytes(&sheet_surface(), &DocumentInfo::new()).unwrap();

        let text = String::from_utf8_lossy(&bytes);
        assert!(text.starts_with("%PDF-1.4"));
        assert!(text.contains("/Type /Catalog"));
        assert!(text.contains("/Type /Pages"));
        assert!(text.contains("/Type /Page"));
        assert!(text.contains("/Count 1"));
        assert!(text.contains("xref"));
        assert!(text.contains("trailer"));
        assert!(text.ends_with("%%EOF\n"));
    }

    #[test]
    fn test_trailer_references_catalog_and_info() {
        let mut info = DocumentInfo::new();
        info.title = Some("FF-07: EMBLEM".to_string());
        let bytes = document_to_bytes(&sheet_surface(), &info).unwrap();

        let text = String::from_utf8_lossy(&bytes);
        assert!(text.contains("/Root 1 0 R"));
        assert!(text.contains("/Info 3 0 R"));
        assert!(text.contains("(FF-07: EMBLEM)"));
    }

    #[test]
    fn test_startxref_points_at_the_xref_table() {
        let bytes = document_to_bytes(&sheet_surface(), &DocumentInfo::new()).unwrap();

        let text = String::from_utf8_lossy(&bytes);
        let start = text.rfind("startxref\n").unwrap() + "startxref\n".len();
        let end = start + text[start..].find('\n').unwrap();
        let offset: usize = text[start..end].parse().unwrap();
        assert_eq!(&bytes[offset..offset + 4], b"xref");
    }

    #[test]
    fn test_compression_replaces_raw_operators() {
        let mut content = ContentStream::new();
        content.begin_text();
        content.set_font("F0", 8.0);
        content.show_text("Hello");
        content.end_text();
        let data = content.into_bytes();

        let mut plain = Vec::new();
        {
            let mut writer = PdfWriter::new(&mut plain);
            writer.set_compression(false);
            let obj = writer.allocate_object();
            writer
                .write_stream_object(obj, PdfStream::new(data.clone()))
                .unwrap();
            writer.finish().unwrap();
        }
        let plain_text = String::from_utf8_lossy(&plain);
        assert!(plain_text.contains("(Hello) Tj"));
        assert!(!plain_text.contains("FlateDecode"));

        let mut packed = Vec::new();
        {
            let mut writer = PdfWriter::new(&mut packed);
            let obj = writer.allocate_object();
            writer.write_stream_object(obj, PdfStream::new(data)).unwrap();
            writer.finish().unwrap();
        }
        let packed_text = String::from_utf8_lossy(&packed);
        assert!(packed_text.contains("FlateDecode"));
        assert!(!packed_text.contains("(Hello) Tj"));
    }

    #[test]
    fn test_fonts_used_by_the_page_are_registered() {
        let bytes = document_to_bytes(&sheet_surface(), &DocumentInfo::new()).unwrap();

        let text = String::from_utf8_lossy(&bytes);
        assert!(text.contains("/BaseFont /Helvetica-Bold"));
        assert!(text.contains("/F0 "));
    }
}
