//! Document structure
//!
//! The catalog, page tree, page, and info dictionaries that wrap the
//! rendered content stream into a complete document.

use crate::objects::{PdfDictionary, PdfObject};

/// Page dimensions with the origin at the lower-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MediaBox {
    pub width: f64,
    pub height: f64,
}

impl MediaBox {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// A4 portrait in points.
    pub fn a4() -> Self {
        Self::new(595.0, 842.0)
    }

    pub fn to_array(&self) -> PdfObject {
        PdfObject::Array(vec![
            PdfObject::Real(0.0),
            PdfObject::Real(0.0),
            PdfObject::Real(self.width),
            PdfObject::Real(self.height),
        ])
    }
}

impl Default for MediaBox {
    fn default() -> Self {
        Self::a4()
    }
}

/// Document metadata for the Info dictionary.
#[derive(Debug, Clone, Default)]
pub struct DocumentInfo {
    pub title: Option<String>,
    pub creator: Option<String>,
    pub producer: Option<String>,
    /// PDF date string, e.g. "D:20260822120000".
    pub creation_date: Option<String>,
}

impl DocumentInfo {
    pub fn new() -> Self {
        Self {
            creator: Some("Shipsheet".to_string()),
            producer: Some("Shipsheet PDF Export".to_string()),
            ..Default::default()
        }
    }

    pub fn to_dictionary(&self) -> PdfDictionary {
        let mut dict = PdfDictionary::new();
        if let Some(title) = &self.title {
            dict.insert("Title", PdfObject::string(title));
        }
        if let Some(creator) = &self.creator {
            dict.insert("Creator", PdfObject::string(creator));
        }
        if let Some(producer) = &self.producer {
            dict.insert("Producer", PdfObject::string(producer));
        }
        if let Some(date) = &self.creation_date {
            dict.insert("CreationDate", PdfObject::string(date));
        }
        dict
    }
}

/// The single page of a sheet document.
#[derive(Debug, Clone)]
pub struct PdfPage {
    pub media_box: MediaBox,
    pub content_ref: u32,
    /// Font resources as (resource name, object number) pairs.
    pub fonts: Vec<(String, u32)>,
}

impl PdfPage {
    pub fn to_dictionary(&self, parent_ref: u32) -> PdfDictionary {
        let mut dict = PdfDictionary::new().with_type("Page");
        dict.insert("Parent", PdfObject::Reference(parent_ref));
        dict.insert("MediaBox", self.media_box.to_array());
        dict.insert("Contents", PdfObject::Reference(self.content_ref));
        dict.insert("Resources", PdfObject::Dictionary(self.build_resources()));
        dict
    }

    fn build_resources(&self) -> PdfDictionary {
        let mut resources = PdfDictionary::new();
        if !self.fonts.is_empty() {
            let mut font_dict = PdfDictionary::new();
            for (name, obj_ref) in &self.fonts {
                font_dict.insert(name.clone(), PdfObject::Reference(*obj_ref));
            }
            resources.insert("Font", PdfObject::Dictionary(font_dict));
        }
        resources.insert(
            "ProcSet",
            PdfObject::Array(vec![PdfObject::name("PDF"), PdfObject::name("Text")]),
        );
        resources
    }
}

/// The document catalog, pointing at the page tree.
pub fn create_catalog(pages_ref: u32) -> PdfDictionary {
    let mut dict = PdfDictionary::new().with_type("Catalog");
    dict.insert("Pages", PdfObject::Reference(pages_ref));
    dict
}

/// The page tree root.
pub fn create_pages(page_refs: &[u32]) -> PdfDictionary {
    let mut dict = PdfDictionary::new().with_type("Pages");
    dict.insert(
        "Kids",
        PdfObject::Array(page_refs.iter().map(|&r| PdfObject::Reference(r)).collect()),
    );
    dict.insert("Count", PdfObject::Integer(page_refs.len() as i64));
    dict
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_a4_dimensions() {
        let media_box = MediaBox::a4();
        assert_eq!(media_box.width, 595.0);
        assert_eq!(media_box.height, 842.0);
    }

    #[test]
    fn test_info_dictionary_skips_unset_fields() {
        let mut info = DocumentInfo::new();
        info.title = Some("FF-07: EMBLEM".to_string());
        let dict = info.to_dictionary();
        assert!(dict.get("Title").is_some());
        assert!(dict.get("Creator").is_some());
        assert!(dict.get("CreationDate").is_none());
    }

    #[test]
    fn test_page_dictionary_links_resources() {
        let page = PdfPage {
            media_box: MediaBox::a4(),
            content_ref: 5,
            fonts: vec![("F0".to_string(), 4)],
        };
        let dict = page.to_dictionary(2);
        assert!(matches!(dict.get("Parent"), Some(PdfObject::Reference(2))));
        assert!(matches!(dict.get("Contents"), Some(PdfObject::Reference(5))));
        assert!(dict.get("Resources").is_some());
    }

    #[test]
    fn test_pages_counts_kids() {
        let pages = create_pages(&[6]);
        assert!(matches!(pages.get("Count"), Some(PdfObject::Integer(1))));
    }
}
