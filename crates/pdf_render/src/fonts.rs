//! Standard font handling
//!
//! The sheet only ever asks for a sans and a monospaced face, so the
//! built-in standard fonts cover it without embedding. Widths are
//! average-width estimates; the layout crate treats them as the truth,
//! which keeps measurement and drawing consistent with each other.

use crate::objects::{PdfDictionary, PdfObject};
use std::collections::HashMap;

/// The standard PDF fonts the sheet can resolve to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StandardFont {
    Helvetica,
    HelveticaBold,
    Courier,
    CourierBold,
}

impl StandardFont {
    /// BaseFont name as it appears in the font dictionary.
    pub fn pdf_name(&self) -> &'static str {
        match self {
            StandardFont::Helvetica => "Helvetica",
            StandardFont::HelveticaBold => "Helvetica-Bold",
            StandardFont::Courier => "Courier",
            StandardFont::CourierBold => "Courier-Bold",
        }
    }

    /// Map a requested family onto a standard font. Monospaced
    /// families go to Courier, everything else to Helvetica.
    pub fn from_name(family: &str, bold: bool) -> Self {
        let family = family.to_lowercase();
        let mono = family.contains("courier")
            || family.contains("consolas")
            || family.contains("mono");
        match (mono, bold) {
            (true, false) => StandardFont::Courier,
            (true, true) => StandardFont::CourierBold,
            (false, false) => StandardFont::Helvetica,
            (false, true) => StandardFont::HelveticaBold,
        }
    }

    /// Average glyph width as a fraction of the font size.
    pub fn avg_char_width(&self) -> f64 {
        match self {
            StandardFont::Courier | StandardFont::CourierBold => 0.6,
            StandardFont::Helvetica => 0.5,
            StandardFont::HelveticaBold => 0.52,
        }
    }

    /// Baseline offset from the top of the glyph box, as a fraction of
    /// the font size.
    pub fn ascent(&self) -> f64 {
        match self {
            StandardFont::Courier | StandardFont::CourierBold => 0.629,
            StandardFont::Helvetica | StandardFont::HelveticaBold => 0.718,
        }
    }
}

/// Estimate the width of a string drawn in a standard font.
pub fn estimate_text_width(text: &str, font: StandardFont, size: f64) -> f64 {
    text.chars().count() as f64 * font.avg_char_width() * size
}

/// A font registered for use on the page.
#[derive(Debug, Clone)]
pub struct FontInfo {
    /// Resource name inside the page, e.g. "F0".
    pub name: String,
    pub font: StandardFont,
}

/// Assigns resource names to the fonts a page uses.
///
/// Fonts keep their registration order, so repeated renders of the
/// same sheet name them identically.
#[derive(Debug, Default)]
pub struct FontManager {
    font_map: HashMap<StandardFont, usize>,
    fonts: Vec<FontInfo>,
}

impl FontManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve to a registered font, registering it on first use.
    pub fn get_or_create_font(&mut self, font: StandardFont) -> &FontInfo {
        let index = match self.font_map.get(&font) {
            Some(&index) => index,
            None => {
                let index = self.fonts.len();
                self.fonts.push(FontInfo {
                    name: format!("F{}", index),
                    font,
                });
                self.font_map.insert(font, index);
                index
            }
        };
        &self.fonts[index]
    }

    /// Registered fonts in registration order.
    pub fn fonts(&self) -> impl Iterator<Item = &FontInfo> {
        self.fonts.iter()
    }

    pub fn font_count(&self) -> usize {
        self.fonts.len()
    }
}

/// Font dictionary for one of the built-in Type1 fonts.
pub fn create_standard_font_dict(font: StandardFont) -> PdfDictionary {
    let mut dict = PdfDictionary::new().with_type("Font");
    dict.insert("Subtype", PdfObject::name("Type1"));
    dict.insert("BaseFont", PdfObject::name(font.pdf_name()));
    dict.insert("Encoding", PdfObject::name("WinAnsiEncoding"));
    dict
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_family_mapping() {
        assert_eq!(
            StandardFont::from_name("Arial", false),
            StandardFont::Helvetica
        );
        assert_eq!(
            StandardFont::from_name("Arial", true),
            StandardFont::HelveticaBold
        );
        assert_eq!(
            StandardFont::from_name("Consolas", false),
            StandardFont::Courier
        );
        assert_eq!(
            StandardFont::from_name("Consolas", true),
            StandardFont::CourierBold
        );
        assert_eq!(
            StandardFont::from_name("Anything Else", false),
            StandardFont::Helvetica
        );
    }

    #[test]
    fn test_manager_reuses_names() {
        let mut manager = FontManager::new();

        let first = manager
            .get_or_create_font(StandardFont::Helvetica)
            .name
            .clone();
        assert_eq!(first, "F0");

        let second = manager
            .get_or_create_font(StandardFont::CourierBold)
            .name
            .clone();
        assert_eq!(second, "F1");

        assert_eq!(
            manager.get_or_create_font(StandardFont::Helvetica).name,
            "F0"
        );
        assert_eq!(manager.font_count(), 2);
    }

    #[test]
    fn test_font_dict_shape() {
        let dict = create_standard_font_dict(StandardFont::CourierBold);
        assert!(matches!(
            dict.get("BaseFont"),
            Some(PdfObject::Name(name)) if name == "Courier-Bold"
        ));
        assert!(dict.get("Encoding").is_some());
        assert!(dict.get("Subtype").is_some());
    }

    #[test]
    fn test_width_estimate_scales_with_size() {
        let narrow = estimate_text_width("NAME", StandardFont::Courier, 8.0);
        let wide = estimate_text_width("NAME", StandardFont::Courier, 11.0);
        assert_eq!(narrow, 4.0 * 0.6 * 8.0);
        assert!(wide > narrow);
    }
}
