//! Text style presets
//!
//! Every piece of text on the sheet is drawn in one of a closed set of
//! styles. Keeping the set closed means a typo in a style name is a
//! compile error instead of a blank sheet.

/// The styles the sheet composer can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SheetStyle {
    Heading2,
    Heading3,
    MonoHeading3,
    Paragraph,
    Mono,
    StatBox,
}

/// An RGB color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0 };
    pub const NAVY: Color = Color { r: 0, g: 0, b: 128 };
}

/// A font request. The backend maps the family name onto whatever it
/// actually has available.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontDesc {
    pub family: &'static str,
    pub size: f32,
    pub bold: bool,
}

/// A fully resolved style: font plus fill color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyleDescriptor {
    pub font: FontDesc,
    pub color: Color,
}

/// Maps each [`SheetStyle`] to its descriptor.
#[derive(Debug, Clone)]
pub struct StyleRegistry {
    presets: [StyleDescriptor; 6],
}

impl StyleRegistry {
    pub fn new() -> Self {
        let preset = |family, size, bold, color| StyleDescriptor {
            font: FontDesc { family, size, bold },
            color,
        };
        Self {
            presets: [
                preset("Arial", 14.0, true, Color::NAVY),
                preset("Arial", 11.0, true, Color::NAVY),
                preset("Consolas", 11.0, true, Color::BLACK),
                preset("Arial", 9.0, false, Color::BLACK),
                preset("Consolas", 8.0, false, Color::BLACK),
                preset("Consolas", 11.0, false, Color::BLACK),
            ],
        }
    }

    pub fn get(&self, style: SheetStyle) -> &StyleDescriptor {
        let index = match style {
            SheetStyle::Heading2 => 0,
            SheetStyle::Heading3 => 1,
            SheetStyle::MonoHeading3 => 2,
            SheetStyle::Paragraph => 3,
            SheetStyle::Mono => 4,
            SheetStyle::StatBox => 5,
        };
        &self.presets[index]
    }
}

impl Default for StyleRegistry {
    fn default() -> Self {
        Self::new()
    }
}
