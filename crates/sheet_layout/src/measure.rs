//! Text measurement

use crate::style::StyleDescriptor;

/// The size a string occupies when drawn on one line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextSize {
    pub width: f32,
    pub height: f32,
}

/// Measures text in a given style.
///
/// Layout runs entirely on measured sizes, so the same implementation
/// that later draws the text must answer these queries. Measurement
/// must be pure: the same string and style always produce the same
/// size, no matter what has been drawn so far.
pub trait TextMeasurer {
    fn measure_text(&self, text: &str, style: &StyleDescriptor) -> TextSize;
}
