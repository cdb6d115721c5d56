//! Drawing surface abstraction

use crate::geometry::{Point, Rect};
use crate::style::StyleDescriptor;

/// Horizontal placement of single-line text inside its rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Near,
    Center,
    Far,
}

/// Receives the absolutely positioned output of a layout pass.
///
/// Implementations draw single-line text vertically centered in its
/// rectangle and flow wrapped text from the rectangle's top-left
/// corner, breaking lines at whitespace.
pub trait DrawSurface {
    fn draw_text(&mut self, text: &str, style: &StyleDescriptor, rect: Rect, align: TextAlign);

    fn draw_wrapped_text(&mut self, text: &str, style: &StyleDescriptor, rect: Rect);

    fn draw_line(&mut self, from: Point, to: Point);

    fn draw_rect(&mut self, rect: Rect);

    fn page_width(&self) -> f32;
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use crate::measure::{TextMeasurer, TextSize};

    /// Everything a layout pass asked a surface to draw.
    #[derive(Debug, Clone, PartialEq)]
    pub enum DrawOp {
        Text {
            text: String,
            style: StyleDescriptor,
            rect: Rect,
            align: TextAlign,
        },
        WrappedText {
            text: String,
            style: StyleDescriptor,
            rect: Rect,
        },
        Line {
            from: Point,
            to: Point,
        },
        Rect {
            rect: Rect,
        },
    }

    /// A surface that records draw calls instead of producing output.
    ///
    /// Measurement is a fixed-width model: every character is half the
    /// font size wide and a line is 1.2 times the font size tall.
    pub struct RecordingSurface {
        pub width: f32,
        pub ops: Vec<DrawOp>,
    }

    impl RecordingSurface {
        pub fn new() -> Self {
            Self {
                width: 595.0,
                ops: Vec::new(),
            }
        }

        /// All single-line text contents, in draw order.
        pub fn texts(&self) -> Vec<&str> {
            self.ops
                .iter()
                .filter_map(|op| match op {
                    DrawOp::Text { text, .. } => Some(text.as_str()),
                    _ => None,
                })
                .collect()
        }

        pub fn lines(&self) -> Vec<(Point, Point)> {
            self.ops
                .iter()
                .filter_map(|op| match op {
                    DrawOp::Line { from, to } => Some((*from, *to)),
                    _ => None,
                })
                .collect()
        }
    }

    impl TextMeasurer for RecordingSurface {
        fn measure_text(&self, text: &str, style: &StyleDescriptor) -> TextSize {
            TextSize {
                width: text.chars().count() as f32 * style.font.size * 0.5,
                height: style.font.size * 1.2,
            }
        }
    }

    impl DrawSurface for RecordingSurface {
        fn draw_text(&mut self, text: &str, style: &StyleDescriptor, rect: Rect, align: TextAlign) {
            self.ops.push(DrawOp::Text {
                text: text.to_string(),
                style: *style,
                rect,
                align,
            });
        }

        fn draw_wrapped_text(&mut self, text: &str, style: &StyleDescriptor, rect: Rect) {
            self.ops.push(DrawOp::WrappedText {
                text: text.to_string(),
                style: *style,
                rect,
            });
        }

        fn draw_line(&mut self, from: Point, to: Point) {
            self.ops.push(DrawOp::Line { from, to });
        }

        fn draw_rect(&mut self, rect: Rect) {
            self.ops.push(DrawOp::Rect { rect });
        }

        fn page_width(&self) -> f32 {
            self.width
        }
    }
}
