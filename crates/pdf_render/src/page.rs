//! Page drawing surface
//!
//! Implements the layout crate's measurement and drawing traits for a
//! single page. Draw calls are recorded as absolutely positioned items
//! and later rendered into a content stream. Layout coordinates arrive
//! top-down and are flipped into PDF's bottom-up space at render time.

use sheet_layout::{
    Color, DrawSurface, Point, Rect, StyleDescriptor, TextAlign, TextMeasurer, TextSize,
};

use crate::content::ContentStream;
use crate::document::MediaBox;
use crate::fonts::{estimate_text_width, FontManager, StandardFont};

/// Vertical space one line of text occupies, as a multiple of the
/// font size. Measurement and line flow both use it, so wrapped cells
/// stay consistent with the heights the layout pass reserved.
const LINE_SPACING: f64 = 1.2;

#[derive(Debug, Clone, PartialEq)]
enum RenderItem {
    Text {
        text: String,
        font: StandardFont,
        size: f64,
        color: Color,
        x: f64,
        /// Baseline position in top-down page coordinates.
        baseline: f64,
    },
    Line {
        from: (f64, f64),
        to: (f64, f64),
    },
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
}

/// A page that records layout output and renders it to PDF operators.
pub struct PageSurface {
    media_box: MediaBox,
    items: Vec<RenderItem>,
}

impl PageSurface {
    pub fn new(media_box: MediaBox) -> Self {
        Self {
            media_box,
            items: Vec::new(),
        }
    }

    pub fn a4() -> Self {
        Self::new(MediaBox::a4())
    }

    pub fn media_box(&self) -> MediaBox {
        self.media_box
    }

    fn resolve(style: &StyleDescriptor) -> (StandardFont, f64) {
        (
            StandardFont::from_name(style.font.family, style.font.bold),
            style.font.size as f64,
        )
    }

    fn push_text(
        &mut self,
        text: String,
        font: StandardFont,
        size: f64,
        color: Color,
        x: f64,
        baseline: f64,
    ) {
        self.items.push(RenderItem::Text {
            text,
            font,
            size,
            color,
            x,
            baseline,
        });
    }

    /// Render everything drawn so far into a content stream. Grid
    /// lines and boxes come first, then a single text block in which
    /// font and color changes are only emitted when they differ from
    /// the previous item.
    pub fn render(&self, fonts: &mut FontManager) -> ContentStream {
        let mut content = ContentStream::new();
        let page_height = self.media_box.height;

        let has_graphics = self
            .items
            .iter()
            .any(|item| !matches!(item, RenderItem::Text { .. }));
        if has_graphics {
            content.save_state();
            content.set_line_width(1.0);
            for item in &self.items {
                match item {
                    RenderItem::Line { from, to } => {
                        content
                            .move_to(from.0, page_height - from.1)
                            .line_to(to.0, page_height - to.1)
                            .stroke();
                    }
                    RenderItem::Rect {
                        x,
                        y,
                        width,
                        height,
                    } => {
                        content
                            .rect(*x, page_height - y - height, *width, *height)
                            .stroke();
                    }
                    RenderItem::Text { .. } => {}
                }
            }
            content.restore_state();
        }

        let mut active_font: Option<(StandardFont, f64)> = None;
        let mut active_color: Option<Color> = None;
        let mut in_text = false;
        for item in &self.items {
            if let RenderItem::Text {
                text,
                font,
                size,
                color,
                x,
                baseline,
            } = item
            {
                if !in_text {
                    content.begin_text();
                    in_text = true;
                }
                if active_font != Some((*font, *size)) {
                    let name = fonts.get_or_create_font(*font).name.clone();
                    content.set_font(&name, *size);
                    active_font = Some((*font, *size));
                }
                if active_color != Some(*color) {
                    content.set_fill_rgb(
                        color.r as f64 / 255.0,
                        color.g as f64 / 255.0,
                        color.b as f64 / 255.0,
                    );
                    active_color = Some(*color);
                }
                content.set_text_matrix(*x, page_height - baseline);
                content.show_text(text);
            }
        }
        if in_text {
            content.end_text();
        }

        content
    }
}

impl TextMeasurer for PageSurface {
    fn measure_text(&self, text: &str, style: &StyleDescriptor) -> TextSize {
        let (font, size) = Self::resolve(style);
        TextSize {
            width: estimate_text_width(text, font, size) as f32,
            height: (size * LINE_SPACING) as f32,
        }
    }
}

impl DrawSurface for PageSurface {
    fn draw_text(&mut self, text: &str, style: &StyleDescriptor, rect: Rect, align: TextAlign) {
        if text.is_empty() {
            return;
        }
        let (font, size) = Self::resolve(style);
        let width = estimate_text_width(text, font, size);
        let x = match align {
            TextAlign::Near => rect.x as f64,
            TextAlign::Center => rect.x as f64 + (rect.width as f64 - width) / 2.0,
            TextAlign::Far => rect.right() as f64 - width,
        };
        let line_height = size * LINE_SPACING;
        let top = rect.y as f64 + (rect.height as f64 - line_height) / 2.0;
        self.push_text(
            text.to_string(),
            font,
            size,
            style.color,
            x,
            top + font.ascent() * size,
        );
    }

    /// Greedy word wrap from the rectangle's top-left corner. A word
    /// wider than the rectangle is drawn anyway rather than split.
    fn draw_wrapped_text(&mut self, text: &str, style: &StyleDescriptor, rect: Rect) {
        let (font, size) = Self::resolve(style);
        let max_width = rect.width as f64;
        let line_height = size * LINE_SPACING;
        let x = rect.x as f64;

        let mut line = String::new();
        let mut baseline = rect.y as f64 + font.ascent() * size;
        for word in text.split_whitespace() {
            if line.is_empty() {
                line = word.to_string();
                continue;
            }
            let candidate = format!("{} {}", line, word);
            if estimate_text_width(&candidate, font, size) > max_width {
                self.push_text(line, font, size, style.color, x, baseline);
                baseline += line_height;
                line = word.to_string();
            } else {
                line = candidate;
            }
        }
        if !line.is_empty() {
            self.push_text(line, font, size, style.color, x, baseline);
        }
    }

    fn draw_line(&mut self, from: Point, to: Point) {
        self.items.push(RenderItem::Line {
            from: (from.x as f64, from.y as f64),
            to: (to.x as f64, to.y as f64),
        });
    }

    fn draw_rect(&mut self, rect: Rect) {
        self.items.push(RenderItem::Rect {
            x: rect.x as f64,
            y: rect.y as f64,
            width: rect.width as f64,
            height: rect.height as f64,
        });
    }

    fn page_width(&self) -> f32 {
        self.media_box.width as f32
    }
}
