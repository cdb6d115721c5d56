//! Content stream generation
//!
//! Builds the operator stream that paints a page: path operators for
//! the table grid and stat boxes, text operators for everything else.

use std::io::Write;

/// Builder for a page's content stream.
#[derive(Debug, Default)]
pub struct ContentStream {
    data: Vec<u8>,
}

impl ContentStream {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Save the graphics state (q).
    pub fn save_state(&mut self) -> &mut Self {
        self.write_line("q");
        self
    }

    /// Restore the graphics state (Q).
    pub fn restore_state(&mut self) -> &mut Self {
        self.write_line("Q");
        self
    }

    /// Set the stroke line width (w).
    pub fn set_line_width(&mut self, width: f64) -> &mut Self {
        self.write_fmt(format_args!("{} w\n", fmt_num(width)));
        self
    }

    /// Set the fill color (rg).
    pub fn set_fill_rgb(&mut self, r: f64, g: f64, b: f64) -> &mut Self {
        self.write_fmt(format_args!(
            "{} {} {} rg\n",
            fmt_num(r),
            fmt_num(g),
            fmt_num(b)
        ));
        self
    }

    /// Move the current point (m).
    pub fn move_to(&mut self, x: f64, y: f64) -> &mut Self {
        self.write_fmt(format_args!("{} {} m\n", fmt_num(x), fmt_num(y)));
        self
    }

    /// Append a line segment (l).
    pub fn line_to(&mut self, x: f64, y: f64) -> &mut Self {
        self.write_fmt(format_args!("{} {} l\n", fmt_num(x), fmt_num(y)));
        self
    }

    /// Append a rectangle (re).
    pub fn rect(&mut self, x: f64, y: f64, width: f64, height: f64) -> &mut Self {
        self.write_fmt(format_args!(
            "{} {} {} {} re\n",
            fmt_num(x),
            fmt_num(y),
            fmt_num(width),
            fmt_num(height)
        ));
        self
    }

    /// Stroke the current path (S).
    pub fn stroke(&mut self) -> &mut Self {
        self.write_line("S");
        self
    }

    /// Begin a text object (BT).
    pub fn begin_text(&mut self) -> &mut Self {
        self.write_line("BT");
        self
    }

    /// End a text object (ET).
    pub fn end_text(&mut self) -> &mut Self {
        self.write_line("ET");
        self
    }

    /// Select a font and size (Tf).
    pub fn set_font(&mut self, font_name: &str, size: f64) -> &mut Self {
        self.write_fmt(format_args!("/{} {} Tf\n", font_name, fmt_num(size)));
        self
    }

    /// Set the text matrix (Tm), which positions the next string.
    pub fn set_text_matrix(&mut self, x: f64, y: f64) -> &mut Self {
        self.write_fmt(format_args!("1 0 0 1 {} {} Tm\n", fmt_num(x), fmt_num(y)));
        self
    }

    /// Show a string at the current text position (Tj).
    pub fn show_text(&mut self, text: &str) -> &mut Self {
        self.write_pdf_string(text);
        self.write_line(" Tj");
        self
    }

    fn write_line(&mut self, s: &str) {
        self.data.extend_from_slice(s.as_bytes());
        self.data.push(b'\n');
    }

    fn write_fmt(&mut self, args: std::fmt::Arguments<'_>) {
        let _ = self.data.write_fmt(args);
    }

    fn write_pdf_string(&mut self, s: &str) {
        self.data.push(b'(');
        for byte in s.bytes() {
            match byte {
                b'(' | b')' | b'\\' => {
                    self.data.push(b'\\');
                    self.data.push(byte);
                }
                0x0A => self.data.extend_from_slice(b"\\n"),
                0x0D => self.data.extend_from_slice(b"\\r"),
                0x09 => self.data.extend_from_slice(b"\\t"),
                _ => self.data.push(byte),
            }
        }
        self.data.push(b')');
    }
}

/// Format a coordinate, trimming trailing zeros.
fn fmt_num(n: f64) -> String {
    if n.fract() == 0.0 {
        format!("{:.0}", n)
    } else {
        format!("{:.4}", n)
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    }
}
