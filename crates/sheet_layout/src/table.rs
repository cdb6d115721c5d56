//! Column-by-column table layout
//!
//! A table is described by per-column extraction functions over a row
//! type. All cell strings are resolved and all geometry is computed
//! before the first draw call, so an error never leaves a half-drawn
//! table behind.

use crate::error::{LayoutError, Result};
use crate::geometry::{Point, Rect};
use crate::measure::TextMeasurer;
use crate::sheet::SheetMetrics;
use crate::sizer::{column_width, wrapped_heights};
use crate::style::{SheetStyle, StyleRegistry};
use crate::surface::{DrawSurface, TextAlign};

/// Produces one column's cell string for a row.
pub type CellFn<'a, T> = Box<dyn Fn(&T) -> Result<String> + 'a>;

/// Shape and styling of a table.
pub struct TableSpec<'a, T> {
    pub columns: Vec<CellFn<'a, T>>,
    pub headers: Option<Vec<String>>,
    pub body_style: SheetStyle,
    pub header_style: SheetStyle,
    pub draw_borders: bool,
    /// When set, the last column takes all width remaining up to the
    /// right bound and its cells wrap. Row heights are then shared by
    /// every column so the grid lines meet.
    pub wrap_last: bool,
}

/// Lay out and draw a table starting at `origin`, never extending past
/// `right_bound`.
///
/// Columns are drawn left to right, each starting where the previous
/// one ended. Without `wrap_last` every column is sized to its own
/// content and rows keep their single-line heights, so columns can end
/// at different depths. The returned point is the table's left edge
/// and the bottom of its deepest column.
pub fn layout_table<S, T>(
    surface: &mut S,
    styles: &StyleRegistry,
    metrics: &SheetMetrics,
    origin: Point,
    rows: &[T],
    spec: &TableSpec<'_, T>,
    right_bound: f32,
) -> Result<Point>
where
    S: DrawSurface + TextMeasurer,
{
    if spec.columns.is_empty() {
        return Err(LayoutError::Config("table has no columns".to_string()));
    }
    if let Some(headers) = &spec.headers {
        if headers.len() != spec.columns.len() {
            return Err(LayoutError::Config(format!(
                "table has {} headers for {} columns",
                headers.len(),
                spec.columns.len()
            )));
        }
    }

    let body = styles.get(spec.body_style);
    let header = styles.get(spec.header_style);

    // resolve every cell up front, header row first
    let mut column_data: Vec<Vec<String>> = Vec::with_capacity(spec.columns.len());
    for (index, cell) in spec.columns.iter().enumerate() {
        let mut data = Vec::with_capacity(rows.len() + 1);
        if let Some(headers) = &spec.headers {
            data.push(headers[index].clone());
        }
        for row in rows {
            data.push(cell(row)?);
        }
        column_data.push(data);
    }

    let last = column_data.len() - 1;
    let mut widths = Vec::with_capacity(column_data.len());
    let mut consumed = 0.0f32;
    for (index, data) in column_data.iter().enumerate() {
        if spec.wrap_last && index == last {
            widths.push(right_bound - origin.x - consumed);
        } else {
            let width = column_width(surface, data, body, header, metrics)?;
            consumed += width;
            widths.push(width);
        }
    }

    // the wrapped column's estimated heights govern the whole grid
    let row_heights = if spec.wrap_last {
        Some(wrapped_heights(
            surface,
            &column_data[last],
            body,
            widths[last],
            metrics,
        )?)
    } else {
        None
    };

    let mut column_x = origin.x;
    let mut max_bottom = origin.y;
    for (index, data) in column_data.iter().enumerate() {
        let width = widths[index];
        let right_x = column_x + width;
        let wrap_cells = spec.wrap_last && index == last;
        let mut current_y = origin.y;

        for (row, text) in data.iter().enumerate() {
            let is_header = spec.headers.is_some() && row == 0;
            let style = if is_header { header } else { body };
            let height = match &row_heights {
                Some(heights) => heights[row],
                None => surface.measure_text(text, style).height + 2.0 * metrics.cell_pad_y,
            };
            let rect = Rect::new(column_x, current_y, width, height);

            if wrap_cells && !is_header {
                surface.draw_wrapped_text(
                    text,
                    style,
                    rect.inflate(-metrics.cell_pad_x, -metrics.cell_pad_y),
                );
            } else {
                surface.draw_text(text, style, rect, TextAlign::Center);
            }

            if spec.draw_borders {
                surface.draw_line(Point::new(column_x, current_y), Point::new(right_x, current_y));
            }
            current_y += height;
            if spec.draw_borders {
                surface.draw_line(Point::new(column_x, current_y), Point::new(right_x, current_y));
            }
        }

        if spec.draw_borders {
            surface.draw_line(Point::new(column_x, origin.y), Point::new(column_x, current_y));
            surface.draw_line(Point::new(right_x, origin.y), Point::new(right_x, current_y));
        }

        max_bottom = max_bottom.max(current_y);
        column_x = right_x;
    }

    Ok(Point::new(origin.x, max_bottom))
}
