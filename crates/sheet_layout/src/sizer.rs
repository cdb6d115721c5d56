//! Column sizing
//!
//! Tables are sized before anything is drawn. A column is as wide as
//! its widest rendered string, and wrapped row heights are estimated
//! from measured widths rather than from real line breaking.

use crate::error::{LayoutError, Result};
use crate::measure::TextMeasurer;
use crate::sheet::SheetMetrics;
use crate::style::StyleDescriptor;

/// Safety factor applied to measured widths when estimating how many
/// lines a wrapped string needs. The estimate never breaks words, so
/// it pads the width instead of modelling the real break points.
const LINE_FUDGE: f32 = 1.2;

/// Width of a column holding `strings`, where the first entry is the
/// header and the rest are body rows.
///
/// The result is the widest body-style measurement, widened further if
/// the header drawn in its own style beats every body row, plus the
/// cell padding on both sides.
pub fn column_width(
    measurer: &dyn TextMeasurer,
    strings: &[String],
    body: &StyleDescriptor,
    header: &StyleDescriptor,
    metrics: &SheetMetrics,
) -> Result<f32> {
    let first = strings
        .first()
        .ok_or_else(|| LayoutError::Config("cannot size a column with no rows".to_string()))?;

    let mut width = strings
        .iter()
        .map(|s| measurer.measure_text(s, body).width)
        .fold(0.0f32, f32::max);
    width = width.max(measurer.measure_text(first, header).width);
    Ok(width + 2.0 * metrics.cell_pad_x)
}

/// Estimated heights for each of `strings` when wrapped into a column
/// `available_width` wide.
///
/// Every entry is measured in the body style, the header row included.
/// The line count for a row is the measured single-line width times
/// [`LINE_FUDGE`] divided by the available width, rounded up, with a
/// floor of one line. This is an approximation: the surface breaks
/// lines at whitespace, which the estimate does not model.
pub fn wrapped_heights(
    measurer: &dyn TextMeasurer,
    strings: &[String],
    body: &StyleDescriptor,
    available_width: f32,
    metrics: &SheetMetrics,
) -> Result<Vec<f32>> {
    if available_width <= 0.0 {
        tracing::warn!(
            "Wrapped column has no room: {} points remain",
            available_width
        );
        return Err(LayoutError::Config(format!(
            "wrapped column width must be positive, got {}",
            available_width
        )));
    }

    Ok(strings
        .iter()
        .map(|s| {
            let size = measurer.measure_text(s, body);
            let lines = (size.width * LINE_FUDGE / available_width).ceil().max(1.0);
            size.height * lines + 2.0 * metrics.cell_pad_y
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sheet::SheetMetrics;
    use crate::style::{SheetStyle, StyleRegistry};
    use crate::surface::testing::RecordingSurface;

    fn rows(strings: &[&str]) -> Vec<String> {
        strings.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_widest_body_row_sets_the_width() {
        let surface = RecordingSurface::new();
        let styles = StyleRegistry::new();
        let metrics = SheetMetrics::default();
        let body = styles.get(SheetStyle::Mono);

        let width = column_width(
            &surface,
            &rows(&["ab", "abcdef", "abc"]),
            body,
            body,
            &metrics,
        )
        .unwrap();

        // six characters at half the 8pt font size, plus padding
        assert_eq!(width, 6.0 * 4.0 + 2.0 * metrics.cell_pad_x);
    }

    #[test]
    fn test_header_style_can_widen_the_column() {
        let surface = RecordingSurface::new();
        let styles = StyleRegistry::new();
        let metrics = SheetMetrics::default();
        let body = styles.get(SheetStyle::Mono);
        let header = styles.get(SheetStyle::MonoHeading3);

        // the header row is short but its 11pt style out-measures the
        // 8pt body rows
        let width = column_width(&surface, &rows(&["NAME", "abcd"]), body, header, &metrics)
            .unwrap();

        assert_eq!(width, 4.0 * 5.5 + 2.0 * metrics.cell_pad_x);
    }

    #[test]
    fn test_empty_column_is_a_config_error() {
        let surface = RecordingSurface::new();
        let styles = StyleRegistry::new();
        let metrics = SheetMetrics::default();
        let body = styles.get(SheetStyle::Mono);

        let result = column_width(&surface, &[], body, body, &metrics);
        assert!(matches!(result, Err(LayoutError::Config(_))));
    }

    #[test]
    fn test_measurement_is_deterministic() {
        let surface = RecordingSurface::new();
        let styles = StyleRegistry::new();
        let metrics = SheetMetrics::default();
        let body = styles.get(SheetStyle::Mono);
        let data = rows(&["one", "two", "three"]);

        let first = column_width(&surface, &data, body, body, &metrics).unwrap();
        let second = column_width(&surface, &data, body, body, &metrics).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_row_order_does_not_change_the_width() {
        let surface = RecordingSurface::new();
        let styles = StyleRegistry::new();
        let metrics = SheetMetrics::default();
        let body = styles.get(SheetStyle::Mono);

        let forward = column_width(
            &surface,
            &rows(&["one", "two", "three"]),
            body,
            body,
            &metrics,
        )
        .unwrap();
        let reversed = column_width(
            &surface,
            &rows(&["three", "two", "one"]),
            body,
            body,
            &metrics,
        )
        .unwrap();

        assert_eq!(forward, reversed);
    }

    #[test]
    fn test_short_rows_still_get_one_line() {
        let surface = RecordingSurface::new();
        let styles = StyleRegistry::new();
        let metrics = SheetMetrics::default();
        let body = styles.get(SheetStyle::Mono);

        let heights =
            wrapped_heights(&surface, &rows(&["", "hi"]), body, 200.0, &metrics).unwrap();

        let single = 8.0 * 1.2 + 2.0 * metrics.cell_pad_y;
        assert_eq!(heights, vec![single, single]);
    }

    #[test]
    fn test_wider_columns_never_need_more_lines() {
        let surface = RecordingSurface::new();
        let styles = StyleRegistry::new();
        let metrics = SheetMetrics::default();
        let body = styles.get(SheetStyle::Mono);
        let data = rows(&["short", "a considerably longer description of a trait", "mid"]);

        let narrow = wrapped_heights(&surface, &data, body, 60.0, &metrics).unwrap();
        let wide = wrapped_heights(&surface, &data, body, 180.0, &metrics).unwrap();

        for (n, w) in narrow.iter().zip(wide.iter()) {
            assert!(w <= n);
        }
    }

    #[test]
    fn test_no_room_left_is_a_config_error() {
        let surface = RecordingSurface::new();
        let styles = StyleRegistry::new();
        let metrics = SheetMetrics::default();
        let body = styles.get(SheetStyle::Mono);

        let result = wrapped_heights(&surface, &rows(&["text"]), body, -12.5, &metrics);
        assert!(matches!(result, Err(LayoutError::Config(_))));
    }
}
