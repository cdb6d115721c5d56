//! Whole-sheet rendering

use ship_model::Ship;

use crate::error::Result;
use crate::measure::TextMeasurer;
use crate::sections::SheetComposer;
use crate::surface::{DrawSurface, TextAlign};

/// Fixed page geometry shared by every section, in points.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetMetrics {
    pub margin_x: f32,
    pub margin_y: f32,
    pub cell_pad_x: f32,
    pub cell_pad_y: f32,
    pub section_gap: f32,
}

impl Default for SheetMetrics {
    fn default() -> Self {
        Self {
            margin_x: 20.0,
            margin_y: 20.0,
            cell_pad_x: 4.0,
            cell_pad_y: 4.0,
            section_gap: 6.0,
        }
    }
}

/// Render the full character sheet for a ship onto the surface.
///
/// Sections stack down the page in a fixed order: title, stat grid,
/// traits, systems, mounts, bays. Any error leaves the document
/// unsaved, since the surface is only persisted by the caller after
/// this returns successfully.
pub fn render_sheet<S>(surface: &mut S, ship: &Ship) -> Result<()>
where
    S: DrawSurface + TextMeasurer,
{
    let composer = SheetComposer::new(ship);
    let x = composer.metrics().margin_x;
    let gap = composer.metrics().section_gap;
    let mut cursor = composer.metrics().margin_y;

    cursor = composer.add_title(surface, x, cursor).y + gap;
    cursor = composer.add_stats(surface, x, cursor).y + gap;

    cursor = composer
        .add_heading(surface, x, cursor, "TRAITS", TextAlign::Near, None)
        .y
        + gap;
    cursor = composer.add_traits(surface, x, cursor)?.y + gap;

    cursor = composer.add_systems(surface, x, cursor)?.y + gap;

    cursor = composer
        .add_heading(surface, x, cursor, "MOUNTS", TextAlign::Near, None)
        .y
        + gap;
    cursor = composer.add_mounts(surface, x, cursor)?.y + gap;

    cursor = composer
        .add_heading(surface, x, cursor, "BAYS", TextAlign::Near, None)
        .y
        + gap;
    composer.add_bays(surface, x, cursor)?;

    Ok(())
}
