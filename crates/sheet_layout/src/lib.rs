//! Sheet Layout - Measurement-driven table typesetting for ship sheets
//!
//! Turns a fully equipped ship into a stream of absolutely positioned
//! text, line, and rectangle commands for a single fixed-size page.
//! Column widths come from measuring the rendered strings, so the crate
//! only talks to the output backend through the [`TextMeasurer`] and
//! [`DrawSurface`] traits and never owns a device itself.

mod dice;
mod error;
mod geometry;
mod measure;
mod sections;
mod sheet;
mod sizer;
mod style;
mod surface;
mod table;

pub use dice::*;
pub use error::*;
pub use geometry::*;
pub use measure::*;
pub use sections::*;
pub use sheet::*;
pub use sizer::*;
pub use style::*;
pub use surface::*;
pub use table::*;
