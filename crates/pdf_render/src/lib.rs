//! PDF Render - Writes ship sheets out as single-page PDF files
//!
//! The [`PageSurface`] implements the layout crate's measurement and
//! drawing traits on top of the standard 14 PDF fonts, and the writer
//! assembles the finished page into a complete PDF file. Nothing here
//! knows how a sheet is arranged; it only turns draw calls into bytes.

mod content;
mod document;
mod error;
mod export;
mod fonts;
mod objects;
mod page;
mod writer;

pub use content::*;
pub use document::*;
pub use error::*;
pub use export::*;
pub use fonts::*;
pub use objects::*;
pub use page::*;
pub use writer::*;
