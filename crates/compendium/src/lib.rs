//! Compendium - Master lists of weapons, systems, craft, and ship templates
//!
//! This crate loads the master equipment lists from JSON files and
//! provides lookups over them, plus the default fit-out applied to every
//! freshly selected hull.

mod catalog;
mod error;

pub use catalog::*;
pub use error::*;
