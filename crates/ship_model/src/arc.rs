//! Firing arcs

use serde::{Deserialize, Serialize};

/// Quarter of the ship a mount or bay can address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PositionArc {
    Forward,
    Port,
    Starboard,
    Rear,
}

impl PositionArc {
    /// Single-letter abbreviation used in position codes, e.g. "FT".
    pub fn letter(&self) -> char {
        match self {
            PositionArc::Forward => 'F',
            PositionArc::Port => 'P',
            PositionArc::Starboard => 'S',
            PositionArc::Rear => 'R',
        }
    }
}
