//! Hull classes

use serde::{Deserialize, Serialize};
use std::fmt;

/// Hull class of a ship.
///
/// Systems may restrict which classes they can be installed on, and
/// default trait packages are keyed by class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ShipClass {
    Frigate,
    Destroyer,
    Cruiser,
    Battleship,
}

impl ShipClass {
    /// All classes, smallest hull first.
    pub fn all() -> [ShipClass; 4] {
        [
            ShipClass::Frigate,
            ShipClass::Destroyer,
            ShipClass::Cruiser,
            ShipClass::Battleship,
        ]
    }
}

impl fmt::Display for ShipClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ShipClass::Frigate => "Frigate",
            ShipClass::Destroyer => "Destroyer",
            ShipClass::Cruiser => "Cruiser",
            ShipClass::Battleship => "Battleship",
        };
        write!(f, "{}", name)
    }
}
