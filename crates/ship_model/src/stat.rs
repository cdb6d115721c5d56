//! Hull statistics

use serde::{Deserialize, Serialize};

/// A tracked hull statistic.
///
/// The first five are gauges: the sheet prints their maximum and leaves
/// room for the current value. The rest are flat modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ShipStat {
    #[serde(rename = "HP")]
    Hp,
    Shields,
    Reactor,
    Ammo,
    Restores,
    Evasion,
    Armour,
    Speed,
    Sensors,
    Signature,
}

impl ShipStat {
    /// All stats in sheet display order.
    pub fn all() -> [ShipStat; 10] {
        [
            ShipStat::Hp,
            ShipStat::Shields,
            ShipStat::Reactor,
            ShipStat::Ammo,
            ShipStat::Restores,
            ShipStat::Evasion,
            ShipStat::Armour,
            ShipStat::Speed,
            ShipStat::Sensors,
            ShipStat::Signature,
        ]
    }

    /// Label printed beside the stat value box.
    pub fn label(&self) -> &'static str {
        match self {
            ShipStat::Hp => "HP",
            ShipStat::Shields => "Shields",
            ShipStat::Reactor => "Reactor",
            ShipStat::Ammo => "Ammo",
            ShipStat::Restores => "Restores",
            ShipStat::Evasion => "Evasion",
            ShipStat::Armour => "Armour",
            ShipStat::Speed => "Speed",
            ShipStat::Sensors => "Sensors",
            ShipStat::Signature => "Signature",
        }
    }

    /// Gauges record a spent value against a printed maximum.
    pub fn is_gauge(&self) -> bool {
        *self <= ShipStat::Restores
    }
}
