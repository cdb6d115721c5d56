//! Payload bays

use crate::{Craft, EquipError, EquipResult, PositionArc};
use serde::{Deserialize, Serialize};

fn default_count() -> u32 {
    1
}

/// A launch bay that carries craft.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bay {
    pub size: u32,
    #[serde(default = "default_count")]
    pub count: u32,
    pub arcs: Vec<PositionArc>,
    #[serde(default)]
    pub craft: Option<Craft>,
}

impl Bay {
    pub fn can_equip(&self, craft: &Craft) -> EquipResult {
        if craft.size > self.size {
            return Err(EquipError::CraftTooLarge {
                craft: craft.size,
                bay: self.size,
            });
        }
        Ok(())
    }

    /// Load the craft, replacing whatever was carried before.
    pub fn equip(&mut self, craft: Craft) -> EquipResult {
        self.can_equip(&craft)?;
        self.craft = Some(craft);
        Ok(())
    }

    pub fn unequip(&mut self) {
        self.craft = None;
    }

    /// Position code listing every covered arc, e.g. "FPS".
    pub fn position_code(&self) -> String {
        self.arcs.iter().map(|a| a.letter()).collect()
    }
}
