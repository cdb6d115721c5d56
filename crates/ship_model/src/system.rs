//! Installed ship systems

use crate::ShipClass;
use serde::{Deserialize, Serialize};

fn all_classes() -> Vec<ShipClass> {
    ShipClass::all().to_vec()
}

/// A piece of equipment carried by the hull.
///
/// Core systems occupy no slots and come with the hull. Slot systems
/// compete for the hull's limited system slots.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShipSystem {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub slots: u32,
    #[serde(default)]
    pub hit_points: u32,
    /// Text printed inside each damage bubble instead of the blank box.
    #[serde(default)]
    pub bubble_text: Option<Vec<String>>,
    #[serde(default = "all_classes")]
    pub equippable_classes: Vec<ShipClass>,
}

impl ShipSystem {
    /// Blank row used to pad the slot table out to the hull's capacity.
    pub fn filler() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            slots: 1,
            hit_points: 0,
            bubble_text: None,
            equippable_classes: all_classes(),
        }
    }

    pub fn is_core(&self) -> bool {
        self.slots == 0
    }
}
