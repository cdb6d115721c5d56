//! The ship itself

use crate::{Bay, EquipError, EquipResult, Mount, ShipClass, ShipStat, ShipSystem};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A fitted-out hull, ready to print.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ship {
    pub name: String,
    /// Pennant number painted on the hull, e.g. "DD-201".
    #[serde(default)]
    pub identifier: Option<String>,
    #[serde(default)]
    pub stats: BTreeMap<ShipStat, i32>,
    pub class: ShipClass,
    #[serde(default)]
    pub mounts: Vec<Mount>,
    #[serde(default)]
    pub bays: Vec<Bay>,
    #[serde(default)]
    pub system_slots: u32,
    #[serde(default)]
    pub point_cost: u32,
    #[serde(default)]
    pub traits: BTreeMap<String, String>,
    #[serde(default)]
    pub systems: Vec<ShipSystem>,
}

impl Ship {
    /// Create a bare hull with every stat zeroed.
    pub fn new(name: impl Into<String>, class: ShipClass) -> Self {
        let mut stats = BTreeMap::new();
        for stat in ShipStat::all() {
            stats.insert(stat, 0);
        }
        Self {
            name: name.into(),
            identifier: None,
            stats,
            class,
            mounts: Vec::new(),
            bays: Vec::new(),
            system_slots: 0,
            point_cost: 0,
            traits: BTreeMap::new(),
            systems: Vec::new(),
        }
    }

    /// Stat value, zero when unset.
    pub fn stat(&self, stat: ShipStat) -> i32 {
        self.stats.get(&stat).copied().unwrap_or(0)
    }

    /// Slots still open for slot-costing systems.
    pub fn free_system_slots(&self) -> u32 {
        let used: u32 = self.systems.iter().map(|s| s.slots).sum();
        self.system_slots.saturating_sub(used)
    }

    /// Systems that occupy no slots.
    pub fn core_systems(&self) -> impl Iterator<Item = &ShipSystem> {
        self.systems.iter().filter(|s| s.is_core())
    }

    /// Systems competing for the hull's slots.
    pub fn slot_systems(&self) -> impl Iterator<Item = &ShipSystem> {
        self.systems.iter().filter(|s| !s.is_core())
    }

    /// Check whether the system could be installed right now.
    pub fn can_equip_system(&self, system: &ShipSystem) -> EquipResult {
        let free = self.free_system_slots();
        if system.slots > free {
            return Err(EquipError::NotEnoughSlots {
                needed: system.slots,
                free,
            });
        }
        if !system.equippable_classes.contains(&self.class) {
            return Err(EquipError::ClassNotAllowed(self.class));
        }
        Ok(())
    }

    /// Install the system.
    pub fn equip_system(&mut self, system: ShipSystem) -> EquipResult {
        self.can_equip_system(&system)?;
        self.systems.push(system);
        Ok(())
    }

    /// Remove the first slot-costing system with a matching name.
    ///
    /// Core systems are part of the hull and cannot be removed.
    pub fn remove_system(&mut self, name: &str) -> Option<ShipSystem> {
        let index = self
            .systems
            .iter()
            .position(|s| !s.is_core() && s.name.eq_ignore_ascii_case(name))?;
        Some(self.systems.remove(index))
    }

    pub fn has_system(&self, name: &str) -> bool {
        self.systems.iter().any(|s| s.name == name)
    }
}
