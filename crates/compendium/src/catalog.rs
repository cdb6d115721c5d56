//! Catalog loading and lookups

use crate::{CompendiumError, Result};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use ship_model::{Craft, Ship, ShipClass, ShipSystem, Weapon};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

// File names inside the data directory.
const WEAPON_LIST: &str = "weapons.json";
const SYSTEM_LIST: &str = "systems.json";
const SHIP_LIST: &str = "ships.json";
const CRAFT_LIST: &str = "craft.json";
const DEFAULT_TRAITS: &str = "default_traits.json";

#[derive(Deserialize)]
struct WeaponFile {
    weapons: Vec<Weapon>,
}

#[derive(Deserialize)]
struct SystemFile {
    default: Vec<ShipSystem>,
    slots: Vec<ShipSystem>,
}

#[derive(Deserialize)]
struct ShipFile {
    ships: Vec<Ship>,
}

#[derive(Deserialize)]
struct CraftFile {
    payloads: Vec<Craft>,
    deployables: Vec<Craft>,
}

/// The master lists a shell session works from.
pub struct Compendium {
    weapons: Vec<Weapon>,
    default_systems: Vec<ShipSystem>,
    slot_systems: Vec<ShipSystem>,
    ships: Vec<Ship>,
    crafts: Vec<Craft>,
    default_traits: BTreeMap<ShipClass, BTreeMap<String, String>>,
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let contents = fs::read_to_string(path).map_err(|source| CompendiumError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|source| CompendiumError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

impl Compendium {
    /// Load every master list from the given data directory.
    pub fn load(dir: &Path) -> Result<Self> {
        let weapons: WeaponFile = read_json(&dir.join(WEAPON_LIST))?;
        let systems: SystemFile = read_json(&dir.join(SYSTEM_LIST))?;
        let ships: ShipFile = read_json(&dir.join(SHIP_LIST))?;
        let craft: CraftFile = read_json(&dir.join(CRAFT_LIST))?;
        let default_traits = read_json(&dir.join(DEFAULT_TRAITS))?;

        let mut crafts = craft.payloads;
        crafts.extend(craft.deployables);

        Ok(Self {
            weapons: weapons.weapons,
            default_systems: systems.default,
            slot_systems: systems.slots,
            ships: ships.ships,
            crafts,
            default_traits,
        })
    }

    /// Load the lists shipped with this crate.
    pub fn load_default() -> Result<Self> {
        Self::load(Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/data")))
    }

    /// Weapon with the exact name.
    pub fn weapon(&self, name: &str) -> Option<&Weapon> {
        self.weapons.iter().find(|w| w.name == name)
    }

    /// System with the exact name, searching core and slot lists.
    pub fn system(&self, name: &str) -> Option<&ShipSystem> {
        self.systems().find(|s| s.name == name)
    }

    /// Ship template whose name contains the query, ignoring case.
    pub fn ship(&self, name: &str) -> Option<&Ship> {
        let needle = name.to_lowercase();
        self.ships
            .iter()
            .find(|s| s.name.to_lowercase().contains(&needle))
    }

    /// Craft whose name contains the query, ignoring case.
    pub fn craft(&self, name: &str) -> Option<&Craft> {
        let needle = name.to_lowercase();
        self.crafts
            .iter()
            .find(|c| c.name.to_lowercase().contains(&needle))
    }

    pub fn weapons(&self) -> impl Iterator<Item = &Weapon> {
        self.weapons.iter()
    }

    /// Every system, core list first.
    pub fn systems(&self) -> impl Iterator<Item = &ShipSystem> {
        self.default_systems.iter().chain(self.slot_systems.iter())
    }

    /// Systems every hull carries by default.
    pub fn core_systems(&self) -> impl Iterator<Item = &ShipSystem> {
        self.systems().filter(|s| s.is_core())
    }

    pub fn ships(&self) -> impl Iterator<Item = &Ship> {
        self.ships.iter()
    }

    pub fn crafts(&self) -> impl Iterator<Item = &Craft> {
        self.crafts.iter()
    }

    /// Equip every default system the hull does not already carry.
    pub fn equip_default_systems(&self, ship: &mut Ship) {
        for system in self.core_systems() {
            if ship.has_system(&system.name) {
                continue;
            }
            if let Err(e) = ship.equip_system(system.clone()) {
                tracing::debug!("Skipping default system {}: {}", system.name, e);
            }
        }
    }

    /// Merge the class's default traits in, never overwriting ones the
    /// ship already has.
    pub fn apply_default_traits(&self, ship: &mut Ship) {
        let traits = match self.default_traits.get(&ship.class) {
            Some(traits) => traits,
            None => {
                tracing::warn!("No default traits for class {}", ship.class);
                return;
            }
        };
        for (name, text) in traits {
            if !ship.traits.contains_key(name) {
                ship.traits.insert(name.clone(), text.clone());
            }
        }
    }
}
