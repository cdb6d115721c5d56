//! Carried craft

use crate::ShipStat;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A craft carried in a bay: ordnance, a drone, or a deployable pod.
///
/// Ordnance carries damage dice of its own; deployables leave `damage`
/// unset and print an empty damage cell.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Craft {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub size: u32,
    #[serde(default)]
    pub stats: BTreeMap<ShipStat, i32>,
    #[serde(default)]
    pub ammo_cost: i32,
    #[serde(default)]
    pub power_cost: i32,
    #[serde(default)]
    pub damage: Option<String>,
    #[serde(default)]
    pub armor_penetration: i32,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Craft {
    /// Stat value, zero when the craft does not carry the stat.
    pub fn stat(&self, stat: ShipStat) -> i32 {
        self.stats.get(&stat).copied().unwrap_or(0)
    }

    /// Number launched per salvo, from a "Swarm N" tag.
    pub fn swarm(&self) -> String {
        match self.tags.iter().find(|t| t.starts_with("Swarm")) {
            Some(tag) => tag.rsplit(' ').next().unwrap_or("1").to_string(),
            None => "1".to_string(),
        }
    }
}
