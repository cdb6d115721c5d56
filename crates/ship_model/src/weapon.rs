//! Mounted weapons

use serde::{Deserialize, Serialize};

/// A weapon that can be fitted to a mount.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Weapon {
    pub name: String,
    pub size: u32,
    pub range: i32,
    /// Damage dice, e.g. "2d6+1".
    pub damage: String,
    #[serde(default)]
    pub ammo_cost: i32,
    #[serde(default)]
    pub power_cost: i32,
    #[serde(default)]
    pub armor_penetration: i32,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Weapon {
    /// Shots fired per attack, as a count or dice expression.
    ///
    /// EWAR weapons always resolve once. Otherwise a "Shots N" tag
    /// carries the value as its last token, and the default is one.
    pub fn shots(&self) -> String {
        if self.tags.iter().any(|t| t == "EWAR") {
            return "1".to_string();
        }
        match self.tags.iter().find(|t| t.starts_with("Shots")) {
            Some(tag) => tag.rsplit(' ').next().unwrap_or("1").to_string(),
            None => "1".to_string(),
        }
    }

    pub fn is_spinal(&self) -> bool {
        self.tags.iter().any(|t| t == "Spinal")
    }
}
