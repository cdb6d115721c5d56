//! Weapon mounts

use crate::{EquipError, EquipResult, PositionArc, Weapon};
use serde::{Deserialize, Serialize};

/// Traverse of a mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MountKind {
    Fixed,
    Turret,
    Omni,
}

impl MountKind {
    pub fn letter(&self) -> char {
        match self {
            MountKind::Fixed => 'F',
            MountKind::Turret => 'T',
            MountKind::Omni => 'O',
        }
    }
}

fn default_count() -> u32 {
    1
}

/// A hardpoint a weapon can be fitted to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Mount {
    pub size: u32,
    #[serde(default = "default_count")]
    pub count: u32,
    pub kind: MountKind,
    pub main_arc: PositionArc,
    #[serde(default)]
    pub is_spinal: bool,
    #[serde(default)]
    pub weapon: Option<Weapon>,
}

impl Mount {
    /// Check whether the weapon fits this mount.
    pub fn can_equip(&self, weapon: &Weapon) -> EquipResult {
        if weapon.size > self.size {
            return Err(EquipError::WeaponTooLarge {
                weapon: weapon.size,
                mount: self.size,
            });
        }
        if weapon.is_spinal() && !self.is_spinal {
            return Err(EquipError::SpinalOnly);
        }
        Ok(())
    }

    /// Fit the weapon, replacing whatever was mounted before.
    pub fn equip(&mut self, weapon: Weapon) -> EquipResult {
        self.can_equip(&weapon)?;
        self.weapon = Some(weapon);
        Ok(())
    }

    pub fn unequip(&mut self) {
        self.weapon = None;
    }

    /// Position code printed on the sheet: main arc letter plus the
    /// traverse letter, or "S" for spinal mounts. E.g. "FT", "FS".
    pub fn position_code(&self) -> String {
        if self.is_spinal {
            format!("{}S", self.main_arc.letter())
        } else {
            format!("{}{}", self.main_arc.letter(), self.kind.letter())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_mount(size: u32, spinal: bool) -> Mount {
        Mount {
            size,
            count: 1,
            kind: MountKind::Turret,
            main_arc: PositionArc::Forward,
            is_spinal: spinal,
            weapon: None,
        }
    }

    fn test_weapon(size: u32, tags: &[&str]) -> Weapon {
        Weapon {
            name: "Test Gun".to_string(),
            size,
            range: 10,
            damage: "1d6".to_string(),
            ammo_cost: 0,
            power_cost: 0,
            armor_penetration: 0,
            description: String::new(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[test]
    fn test_equip_size_limit() {
        let mut mount = test_mount(2, false);
        assert_eq!(
            mount.equip(test_weapon(3, &[])),
            Err(EquipError::WeaponTooLarge { weapon: 3, mount: 2 })
        );
        assert!(mount.equip(test_weapon(2, &[])).is_ok());
        assert!(mount.weapon.is_some());
    }

    #[test]
    fn test_spinal_requires_spinal_mount() {
        let mut mount = test_mount(4, false);
        assert_eq!(
            mount.equip(test_weapon(2, &["Spinal"])),
            Err(EquipError::SpinalOnly)
        );

        let mut spinal_mount = test_mount(4, true);
        assert!(spinal_mount.equip(test_weapon(2, &["Spinal"])).is_ok());
    }

    #[test]
    fn test_position_codes() {
        assert_eq!(test_mount(1, false).position_code(), "FT");
        assert_eq!(test_mount(1, true).position_code(), "FS");

        let mut fixed = test_mount(1, false);
        fixed.kind = MountKind::Fixed;
        fixed.main_arc = PositionArc::Port;
        assert_eq!(fixed.position_code(), "PF");
    }
}
