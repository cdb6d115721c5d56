//! Error types for equip operations

use crate::ShipClass;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EquipError {
    #[error("Weapon size {weapon} exceeds mount size {mount}")]
    WeaponTooLarge { weapon: u32, mount: u32 },

    #[error("Spinal weapons can only be fitted to a spinal mount")]
    SpinalOnly,

    #[error("Craft size {craft} exceeds bay size {bay}")]
    CraftTooLarge { craft: u32, bay: u32 },

    #[error("System needs {needed} slots but only {free} are free")]
    NotEnoughSlots { needed: u32, free: u32 },

    #[error("System cannot be installed on a {0} hull")]
    ClassNotAllowed(ShipClass),
}

pub type EquipResult = std::result::Result<(), EquipError>;
