//! Ship Model - Hull, armament, and system data types with equip rules
//!
//! This crate provides the data model behind a ship character sheet:
//! hull statistics, weapon mounts, payload bays, and installed systems,
//! together with the eligibility rules that govern what may be equipped
//! where.

mod stat;
mod class;
mod arc;
mod weapon;
mod craft;
mod system;
mod mount;
mod bay;
mod ship;
mod error;

pub use stat::*;
pub use class::*;
pub use arc::*;
pub use weapon::*;
pub use craft::*;
pub use system::*;
pub use mount::*;
pub use bay::*;
pub use ship::*;
pub use error::*;
