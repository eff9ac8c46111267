//! Static fighter and stage data
//!
//! Everything here is defined at compile time and never mutated. A match
//! copies the definitions it needs into its own state.

pub mod fighters;
pub mod stages;

pub use fighters::{find_fighter, FighterDefinition, FIGHTERS};
pub use stages::{find_stage, Hazard, HazardModifiers, StageDefinition, STAGES};
