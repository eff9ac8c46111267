//! Live per-side fighter state

use crate::catalog::FighterDefinition;
use crate::combat::constants::{GRID_SIZE, INITIAL_ENERGY_PERCENT};
use serde::Serialize;

/// One side's state at a phase boundary
///
/// The engine treats these as values: it reads two snapshots and returns
/// two new ones. Nothing mutates a snapshot in place after a phase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CombatantState {
    pub fighter: FighterDefinition,
    pub current_hp: i32,
    pub current_energy: i32,
    /// Grid cell, 0..=GRID_SIZE
    pub position: i32,
    /// Set only by this phase's BLOCK
    pub is_blocking: bool,
    /// Set only by this phase's JUMP
    pub is_jumping: bool,
    pub facing_right: bool,
}

impl CombatantState {
    /// Fresh state at match start: full HP, 30% energy, no transient flags
    pub fn new(fighter: &FighterDefinition, start_position: i32, facing_right: bool) -> Self {
        Self {
            fighter: fighter.clone(),
            current_hp: fighter.max_hp,
            current_energy: fighter.max_energy * INITIAL_ENERGY_PERCENT / 100,
            position: start_position.clamp(0, GRID_SIZE),
            is_blocking: false,
            is_jumping: false,
            facing_right,
        }
    }

    /// +1 when facing right, -1 when facing left
    pub fn forward(&self) -> i32 {
        if self.facing_right {
            1
        } else {
            -1
        }
    }

    pub fn is_defeated(&self) -> bool {
        self.current_hp <= 0
    }

    pub fn can_afford_skill(&self) -> bool {
        self.current_energy >= self.fighter.skill_cost
    }

    pub fn is_at_edge(&self) -> bool {
        self.position == 0 || self.position == GRID_SIZE
    }

    pub fn distance_to(&self, other: &Self) -> i32 {
        (self.position - other.position).abs()
    }
}
