//! Combat system constants - all tunable values in one place
//!
//! Integer arithmetic only. Hazard values are read through
//! [`crate::catalog::HazardModifiers`], not directly by the engine.

// Grid
pub const GRID_SIZE: i32 = 6;
pub const PHASES_PER_TURN: usize = 3;

// Starting resources
pub const INITIAL_ENERGY_PERCENT: i32 = 30;

// Movement
pub const MOVE_DISTANCE: i32 = 1;
pub const BASE_JUMP_DISTANCE: i32 = 2;
pub const HIGH_JUMP_DISTANCE: i32 = 3;
pub const STOMP_KNOCKBACK: i32 = 1;

// Reach
pub const MELEE_RANGE: i32 = 1;
pub const SKILL_RANGE: i32 = 3;

// Melee
pub const MELEE_DAMAGE: i32 = 10;
pub const MELEE_CHIP_DAMAGE: i32 = 2;
pub const MELEE_HIT_ENERGY_GAIN: i32 = 10;

// Skill
pub const SKILL_DAMAGE: i32 = 30;
pub const SKILL_BLOCKED_DAMAGE: i32 = 15;

// Stomp (ignores block)
pub const STOMP_DAMAGE: i32 = 15;

// Blocking any hit refunds the defender
pub const BLOCK_ENERGY_GAIN: i32 = 20;

// Hazards
pub const WIND_PUSH: i32 = 1;
pub const EDGE_SPLAT_DAMAGE: i32 = 5;
pub const STICKY_MOVE_COST: i32 = 5;
pub const SKILL_SURCHARGE: i32 = 10;
pub const DRAIN_ENERGY: i32 = 5;
