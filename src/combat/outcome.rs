//! Structured record of what happened in one phase

use crate::combat::action::ActionChoice;
use crate::combat::combatant::CombatantState;
use crate::core::types::{PhaseIndex, Side};
use serde::Serialize;

/// How a hit was delivered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HitKind {
    Melee,
    Skill,
    Stomp,
}

/// A notable occurrence during resolution, in the order it happened
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum PhaseEvent {
    /// Stage drained energy from both sides
    EnergyDrained { amount: i32 },
    /// A move paid the stage's movement cost
    MoveSlowed { side: Side, cost: i32 },
    /// A jump travelled further than normal
    HighJump { side: Side },
    /// Stage wind shoved both sides toward the high end
    WindPush { cells: i32 },
    Hit {
        attacker: Side,
        kind: HitKind,
        blocked: bool,
        damage: i32,
    },
    /// Damaged side ended on a boundary cell
    WallSplat { side: Side, damage: i32 },
}

/// Outcome of one phase, consumed by the controller and the renderer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhaseOutcome {
    pub phase_index: PhaseIndex,
    pub p1_action: ActionChoice,
    pub p2_action: ActionChoice,
    pub description: String,
    /// Pre-clamp sum of HP adjustments
    pub p1_hp_change: i32,
    pub p2_hp_change: i32,
    /// Pre-clamp sum of energy adjustments, costs included
    pub p1_energy_change: i32,
    pub p2_energy_change: i32,
    pub p1_quote: Option<String>,
    pub p2_quote: Option<String>,
    pub events: Vec<PhaseEvent>,
}

impl PhaseOutcome {
    pub fn action(&self, side: Side) -> ActionChoice {
        match side {
            Side::One => self.p1_action,
            Side::Two => self.p2_action,
        }
    }

    pub fn hp_change(&self, side: Side) -> i32 {
        match side {
            Side::One => self.p1_hp_change,
            Side::Two => self.p2_hp_change,
        }
    }

    pub fn energy_change(&self, side: Side) -> i32 {
        match side {
            Side::One => self.p1_energy_change,
            Side::Two => self.p2_energy_change,
        }
    }

    pub fn quote(&self, side: Side) -> Option<&str> {
        match side {
            Side::One => self.p1_quote.as_deref(),
            Side::Two => self.p2_quote.as_deref(),
        }
    }

    /// True if any attack connected this phase
    pub fn had_hit(&self) -> bool {
        self.events.iter().any(|e| matches!(e, PhaseEvent::Hit { .. }))
    }
}

/// Both next-state snapshots plus the outcome record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhaseResolution {
    pub p1_next: CombatantState,
    pub p2_next: CombatantState,
    pub outcome: PhaseOutcome,
}

impl PhaseResolution {
    pub fn state(&self, side: Side) -> &CombatantState {
        match side {
            Side::One => &self.p1_next,
            Side::Two => &self.p2_next,
        }
    }

    /// Either side reached zero HP
    pub fn is_knockout(&self) -> bool {
        self.p1_next.is_defeated() || self.p2_next.is_defeated()
    }
}
