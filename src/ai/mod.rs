//! Opponent action selection
//!
//! Architecture: trait + implementations
//! - ActionSelector defines the interface the controller calls once per turn
//! - RandomSelector is the default opponent
//! - ScriptedSelector replays fixed queues for tests and demos
//!
//! Selection is simultaneous-move. A selector only sees its own side's
//! state at the start of the turn, never the other side's choices.

mod random;
mod scripted;

pub use random::RandomSelector;
pub use scripted::ScriptedSelector;

use crate::combat::constants::PHASES_PER_TURN;
use crate::combat::{ActionChoice, CombatantState};

/// Three actions, one per phase
pub type TurnPlan = [ActionChoice; PHASES_PER_TURN];

/// Trait for anything that commits a side's actions for a turn
pub trait ActionSelector: Send {
    /// Pick this side's actions for the coming turn
    fn select_turn(&mut self, own: &CombatantState) -> TurnPlan;
}
