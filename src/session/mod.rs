//! Match flow around the engine
//!
//! - [`MatchController`] drives an interactive match: selection, the human
//!   action queue, phase-by-phase resolution with rendering, and game over
//! - [`headless`] plays AI vs AI matches synchronously for batch runs

pub mod controller;
pub mod headless;

pub use controller::{MatchController, PhaseReport, TurnReport};
pub use headless::{resolve_turn, simulate_match, MatchSetup, MatchSummary};

use serde::Serialize;

use crate::combat::CombatantState;
use crate::core::types::Side;

/// Screen-level state of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GamePhase {
    Menu,
    Selection,
    BattleInput,
    BattleResolution,
    GameOver,
}

/// How a finished match ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchResult {
    Winner(Side),
    /// Double knockout or turn limit reached
    Draw,
}

impl MatchResult {
    /// Decide the result from final states; `None` while both still stand
    pub fn from_states(p1: &CombatantState, p2: &CombatantState) -> Option<Self> {
        match (p1.is_defeated(), p2.is_defeated()) {
            (false, false) => None,
            (false, true) => Some(MatchResult::Winner(Side::One)),
            (true, false) => Some(MatchResult::Winner(Side::Two)),
            (true, true) => Some(MatchResult::Draw),
        }
    }
}
