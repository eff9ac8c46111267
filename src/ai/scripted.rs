//! Fixed-sequence selector for tests and replays

use std::collections::VecDeque;

use crate::ai::{ActionSelector, TurnPlan};
use crate::combat::constants::PHASES_PER_TURN;
use crate::combat::{ActionChoice, CombatantState};

/// Replays queued turn plans in order, then idles
#[derive(Debug, Default, Clone)]
pub struct ScriptedSelector {
    plans: VecDeque<TurnPlan>,
}

impl ScriptedSelector {
    pub fn new(plans: impl IntoIterator<Item = TurnPlan>) -> Self {
        Self {
            plans: plans.into_iter().collect(),
        }
    }

    /// Same plan every turn, `turns` times
    pub fn repeat(plan: TurnPlan, turns: usize) -> Self {
        Self::new(std::iter::repeat(plan).take(turns))
    }

    pub fn remaining(&self) -> usize {
        self.plans.len()
    }
}

impl ActionSelector for ScriptedSelector {
    fn select_turn(&mut self, _own: &CombatantState) -> TurnPlan {
        self.plans.pop_front().unwrap_or([ActionChoice::None; PHASES_PER_TURN])
    }
}
