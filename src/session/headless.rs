//! Headless AI vs AI matches
//!
//! No rendering and no pacing: each match runs to a knockout or the turn
//! limit on the calling thread. Matches share nothing, so batch runners can
//! play many of them in parallel.

use serde::Serialize;

use crate::ai::{ActionSelector, RandomSelector, TurnPlan};
use crate::catalog::{FighterDefinition, StageDefinition};
use crate::combat::{resolve_phase, CombatantState, PhaseResolution};
use crate::core::config::MatchSettings;
use crate::core::types::{PhaseIndex, TurnNumber};
use crate::session::MatchResult;

/// Resolve up to three phases in order, stopping at the first knockout
pub fn resolve_turn(
    p1: &CombatantState,
    p2: &CombatantState,
    p1_plan: &TurnPlan,
    p2_plan: &TurnPlan,
    stage: &StageDefinition,
) -> Vec<PhaseResolution> {
    let mut phases: Vec<PhaseResolution> = Vec::with_capacity(p1_plan.len());
    for (i, (&a1, &a2)) in p1_plan.iter().zip(p2_plan.iter()).enumerate() {
        let (cur1, cur2) = match phases.last() {
            Some(prev) => (&prev.p1_next, &prev.p2_next),
            None => (p1, p2),
        };
        let resolution = resolve_phase(cur1, cur2, a1, a2, (i + 1) as PhaseIndex, stage);
        let knockout = resolution.is_knockout();
        phases.push(resolution);
        if knockout {
            break;
        }
    }
    phases
}

/// Inputs for one headless match
#[derive(Debug, Clone)]
pub struct MatchSetup {
    pub p1_fighter: &'static FighterDefinition,
    pub p2_fighter: &'static FighterDefinition,
    pub stage: &'static StageDefinition,
    pub seed: u64,
    pub settings: MatchSettings,
}

/// Serializable result of a headless match
#[derive(Debug, Clone, Serialize)]
pub struct MatchSummary {
    pub seed: u64,
    pub p1_fighter: &'static str,
    pub p2_fighter: &'static str,
    pub stage: &'static str,
    pub result: MatchResult,
    pub turns: TurnNumber,
    pub phases: u32,
    pub p1_hp: i32,
    pub p2_hp: i32,
    pub p1_energy: i32,
    pub p2_energy: i32,
}

/// Play one match between two random selectors seeded from `setup.seed`
pub fn simulate_match(setup: &MatchSetup) -> MatchSummary {
    let mut p1_ai = RandomSelector::with_seed(setup.seed);
    let mut p2_ai = RandomSelector::with_seed(setup.seed.wrapping_add(1));

    let mut p1 = CombatantState::new(setup.p1_fighter, setup.settings.p1_start, true);
    let mut p2 = CombatantState::new(setup.p2_fighter, setup.settings.p2_start, false);
    let mut turns: TurnNumber = 0;
    let mut phases = 0u32;
    let mut result = None;

    while turns < setup.settings.max_turns {
        turns += 1;
        let plan1 = p1_ai.select_turn(&p1);
        let plan2 = p2_ai.select_turn(&p2);
        let resolved = resolve_turn(&p1, &p2, &plan1, &plan2, setup.stage);
        phases += resolved.len() as u32;
        if let Some(last) = resolved.into_iter().last() {
            p1 = last.p1_next;
            p2 = last.p2_next;
        }

        result = MatchResult::from_states(&p1, &p2);
        if result.is_some() {
            break;
        }
    }

    let result = result.unwrap_or(MatchResult::Draw);
    tracing::debug!(seed = setup.seed, turns, ?result, "Headless match finished");

    MatchSummary {
        seed: setup.seed,
        p1_fighter: setup.p1_fighter.id,
        p2_fighter: setup.p2_fighter.id,
        stage: setup.stage.id,
        result,
        turns,
        phases,
        p1_hp: p1.current_hp,
        p2_hp: p2.current_hp,
        p1_energy: p1.current_energy,
        p2_energy: p2.current_energy,
    }
}
