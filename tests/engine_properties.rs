//! Property tests for phase resolution
//!
//! Arbitrary fighters, stages, positions, meters and actions must always
//! resolve to in-range snapshots.

use manga_clash::catalog::{FIGHTERS, STAGES};
use manga_clash::combat::constants::GRID_SIZE;
use manga_clash::combat::{resolve_phase, ActionChoice, CombatantState};
use proptest::prelude::*;

fn action_strategy() -> impl Strategy<Value = ActionChoice> {
    prop::sample::select(ActionChoice::ALL.to_vec())
}

fn combatant_strategy(facing_right: bool) -> impl Strategy<Value = CombatantState> {
    (0..FIGHTERS.len(), 0..=GRID_SIZE, 0.0f64..=1.0, 0.0f64..=1.0).prop_map(
        move |(idx, position, hp_frac, energy_frac)| {
            let fighter = &FIGHTERS[idx];
            let mut state = CombatantState::new(fighter, position, facing_right);
            state.current_hp = (fighter.max_hp as f64 * hp_frac).round() as i32;
            state.current_energy = (fighter.max_energy as f64 * energy_frac).round() as i32;
            state
        },
    )
}

proptest! {
    /// Property: resolved snapshots stay within HP, energy and grid bounds
    #[test]
    fn prop_snapshots_stay_in_bounds(
        p1 in combatant_strategy(true),
        p2 in combatant_strategy(false),
        a1 in action_strategy(),
        a2 in action_strategy(),
        stage_idx in 0..STAGES.len(),
    ) {
        let r = resolve_phase(&p1, &p2, a1, a2, 1, &STAGES[stage_idx]);
        for state in [&r.p1_next, &r.p2_next] {
            prop_assert!(state.current_hp >= 0);
            prop_assert!(state.current_energy >= 0);
            prop_assert!(state.current_energy <= state.fighter.max_energy);
            prop_assert!(state.position >= 0 && state.position <= GRID_SIZE);
        }
    }

    /// Property: HP never goes up and facing never changes
    #[test]
    fn prop_no_healing_no_turning(
        p1 in combatant_strategy(true),
        p2 in combatant_strategy(false),
        a1 in action_strategy(),
        a2 in action_strategy(),
        stage_idx in 0..STAGES.len(),
    ) {
        let r = resolve_phase(&p1, &p2, a1, a2, 1, &STAGES[stage_idx]);
        prop_assert!(r.p1_next.current_hp <= p1.current_hp);
        prop_assert!(r.p2_next.current_hp <= p2.current_hp);
        prop_assert!(r.p1_next.facing_right && !r.p2_next.facing_right);
    }

    /// Property: stance flags reflect only this phase's actions
    #[test]
    fn prop_transient_flags_follow_actions(
        mut p1 in combatant_strategy(true),
        p2 in combatant_strategy(false),
        a1 in action_strategy(),
        a2 in action_strategy(),
    ) {
        p1.is_blocking = true;
        p1.is_jumping = true;
        let r = resolve_phase(&p1, &p2, a1, a2, 1, &STAGES[0]);
        prop_assert_eq!(r.p1_next.is_blocking, a1 == ActionChoice::Block);
        prop_assert_eq!(r.p1_next.is_jumping, a1 == ActionChoice::Jump);
        prop_assert_eq!(r.p2_next.is_blocking, a2 == ActionChoice::Block);
        prop_assert_eq!(r.p2_next.is_jumping, a2 == ActionChoice::Jump);
    }

    /// Property: resolution is a pure function of its inputs
    #[test]
    fn prop_resolution_is_deterministic(
        p1 in combatant_strategy(true),
        p2 in combatant_strategy(false),
        a1 in action_strategy(),
        a2 in action_strategy(),
        stage_idx in 0..STAGES.len(),
    ) {
        let stage = &STAGES[stage_idx];
        let first = resolve_phase(&p1, &p2, a1, a2, 2, stage);
        let second = resolve_phase(&p1, &p2, a1, a2, 2, stage);
        prop_assert_eq!(first, second);
    }
}
