//! Uniform random opponent

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::ai::{ActionSelector, TurnPlan};
use crate::combat::constants::PHASES_PER_TURN;
use crate::combat::{ActionChoice, CombatantState};

/// Actions always on the table
const BASE_CANDIDATES: [ActionChoice; 5] = [
    ActionChoice::MoveForward,
    ActionChoice::MoveBackward,
    ActionChoice::Attack,
    ActionChoice::Block,
    ActionChoice::Jump,
];

/// Picks every phase uniformly from the legal candidates
pub struct RandomSelector {
    rng: ChaCha8Rng,
}

impl RandomSelector {
    /// Create a selector seeded from entropy
    pub fn new() -> Self {
        Self {
            rng: ChaCha8Rng::from_entropy(),
        }
    }

    /// Create with specific RNG seed for deterministic behavior
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Legal candidates given energy at the start of the turn
    pub fn candidates(own: &CombatantState) -> Vec<ActionChoice> {
        let mut candidates = BASE_CANDIDATES.to_vec();
        if own.can_afford_skill() {
            candidates.push(ActionChoice::Skill);
        }
        candidates
    }
}

impl Default for RandomSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl ActionSelector for RandomSelector {
    fn select_turn(&mut self, own: &CombatantState) -> TurnPlan {
        // Energy is checked once; later phases may still pick SKILL
        // after an earlier SKILL has spent it
        let candidates = Self::candidates(own);
        let mut plan = [ActionChoice::None; PHASES_PER_TURN];
        for slot in plan.iter_mut() {
            *slot = *candidates
                .choose(&mut self.rng)
                .unwrap_or(&ActionChoice::None);
        }
        plan
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::FIGHTERS;

    #[test]
    fn test_no_skill_when_poor() {
        let state = CombatantState::new(&FIGHTERS[0], 5, false);
        let mut selector = RandomSelector::with_seed(1);
        for _ in 0..200 {
            let plan = selector.select_turn(&state);
            assert!(!plan.contains(&ActionChoice::Skill));
            assert!(!plan.contains(&ActionChoice::None));
        }
    }

    #[test]
    fn test_skill_offered_when_affordable() {
        let mut state = CombatantState::new(&FIGHTERS[0], 5, false);
        state.current_energy = state.fighter.skill_cost;
        assert_eq!(RandomSelector::candidates(&state).len(), 6);

        let mut selector = RandomSelector::with_seed(7);
        let picked_skill = (0..200)
            .flat_map(|_| selector.select_turn(&state))
            .any(|a| a == ActionChoice::Skill);
        assert!(picked_skill);
    }

    fn frequencies(state: &CombatantState, seed: u64, turns: usize) -> Vec<(ActionChoice, usize)> {
        let mut selector = RandomSelector::with_seed(seed);
        let draws: Vec<ActionChoice> = (0..turns).flat_map(|_| selector.select_turn(state)).collect();
        RandomSelector::candidates(state)
            .into_iter()
            .map(|a| (a, draws.iter().filter(|&&d| d == a).count()))
            .collect()
    }

    #[test]
    fn test_choice_is_uniform() {
        // 9000 draws per case; each candidate within 20% of its fair share
        let poor = CombatantState::new(&FIGHTERS[0], 5, false);
        let mut rich = poor.clone();
        rich.current_energy = rich.fighter.max_energy;

        for (state, seed) in [(&poor, 3), (&rich, 4)] {
            let counts = frequencies(state, seed, 3000);
            let expected = 9000 / counts.len();
            for (action, count) in counts {
                assert!(
                    count * 5 > expected * 4 && count * 5 < expected * 6,
                    "{:?} drawn {} times, expected about {}",
                    action,
                    count,
                    expected
                );
            }
        }
    }

    #[test]
    fn test_same_seed_same_plans() {
        let state = CombatantState::new(&FIGHTERS[3], 5, false);
        let mut a = RandomSelector::with_seed(99);
        let mut b = RandomSelector::with_seed(99);
        for _ in 0..20 {
            assert_eq!(a.select_turn(&state), b.select_turn(&state));
        }
    }
}
