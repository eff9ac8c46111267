//! Phase narration and flavor quotes
//!
//! The description is built only from the phase's events and is fully
//! deterministic. Quotes are picked from small pools with the RNG the
//! caller passes in.

use crate::combat::action::ActionChoice;
use crate::combat::combatant::CombatantState;
use crate::combat::outcome::{HitKind, PhaseEvent};
use crate::core::types::Side;
use rand::seq::SliceRandom;
use rand::Rng;

const STANDOFF_LINE: &str = "Both fighters take a defensive stance. Menacing...";
const IDLE_LINE: &str = "The fighters size each other up.";

const ATTACK_QUOTES: &[&str] = &["ORA!", "Take this!", "Too slow!", "Hyaaa!", "Eat this!"];
const HIT_QUOTES: &[&str] = &["Gwah!", "N-Nani?!", "Impossible!", "Damn!", "Guh!"];
const BLOCK_QUOTES: &[&str] = &["Useless!", "Weak!", "Is that all?", "Hmph.", "Predictable!"];
const SKILL_QUOTES: &[&str] = &["Die!", "Maximum Power!", "Begone!"];
const JUMP_QUOTES: &[&str] = &["Up here!", "Missed!", "Fly!", "Too slow!"];
const GRIT_QUOTES: &[&str] = &["Gnnnh!", "Ugh...!"];
const WALL_SUFFIX: &str = "(Wall!)";

/// Build the phase description from its events
///
/// Falls back to movement flavor when no event produced text, and to a
/// stand-off line when both sides only blocked.
pub fn describe(
    events: &[PhaseEvent],
    p1: &CombatantState,
    p2: &CombatantState,
    p1_action: ActionChoice,
    p2_action: ActionChoice,
) -> String {
    let states = [p1, p2];
    let name = |side: Side| states[side.index()].fighter.name;

    let mut lines: Vec<String> = events
        .iter()
        .map(|event| match event {
            PhaseEvent::EnergyDrained { .. } => "Spirits drain energy...".to_string(),
            PhaseEvent::MoveSlowed { side, .. } => format!("Ink slows {}!", name(*side)),
            PhaseEvent::HighJump { side } => format!("(Zero-G Jump by {}!)", name(*side)),
            PhaseEvent::WindPush { .. } => "The wind howls!".to_string(),
            PhaseEvent::Hit {
                attacker,
                kind,
                blocked,
                ..
            } => {
                let att = name(*attacker);
                let def = name(attacker.opponent());
                let skill = states[attacker.index()].fighter.skill_name;
                match (kind, blocked) {
                    (HitKind::Melee, false) => format!("{} HITS {}!", att, def),
                    (HitKind::Melee, true) => format!("{} BLOCKS {}'s attack!", def, att),
                    (HitKind::Skill, false) => format!("{} lands {}!", att, skill),
                    (HitKind::Skill, true) => format!("{} barely survives {}!", def, skill),
                    (HitKind::Stomp, _) => format!("{} lands on {} from above!", att, def),
                }
            }
            PhaseEvent::WallSplat { side, .. } => format!("{} slams into the wall! Wall Splat!", name(*side)),
        })
        .collect();

    if lines.is_empty() {
        if p1_action == ActionChoice::Block && p2_action == ActionChoice::Block {
            return STANDOFF_LINE.to_string();
        }
        match p1_action {
            ActionChoice::MoveForward | ActionChoice::Jump => lines.push(format!("{} approaches.", p1.fighter.name)),
            ActionChoice::MoveBackward => lines.push(format!("{} retreats.", p1.fighter.name)),
            _ => {}
        }
        match p2_action {
            ActionChoice::MoveForward | ActionChoice::Jump => lines.push(format!("{} closes in.", p2.fighter.name)),
            ActionChoice::MoveBackward => lines.push(format!("{} keeps distance.", p2.fighter.name)),
            _ => {}
        }
    }

    if lines.is_empty() {
        return IDLE_LINE.to_string();
    }
    lines.join(" ")
}

fn pick<R: Rng + ?Sized>(pool: &[&str], rng: &mut R) -> Option<String> {
    pool.choose(rng).map(|q| q.to_string())
}

fn action_quote<R: Rng + ?Sized>(action: ActionChoice, state: &CombatantState, rng: &mut R) -> Option<String> {
    match action {
        ActionChoice::Attack => pick(ATTACK_QUOTES, rng),
        ActionChoice::Block => pick(BLOCK_QUOTES, rng),
        ActionChoice::Jump => pick(JUMP_QUOTES, rng),
        ActionChoice::Skill => {
            // The skill shout competes with the generic pool
            let index = rng.gen_range(0..=SKILL_QUOTES.len());
            match SKILL_QUOTES.get(index) {
                Some(q) => Some(q.to_string()),
                None => Some(format!("{}!", state.fighter.skill_name)),
            }
        }
        _ => None,
    }
}

/// Pick a short shout for each side
///
/// Each side starts with a line for its own action. Taking a hit replaces
/// the defender's line, and a wall splat tags it.
pub fn pick_quotes<R: Rng + ?Sized>(
    events: &[PhaseEvent],
    actions: [ActionChoice; 2],
    states: [&CombatantState; 2],
    rng: &mut R,
) -> (Option<String>, Option<String>) {
    let mut quotes = [
        action_quote(actions[0], states[0], rng),
        action_quote(actions[1], states[1], rng),
    ];

    for event in events {
        match event {
            PhaseEvent::Hit {
                attacker,
                kind,
                blocked,
                ..
            } => {
                let pool = match (kind, blocked) {
                    (HitKind::Melee, true) => BLOCK_QUOTES,
                    (HitKind::Skill, true) => GRIT_QUOTES,
                    _ => HIT_QUOTES,
                };
                quotes[attacker.opponent().index()] = pick(pool, rng);
            }
            PhaseEvent::WallSplat { side, .. } => {
                let slot = &mut quotes[side.index()];
                *slot = Some(match slot.take() {
                    Some(q) => format!("{} {}", q, WALL_SUFFIX),
                    None => WALL_SUFFIX.to_string(),
                });
            }
            _ => {}
        }
    }

    let [q1, q2] = quotes;
    (q1, q2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::FIGHTERS;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn states() -> (CombatantState, CombatantState) {
        (
            CombatantState::new(&FIGHTERS[0], 1, true),
            CombatantState::new(&FIGHTERS[1], 5, false),
        )
    }

    #[test]
    fn test_standoff_line() {
        let (p1, p2) = states();
        let text = describe(&[], &p1, &p2, ActionChoice::Block, ActionChoice::Block);
        assert_eq!(text, STANDOFF_LINE);
    }

    #[test]
    fn test_movement_fallback() {
        let (p1, p2) = states();
        let text = describe(&[], &p1, &p2, ActionChoice::MoveForward, ActionChoice::MoveBackward);
        assert_eq!(text, "Kenshiro \"Iron Fist\" approaches. Rei \"The Shadow\" keeps distance.");
    }

    #[test]
    fn test_events_narrated_in_order() {
        let (p1, p2) = states();
        let events = vec![
            PhaseEvent::WindPush { cells: 1 },
            PhaseEvent::Hit {
                attacker: Side::Two,
                kind: HitKind::Melee,
                blocked: false,
                damage: 10,
            },
        ];
        let text = describe(&events, &p1, &p2, ActionChoice::MoveForward, ActionChoice::Attack);
        assert_eq!(text, "The wind howls! Rei \"The Shadow\" HITS Kenshiro \"Iron Fist\"!");
    }

    #[test]
    fn test_blocked_skill_names_the_skill() {
        let (p1, p2) = states();
        let events = vec![PhaseEvent::Hit {
            attacker: Side::One,
            kind: HitKind::Skill,
            blocked: true,
            damage: 15,
        }];
        let text = describe(&events, &p1, &p2, ActionChoice::Skill, ActionChoice::Block);
        assert!(text.contains("barely survives North Star Barrage"));
    }

    #[test]
    fn test_idle_fallback() {
        let (p1, p2) = states();
        assert_eq!(describe(&[], &p1, &p2, ActionChoice::None, ActionChoice::Attack), IDLE_LINE);
    }

    #[test]
    fn test_hit_replaces_defender_quote() {
        let (p1, p2) = states();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let events = vec![PhaseEvent::Hit {
            attacker: Side::One,
            kind: HitKind::Melee,
            blocked: false,
            damage: 10,
        }];
        let (q1, q2) = pick_quotes(&events, [ActionChoice::Attack, ActionChoice::None], [&p1, &p2], &mut rng);
        assert!(ATTACK_QUOTES.contains(&q1.unwrap().as_str()));
        assert!(HIT_QUOTES.contains(&q2.unwrap().as_str()));
    }

    #[test]
    fn test_wall_splat_tags_quote() {
        let (p1, p2) = states();
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let events = vec![
            PhaseEvent::Hit {
                attacker: Side::Two,
                kind: HitKind::Stomp,
                blocked: false,
                damage: 15,
            },
            PhaseEvent::WallSplat {
                side: Side::One,
                damage: 5,
            },
        ];
        let (q1, _) = pick_quotes(&events, [ActionChoice::None, ActionChoice::Jump], [&p1, &p2], &mut rng);
        assert!(q1.unwrap().ends_with(WALL_SUFFIX));
    }

    #[test]
    fn test_no_quote_for_quiet_actions() {
        let (p1, p2) = states();
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let quotes = pick_quotes(&[], [ActionChoice::None, ActionChoice::MoveForward], [&p1, &p2], &mut rng);
        assert_eq!(quotes, (None, None));
    }

    #[test]
    fn test_quotes_reproducible_with_seed() {
        let (p1, p2) = states();
        let actions = [ActionChoice::Skill, ActionChoice::Jump];
        let a = pick_quotes(&[], actions, [&p1, &p2], &mut ChaCha8Rng::seed_from_u64(42));
        let b = pick_quotes(&[], actions, [&p1, &p2], &mut ChaCha8Rng::seed_from_u64(42));
        assert_eq!(a, b);
    }
}
