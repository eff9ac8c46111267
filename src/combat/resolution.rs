//! Phase resolution
//!
//! Turns two combatant snapshots and their chosen actions into two new
//! snapshots plus an outcome record. Pure and total: every combination of
//! inputs resolves, nothing is mutated, and the numbers depend only on the
//! inputs. Flavor quotes are the one random part and come from a caller
//! supplied RNG.
//!
//! Order matters. Drain, then simultaneous movement and costs, then wind,
//! then hit checks on the post-wind distance, then damage, then wall
//! splat, then clamping.

use crate::catalog::{HazardModifiers, StageDefinition};
use crate::combat::action::ActionChoice;
use crate::combat::combatant::CombatantState;
use crate::combat::constants::{
    BASE_JUMP_DISTANCE, BLOCK_ENERGY_GAIN, GRID_SIZE, MELEE_CHIP_DAMAGE, MELEE_DAMAGE,
    MELEE_HIT_ENERGY_GAIN, MELEE_RANGE, MOVE_DISTANCE, SKILL_BLOCKED_DAMAGE, SKILL_DAMAGE,
    SKILL_RANGE, STOMP_DAMAGE, STOMP_KNOCKBACK,
};
use crate::combat::narration;
use crate::combat::outcome::{HitKind, PhaseEvent, PhaseOutcome, PhaseResolution};
use crate::core::types::{PhaseIndex, Side};
use rand::Rng;

/// Working copy of one side while a phase is being resolved
struct SideWork {
    state: CombatantState,
    action: ActionChoice,
    hp_delta: i32,
    energy_delta: i32,
}

impl SideWork {
    fn start(state: &CombatantState, action: ActionChoice) -> Self {
        let mut state = state.clone();
        state.is_blocking = false;
        state.is_jumping = false;
        Self {
            state,
            action,
            hp_delta: 0,
            energy_delta: 0,
        }
    }
}

fn clamp_cell(position: i32) -> i32 {
    position.clamp(0, GRID_SIZE)
}

/// Resolve one phase without flavor quotes
pub fn resolve_phase(
    p1: &CombatantState,
    p2: &CombatantState,
    p1_action: ActionChoice,
    p2_action: ActionChoice,
    phase_index: PhaseIndex,
    stage: &StageDefinition,
) -> PhaseResolution {
    let mods = stage.hazard.modifiers();
    let mut sides = [SideWork::start(p1, p1_action), SideWork::start(p2, p2_action)];
    let mut events = Vec::new();

    // Passive drain comes before anything else
    if mods.energy_drain > 0 {
        for work in sides.iter_mut() {
            work.energy_delta -= mods.energy_drain;
        }
        events.push(PhaseEvent::EnergyDrained {
            amount: mods.energy_drain,
        });
    }

    // Each side moves from its own pre-phase position
    for side in Side::BOTH {
        apply_action(side, &mut sides[side.index()], &mods, &mut events);
    }

    if mods.push != 0 {
        for work in sides.iter_mut() {
            work.state.position = clamp_cell(work.state.position + mods.push);
        }
        events.push(PhaseEvent::WindPush { cells: mods.push });
    }

    let distance = sides[0].state.distance_to(&sides[1].state);

    // All hits are decided before any knockback moves a defender
    let hits: Vec<(Side, HitKind)> = Side::BOTH
        .into_iter()
        .filter_map(|attacker| {
            let a = &sides[attacker.index()];
            let d = &sides[attacker.opponent().index()];
            detect_hit(a, d, distance).map(|kind| (attacker, kind))
        })
        .collect();

    for (attacker, kind) in hits {
        let event = apply_hit(&mut sides, attacker, kind);
        events.push(event);
    }

    if mods.edge_damage > 0 {
        for side in Side::BOTH {
            let work = &mut sides[side.index()];
            if work.hp_delta < 0 && work.state.is_at_edge() {
                work.hp_delta -= mods.edge_damage;
                events.push(PhaseEvent::WallSplat {
                    side,
                    damage: mods.edge_damage,
                });
            }
        }
    }

    for work in sides.iter_mut() {
        let max_energy = work.state.fighter.max_energy;
        work.state.current_hp = (work.state.current_hp + work.hp_delta).max(0);
        work.state.current_energy = (work.state.current_energy + work.energy_delta).clamp(0, max_energy);
    }

    let [w1, w2] = sides;
    let description = narration::describe(&events, &w1.state, &w2.state, p1_action, p2_action);

    PhaseResolution {
        outcome: PhaseOutcome {
            phase_index,
            p1_action,
            p2_action,
            description,
            p1_hp_change: w1.hp_delta,
            p2_hp_change: w2.hp_delta,
            p1_energy_change: w1.energy_delta,
            p2_energy_change: w2.energy_delta,
            p1_quote: None,
            p2_quote: None,
            events,
        },
        p1_next: w1.state,
        p2_next: w2.state,
    }
}

/// Resolve one phase and attach flavor quotes drawn from `rng`
///
/// Mechanics are identical to [`resolve_phase`]; only the quotes vary.
pub fn resolve_phase_with_flavor<R: Rng + ?Sized>(
    p1: &CombatantState,
    p2: &CombatantState,
    p1_action: ActionChoice,
    p2_action: ActionChoice,
    phase_index: PhaseIndex,
    stage: &StageDefinition,
    rng: &mut R,
) -> PhaseResolution {
    let mut resolution = resolve_phase(p1, p2, p1_action, p2_action, phase_index, stage);
    let (q1, q2) = narration::pick_quotes(
        &resolution.outcome.events,
        [p1_action, p2_action],
        [&resolution.p1_next, &resolution.p2_next],
        rng,
    );
    resolution.outcome.p1_quote = q1;
    resolution.outcome.p2_quote = q2;
    resolution
}

/// Movement, costs and stance for one side
fn apply_action(side: Side, work: &mut SideWork, mods: &HazardModifiers, events: &mut Vec<PhaseEvent>) {
    let forward = work.state.forward();
    match work.action {
        ActionChoice::MoveForward | ActionChoice::MoveBackward => {
            let step = if work.action == ActionChoice::MoveForward {
                forward * MOVE_DISTANCE
            } else {
                -forward * MOVE_DISTANCE
            };
            work.state.position = clamp_cell(work.state.position + step);
            if mods.move_cost > 0 {
                work.energy_delta -= mods.move_cost;
                events.push(PhaseEvent::MoveSlowed {
                    side,
                    cost: mods.move_cost,
                });
            }
        }
        ActionChoice::Jump => {
            work.state.is_jumping = true;
            work.state.position = clamp_cell(work.state.position + forward * mods.jump_distance);
            if mods.jump_distance > BASE_JUMP_DISTANCE {
                events.push(PhaseEvent::HighJump { side });
            }
        }
        ActionChoice::Skill => {
            // May go negative here; the final clamp floors it
            work.energy_delta -= work.state.fighter.skill_cost + mods.skill_surcharge;
        }
        ActionChoice::Block => {
            work.state.is_blocking = true;
        }
        ActionChoice::Attack | ActionChoice::None => {}
    }
}

fn detect_hit(attacker: &SideWork, defender: &SideWork, distance: i32) -> Option<HitKind> {
    match attacker.action {
        ActionChoice::Attack if distance <= MELEE_RANGE && !defender.state.is_jumping => {
            Some(HitKind::Melee)
        }
        // Skills cannot be jumped over
        ActionChoice::Skill if distance <= SKILL_RANGE => Some(HitKind::Skill),
        ActionChoice::Jump if attacker.state.position == defender.state.position => {
            Some(HitKind::Stomp)
        }
        _ => None,
    }
}

fn apply_hit(sides: &mut [SideWork; 2], attacker: Side, kind: HitKind) -> PhaseEvent {
    let blocked = kind != HitKind::Stomp && sides[attacker.opponent().index()].state.is_blocking;

    let damage = match (kind, blocked) {
        (HitKind::Melee, false) => MELEE_DAMAGE,
        (HitKind::Melee, true) => MELEE_CHIP_DAMAGE,
        (HitKind::Skill, false) => SKILL_DAMAGE,
        (HitKind::Skill, true) => SKILL_BLOCKED_DAMAGE,
        (HitKind::Stomp, _) => STOMP_DAMAGE,
    };

    let defender = &mut sides[attacker.opponent().index()];
    defender.hp_delta -= damage;
    if blocked {
        defender.energy_delta += BLOCK_ENERGY_GAIN;
    }
    if kind == HitKind::Stomp {
        // Toward the high end regardless of who landed on whom
        defender.state.position = clamp_cell(defender.state.position + STOMP_KNOCKBACK);
    }

    if kind == HitKind::Melee && !blocked {
        sides[attacker.index()].energy_delta += MELEE_HIT_ENERGY_GAIN;
    }

    PhaseEvent::Hit {
        attacker,
        kind,
        blocked,
        damage,
    }
}
