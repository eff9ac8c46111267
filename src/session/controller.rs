//! Interactive match controller
//!
//! Owns the two combatant snapshots for one session and is the only thing
//! that replaces them. A turn resolves strictly phase by phase: resolve,
//! wait for the panel, optionally pause, then resolve the next phase from
//! the state the previous one returned. A knockout ends the turn early.

use std::time::Duration;

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

use crate::ai::{ActionSelector, TurnPlan};
use crate::catalog::{find_fighter, find_stage, FighterDefinition, StageDefinition, FIGHTERS, STAGES};
use crate::combat::constants::PHASES_PER_TURN;
use crate::combat::{resolve_phase_with_flavor, ActionChoice, CombatantState, PhaseOutcome, PhaseResolution};
use crate::core::config::MatchConfig;
use crate::core::error::{ClashError, Result};
use crate::core::types::{MatchId, PhaseIndex, TurnNumber};
use crate::render::{PanelArtifact, PanelRenderer, PanelRequest};
use crate::session::{GamePhase, MatchResult};

/// One resolved phase as presented to the player
#[derive(Debug, Clone, Serialize)]
pub struct PhaseReport {
    pub outcome: PhaseOutcome,
    /// Missing when the renderer failed or produced nothing
    pub artifact: Option<PanelArtifact>,
}

/// Everything that happened in one turn
#[derive(Debug, Clone, Serialize)]
pub struct TurnReport {
    pub turn: TurnNumber,
    pub opponent_plan: TurnPlan,
    /// One to three phases; fewer if someone was knocked out
    pub phases: Vec<PhaseReport>,
    pub result: Option<MatchResult>,
}

struct Battle {
    p1: CombatantState,
    p2: CombatantState,
}

/// Settles the controller when a turn is dropped mid-resolution
struct ResolvingTurn<'a, R: PanelRenderer, S: ActionSelector> {
    controller: &'a mut MatchController<R, S>,
}

impl<R: PanelRenderer, S: ActionSelector> Drop for ResolvingTurn<'_, R, S> {
    fn drop(&mut self) {
        if self.controller.phase == GamePhase::BattleResolution {
            tracing::warn!(
                match_id = %self.controller.id,
                turn = self.controller.turn,
                phases = self.controller.last_turn.len(),
                "Turn interrupted during resolution"
            );
            self.controller.settle_turn();
        }
    }
}

/// Session state machine: menu, selection, battle input/resolution, game over
pub struct MatchController<R: PanelRenderer, S: ActionSelector> {
    id: MatchId,
    config: MatchConfig,
    phase: GamePhase,
    renderer: R,
    opponent: S,
    rng: ChaCha8Rng,
    fighter: &'static FighterDefinition,
    stage: &'static StageDefinition,
    battle: Option<Battle>,
    queue: Vec<ActionChoice>,
    turn: TurnNumber,
    last_turn: Vec<PhaseReport>,
}

impl<R: PanelRenderer, S: ActionSelector> MatchController<R, S> {
    pub fn new(config: MatchConfig, renderer: R, opponent: S) -> Self {
        let rng = match config.rules.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Self {
            id: MatchId::new(),
            config,
            phase: GamePhase::Menu,
            renderer,
            opponent,
            rng,
            fighter: &FIGHTERS[0],
            stage: &STAGES[0],
            battle: None,
            queue: Vec::with_capacity(PHASES_PER_TURN),
            turn: 1,
            last_turn: Vec::new(),
        }
    }

    pub fn id(&self) -> MatchId {
        self.id
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn turn(&self) -> TurnNumber {
        self.turn
    }

    pub fn selected_fighter(&self) -> &'static FighterDefinition {
        self.fighter
    }

    pub fn stage(&self) -> &'static StageDefinition {
        self.stage
    }

    pub fn queue(&self) -> &[ActionChoice] {
        &self.queue
    }

    /// Phases of the most recent turn
    pub fn last_turn(&self) -> &[PhaseReport] {
        &self.last_turn
    }

    pub fn p1(&self) -> Option<&CombatantState> {
        self.battle.as_ref().map(|b| &b.p1)
    }

    pub fn p2(&self) -> Option<&CombatantState> {
        self.battle.as_ref().map(|b| &b.p2)
    }

    /// Result once the match is over
    pub fn result(&self) -> Option<MatchResult> {
        if self.phase != GamePhase::GameOver {
            return None;
        }
        self.battle
            .as_ref()
            .and_then(|b| MatchResult::from_states(&b.p1, &b.p2))
    }

    fn expect_phase(&self, expected: GamePhase) -> Result<()> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(ClashError::WrongPhase(self.phase))
        }
    }

    /// Menu -> Selection
    pub fn open_selection(&mut self) -> Result<()> {
        self.expect_phase(GamePhase::Menu)?;
        self.phase = GamePhase::Selection;
        Ok(())
    }

    pub fn select_fighter(&mut self, id: &str) -> Result<()> {
        self.expect_phase(GamePhase::Selection)?;
        self.fighter = find_fighter(id)?;
        Ok(())
    }

    pub fn select_stage(&mut self, id: &str) -> Result<()> {
        self.expect_phase(GamePhase::Selection)?;
        self.stage = find_stage(id)?;
        Ok(())
    }

    /// Selection -> BattleInput
    ///
    /// Picks a random opponent fighter unless one is named.
    pub fn start_match(&mut self, opponent_id: Option<&str>) -> Result<()> {
        self.expect_phase(GamePhase::Selection)?;
        let enemy = match opponent_id {
            Some(id) => find_fighter(id)?,
            None => FIGHTERS.choose(&mut self.rng).unwrap_or(&FIGHTERS[0]),
        };

        self.battle = Some(Battle {
            p1: CombatantState::new(self.fighter, self.config.rules.p1_start, true),
            p2: CombatantState::new(enemy, self.config.rules.p2_start, false),
        });
        self.queue.clear();
        self.last_turn.clear();
        self.turn = 1;
        self.phase = GamePhase::BattleInput;

        tracing::info!(
            match_id = %self.id,
            p1 = self.fighter.name,
            p2 = enemy.name,
            stage = self.stage.name,
            hazard = ?self.stage.hazard,
            "Match started"
        );
        Ok(())
    }

    /// Add one action to the human side's queue
    ///
    /// SKILL is refused when current energy is below the skill cost.
    pub fn queue_action(&mut self, action: ActionChoice) -> Result<()> {
        self.expect_phase(GamePhase::BattleInput)?;
        if self.queue.len() >= PHASES_PER_TURN {
            return Err(ClashError::QueueFull(PHASES_PER_TURN));
        }
        let battle = self.battle.as_ref().ok_or(ClashError::WrongPhase(self.phase))?;
        if action == ActionChoice::Skill && !battle.p1.can_afford_skill() {
            return Err(ClashError::InsufficientEnergy {
                required: battle.p1.fighter.skill_cost,
                available: battle.p1.current_energy,
            });
        }
        self.queue.push(action);
        Ok(())
    }

    pub fn clear_queue(&mut self) -> Result<()> {
        self.expect_phase(GamePhase::BattleInput)?;
        self.queue.clear();
        Ok(())
    }

    /// Resolve the queued turn against the opponent's plan
    ///
    /// BattleInput -> BattleResolution -> BattleInput | GameOver
    ///
    /// Each phase is committed to the match before its panel is awaited.
    /// If the returned future is dropped mid-turn, the committed phases
    /// stand and the controller settles as if the turn had ended there.
    pub async fn execute_turn(&mut self) -> Result<TurnReport> {
        self.expect_phase(GamePhase::BattleInput)?;
        if self.queue.len() != PHASES_PER_TURN {
            return Err(ClashError::QueueIncomplete {
                queued: self.queue.len(),
                required: PHASES_PER_TURN,
            });
        }
        let Some(battle) = self.battle.as_ref() else {
            return Err(ClashError::WrongPhase(self.phase));
        };

        // Committed before the human queue is looked at
        let opponent_plan = self.opponent.select_turn(&battle.p2);
        let human_plan = self.queue.clone();

        self.phase = GamePhase::BattleResolution;
        self.last_turn.clear();

        let mut resolving = ResolvingTurn { controller: self };
        resolving.controller.resolve_phases(&human_plan, &opponent_plan).await;

        let turn = resolving.controller.turn;
        let phases = resolving.controller.last_turn.clone();
        let result = resolving.controller.settle_turn();

        Ok(TurnReport {
            turn,
            opponent_plan,
            phases,
            result,
        })
    }

    async fn resolve_phases(&mut self, human_plan: &[ActionChoice], opponent_plan: &TurnPlan) {
        let delay = Duration::from_millis(self.config.rules.phase_delay_ms);

        for (i, (&a1, &a2)) in human_plan.iter().zip(opponent_plan.iter()).enumerate() {
            let phase_index = (i + 1) as PhaseIndex;
            let Some(battle) = self.battle.as_mut() else {
                break;
            };
            let resolution =
                resolve_phase_with_flavor(&battle.p1, &battle.p2, a1, a2, phase_index, self.stage, &mut self.rng);
            battle.p1 = resolution.p1_next.clone();
            battle.p2 = resolution.p2_next.clone();
            self.last_turn.push(PhaseReport {
                outcome: resolution.outcome.clone(),
                artifact: None,
            });

            tracing::debug!(
                match_id = %self.id,
                turn = self.turn,
                phase = phase_index,
                p1_action = ?a1,
                p2_action = ?a2,
                p1_hp = resolution.p1_next.current_hp,
                p2_hp = resolution.p2_next.current_hp,
                "Phase resolved"
            );

            let artifact = self.render_panel(&resolution, phase_index).await;
            if let Some(report) = self.last_turn.last_mut() {
                report.artifact = artifact;
            }

            if resolution.is_knockout() {
                break;
            }
            if !delay.is_zero() && i + 1 < human_plan.len() {
                tokio::time::sleep(delay).await;
            }
        }
    }

    /// Render one phase; failures and timeouts leave the phase text only
    async fn render_panel(&self, resolution: &PhaseResolution, phase_index: PhaseIndex) -> Option<PanelArtifact> {
        let timeout = Duration::from_millis(self.config.renderer.timeout_ms);
        let request = PanelRequest {
            p1: &resolution.p1_next,
            p2: &resolution.p2_next,
            stage: self.stage,
            outcome: &resolution.outcome,
        };

        match tokio::time::timeout(timeout, self.renderer.render(&request)).await {
            Ok(Ok(artifact)) => artifact,
            Ok(Err(e)) => {
                tracing::warn!(match_id = %self.id, phase = phase_index, error = %e, "Panel render failed, continuing with text");
                None
            }
            Err(_) => {
                tracing::warn!(
                    match_id = %self.id,
                    phase = phase_index,
                    timeout_ms = self.config.renderer.timeout_ms,
                    "Panel render timed out, continuing with text"
                );
                None
            }
        }
    }

    /// Leave BattleResolution for BattleInput or GameOver
    fn settle_turn(&mut self) -> Option<MatchResult> {
        self.queue.clear();
        let result = self
            .battle
            .as_ref()
            .and_then(|b| MatchResult::from_states(&b.p1, &b.p2));

        if let Some(result) = result {
            self.phase = GamePhase::GameOver;
            tracing::info!(match_id = %self.id, turn = self.turn, ?result, "Match over");
        } else {
            tracing::info!(match_id = %self.id, turn = self.turn, "Turn complete");
            if !self.last_turn.is_empty() {
                self.turn += 1;
            }
            self.phase = GamePhase::BattleInput;
        }
        result
    }

    /// GameOver -> Menu, ready for a new selection
    pub fn return_to_menu(&mut self) -> Result<()> {
        self.expect_phase(GamePhase::GameOver)?;
        self.battle = None;
        self.queue.clear();
        self.last_turn.clear();
        self.phase = GamePhase::Menu;
        Ok(())
    }
}
