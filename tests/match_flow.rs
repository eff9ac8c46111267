//! Match controller integration tests
//!
//! Drives whole matches through the controller with scripted opponents and
//! stub renderers: rendering happens once per resolved phase, renderer
//! failures and stalls never stop a turn, a dropped turn leaves the match
//! playable, and a knockout ends the turn early.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use manga_clash::ai::ScriptedSelector;
use manga_clash::combat::ActionChoice;
use manga_clash::core::error::{ClashError, Result};
use manga_clash::core::types::Side;
use manga_clash::core::MatchConfig;
use manga_clash::render::{PanelArtifact, PanelRenderer, PanelRequest};
use manga_clash::session::{GamePhase, MatchController, MatchResult};

/// Counts calls and tags each artifact with its phase
struct CountingRenderer {
    calls: Arc<AtomicUsize>,
}

#[async_trait]
impl PanelRenderer for CountingRenderer {
    async fn render(&self, request: &PanelRequest<'_>) -> Result<Option<PanelArtifact>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(Some(PanelArtifact(format!("panel-{}", request.outcome.phase_index))))
    }
}

struct FailingRenderer;

#[async_trait]
impl PanelRenderer for FailingRenderer {
    async fn render(&self, _request: &PanelRequest<'_>) -> Result<Option<PanelArtifact>> {
        Err(ClashError::Render("service unavailable".into()))
    }
}

/// Never finishes, like an upstream that accepted the request and hung
struct StalledRenderer;

#[async_trait]
impl PanelRenderer for StalledRenderer {
    async fn render(&self, _request: &PanelRequest<'_>) -> Result<Option<PanelArtifact>> {
        std::future::pending().await
    }
}

fn seeded_config() -> MatchConfig {
    let mut config = MatchConfig::default();
    config.rules.seed = Some(99);
    config
}

fn queue<R: PanelRenderer>(c: &mut MatchController<R, ScriptedSelector>, plan: [ActionChoice; 3]) {
    for action in plan {
        c.queue_action(action).unwrap();
    }
}

fn started<R: PanelRenderer>(renderer: R) -> MatchController<R, ScriptedSelector> {
    started_with(seeded_config(), renderer)
}

fn started_with<R: PanelRenderer>(config: MatchConfig, renderer: R) -> MatchController<R, ScriptedSelector> {
    // Opponent never acts
    let mut c = MatchController::new(config, renderer, ScriptedSelector::default());
    c.open_selection().unwrap();
    c.select_fighter("c1").unwrap();
    c.select_stage("s1").unwrap();
    c.start_match(Some("c2")).unwrap();
    c
}

#[tokio::test]
async fn test_turn_renders_every_phase() {
    let calls = Arc::new(AtomicUsize::new(0));
    let mut c = started(CountingRenderer { calls: calls.clone() });

    queue(&mut c, [ActionChoice::MoveForward; 3]);
    let report = c.execute_turn().await.unwrap();

    assert_eq!(calls.load(Ordering::SeqCst), 3);
    assert_eq!(report.turn, 1);
    assert_eq!(report.phases.len(), 3);
    assert_eq!(report.opponent_plan, [ActionChoice::None; 3]);
    for (i, phase) in report.phases.iter().enumerate() {
        assert_eq!(phase.outcome.phase_index as usize, i + 1);
        assert_eq!(
            phase.artifact.as_ref().map(|a| a.as_str().to_string()),
            Some(format!("panel-{}", i + 1))
        );
    }

    assert_eq!(c.p1().unwrap().position, 4);
    assert_eq!(c.turn(), 2);
    assert_eq!(c.phase(), GamePhase::BattleInput);
    assert!(c.queue().is_empty());
    assert_eq!(c.last_turn().len(), 3);
}

#[tokio::test]
async fn test_render_failure_is_absorbed() {
    let mut c = started(FailingRenderer);

    queue(&mut c, [ActionChoice::MoveForward, ActionChoice::MoveForward, ActionChoice::Attack]);
    let report = c.execute_turn().await.unwrap();

    assert_eq!(report.phases.len(), 3);
    assert!(report.phases.iter().all(|p| p.artifact.is_none()));
    assert!(report.phases.iter().all(|p| !p.outcome.description.is_empty()));
    assert_eq!(c.phase(), GamePhase::BattleInput);
}

#[tokio::test]
async fn test_incomplete_queue_is_rejected() {
    let mut c = started(FailingRenderer);
    c.queue_action(ActionChoice::Block).unwrap();

    let err = c.execute_turn().await.unwrap_err();
    assert!(matches!(err, ClashError::QueueIncomplete { queued: 1, required: 3 }));
    assert_eq!(c.phase(), GamePhase::BattleInput);
    assert_eq!(c.queue().len(), 1);
}

#[tokio::test]
async fn test_knockout_ends_turn_and_match() {
    let calls = Arc::new(AtomicUsize::new(0));
    let mut c = started(CountingRenderer { calls: calls.clone() });

    // Close to melee range: 1 -> 4 against a stationary opponent at 5
    queue(&mut c, [ActionChoice::MoveForward; 3]);
    c.execute_turn().await.unwrap();

    // 85 -> 55 HP, 30 -> 60 energy
    queue(&mut c, [ActionChoice::Attack; 3]);
    c.execute_turn().await.unwrap();
    assert_eq!(c.p2().unwrap().current_hp, 55);
    assert_eq!(c.p1().unwrap().current_energy, 60);

    // 55 -> 25 -> 15 -> 5 HP
    queue(&mut c, [ActionChoice::Skill, ActionChoice::Attack, ActionChoice::Attack]);
    c.execute_turn().await.unwrap();
    assert_eq!(c.p2().unwrap().current_hp, 5);
    assert!(c.result().is_none());

    queue(&mut c, [ActionChoice::Attack; 3]);
    let report = c.execute_turn().await.unwrap();

    assert_eq!(report.phases.len(), 1);
    assert_eq!(report.result, Some(MatchResult::Winner(Side::One)));
    assert_eq!(calls.load(Ordering::SeqCst), 10);
    assert_eq!(c.phase(), GamePhase::GameOver);
    assert_eq!(c.result(), Some(MatchResult::Winner(Side::One)));
    assert_eq!(c.p2().unwrap().current_hp, 0);

    // No more turns once the match is over
    assert!(matches!(
        c.queue_action(ActionChoice::Attack),
        Err(ClashError::WrongPhase(GamePhase::GameOver))
    ));

    c.return_to_menu().unwrap();
    assert_eq!(c.phase(), GamePhase::Menu);
    assert!(c.p1().is_none());
}

#[tokio::test]
async fn test_opponent_plan_is_played() {
    let opponent = ScriptedSelector::new([[ActionChoice::MoveForward, ActionChoice::Jump, ActionChoice::Block]]);
    let mut c = MatchController::new(seeded_config(), FailingRenderer, opponent);
    c.open_selection().unwrap();
    c.start_match(Some("c3")).unwrap();

    queue(&mut c, [ActionChoice::None; 3]);
    let report = c.execute_turn().await.unwrap();

    let p2_actions: Vec<ActionChoice> = report.phases.iter().map(|p| p.outcome.p2_action).collect();
    assert_eq!(p2_actions, report.opponent_plan.to_vec());
    // 5 -> 4, then a two-cell jump to 2
    assert_eq!(c.p2().unwrap().position, 2);
    assert!(c.p2().unwrap().is_blocking);
}

#[tokio::test]
async fn test_stalled_render_times_out() {
    let mut config = seeded_config();
    config.renderer.timeout_ms = 20;
    let mut c = started_with(config, StalledRenderer);

    queue(&mut c, [ActionChoice::MoveForward; 3]);
    let report = c.execute_turn().await.unwrap();

    assert_eq!(report.phases.len(), 3);
    assert!(report.phases.iter().all(|p| p.artifact.is_none()));
    assert_eq!(c.p1().unwrap().position, 4);
    assert_eq!(c.phase(), GamePhase::BattleInput);
    assert_eq!(c.turn(), 2);
}

#[tokio::test]
async fn test_dropped_turn_keeps_match_playable() {
    // Renderer timeout far longer than the caller is willing to wait
    let mut c = started(StalledRenderer);

    queue(&mut c, [ActionChoice::MoveForward; 3]);
    let outcome = tokio::time::timeout(Duration::from_millis(50), c.execute_turn()).await;
    assert!(outcome.is_err());

    // Phase 1 was committed before its panel was awaited
    assert_eq!(c.phase(), GamePhase::BattleInput);
    assert_eq!(c.p1().unwrap().position, 2);
    assert_eq!(c.p2().unwrap().position, 5);
    assert_eq!(c.last_turn().len(), 1);
    assert!(c.last_turn()[0].artifact.is_none());
    assert_eq!(c.turn(), 2);
    assert!(c.queue().is_empty());

    // The next turn can be queued and played
    c.queue_action(ActionChoice::Block).unwrap();
    c.clear_queue().unwrap();
}

#[tokio::test]
async fn test_dropped_knockout_turn_ends_match() {
    let mut c = started(StalledRenderer);

    // One committed step per dropped turn: 1 -> 4
    for _ in 0..3 {
        queue(&mut c, [ActionChoice::MoveForward; 3]);
        let _ = tokio::time::timeout(Duration::from_millis(20), c.execute_turn()).await;
    }
    assert_eq!(c.p1().unwrap().position, 4);

    // Each dropped turn lands one 10 damage hit; 85 HP falls on the ninth
    let mut dropped = 0;
    while c.phase() == GamePhase::BattleInput && dropped < 20 {
        queue(&mut c, [ActionChoice::Attack; 3]);
        let _ = tokio::time::timeout(Duration::from_millis(20), c.execute_turn()).await;
        dropped += 1;
    }

    assert_eq!(dropped, 9);
    assert_eq!(c.phase(), GamePhase::GameOver);
    assert_eq!(c.result(), Some(MatchResult::Winner(Side::One)));
    c.return_to_menu().unwrap();
}
