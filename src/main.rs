//! Manga Clash - Entry Point
//!
//! Sets up logging and the async runtime, picks a panel renderer, and runs
//! a terminal front end over the match controller.

use manga_clash::ai::RandomSelector;
use manga_clash::catalog::{FIGHTERS, STAGES};
use manga_clash::combat::constants::{GRID_SIZE, PHASES_PER_TURN};
use manga_clash::combat::{ActionChoice, CombatantState};
use manga_clash::core::error::Result;
use manga_clash::core::types::Side;
use manga_clash::core::{load_config, MatchConfig};
use manga_clash::render::{ImageClient, NullRenderer, PanelRenderer};
use manga_clash::session::{GamePhase, MatchController, MatchResult, TurnReport};

use std::io::{self, Write};
use std::path::Path;
use tokio::runtime::Runtime;

type Controller = MatchController<Box<dyn PanelRenderer>, RandomSelector>;

fn main() -> Result<()> {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter("manga_clash=info")
        .init();

    tracing::info!("Manga Clash starting...");

    // Create the async runtime for panel rendering
    let rt = Runtime::new()?;

    let config = match std::env::args().nth(1) {
        Some(path) => load_config(Path::new(&path))?,
        None => MatchConfig::default(),
    };

    let renderer: Box<dyn PanelRenderer> = if config.renderer.enabled {
        match ImageClient::from_env(&config.renderer) {
            Ok(client) => Box::new(client),
            Err(e) => {
                tracing::warn!("{} - panels will be text only", e);
                Box::new(NullRenderer)
            }
        }
    } else {
        Box::new(NullRenderer)
    };

    let opponent = match config.rules.seed {
        Some(seed) => RandomSelector::with_seed(seed.wrapping_add(1)),
        None => RandomSelector::new(),
    };
    let mut controller: Controller = MatchController::new(config, renderer, opponent);

    println!("\n=== MANGA CLASH ===");
    print_help();

    loop {
        display_prompt(&controller);
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            break;
        }
        let input = input.trim();

        if input.is_empty() {
            continue;
        }
        if input == "quit" || input == "q" {
            break;
        }
        if input == "help" || input == "h" {
            print_help();
            continue;
        }

        if let Err(e) = handle_input(&rt, &mut controller, input) {
            println!("{}", e);
        }
    }

    println!("\nGoodbye!");
    Ok(())
}

fn handle_input(rt: &Runtime, controller: &mut Controller, input: &str) -> Result<()> {
    let mut words = input.split_whitespace();
    let command = words.next().unwrap_or_default();

    match controller.phase() {
        GamePhase::Menu => {
            controller.open_selection()?;
            display_roster();
        }
        GamePhase::Selection => match command {
            "fighter" | "f" => {
                controller.select_fighter(words.next().unwrap_or_default())?;
                println!("Fighter: {}", controller.selected_fighter().name);
            }
            "stage" | "s" => {
                controller.select_stage(words.next().unwrap_or_default())?;
                println!("Stage: {}", controller.stage().name);
            }
            "fight" => {
                controller.start_match(words.next())?;
                display_battle(controller);
            }
            _ => display_roster(),
        },
        GamePhase::BattleInput => match command {
            "clear" | "c" => {
                controller.clear_queue()?;
                println!("Queue cleared.");
            }
            "go" | "end" => {
                let report = rt.block_on(controller.execute_turn())?;
                display_turn(&report);
                display_battle(controller);
            }
            _ => {
                for word in input.split_whitespace() {
                    match ActionChoice::parse(word) {
                        Some(action) => controller.queue_action(action)?,
                        None => println!("Unknown action '{}'", word),
                    }
                }
                let queued: Vec<&str> = controller.queue().iter().map(|a| a.label()).collect();
                println!("Queued: [{}]", queued.join(", "));
                if controller.queue().len() == PHASES_PER_TURN {
                    println!("Type 'go' to end the turn or 'clear' to start over.");
                }
            }
        },
        GamePhase::BattleResolution => println!("RESOLVING FATE..."),
        GamePhase::GameOver => {
            controller.return_to_menu()?;
            println!("Returned to menu.");
        }
    }
    Ok(())
}

fn print_help() {
    println!();
    println!("Menu:       any key     - open fighter/stage selection");
    println!("Selection:  fighter <id> | stage <id> | fight [opponent id]");
    println!("Battle:     up to three of f b j a g s n (forward, back, jump,");
    println!("            attack, guard, skill, none), then 'go'; 'clear' resets");
    println!("Anywhere:   help, quit");
    println!();
}

fn display_prompt(controller: &Controller) {
    let label = match controller.phase() {
        GamePhase::Menu => "menu",
        GamePhase::Selection => "select",
        GamePhase::BattleInput => "turn",
        GamePhase::BattleResolution => "...",
        GamePhase::GameOver => "K.O.",
    };
    print!("[{}] > ", label);
}

fn display_roster() {
    println!();
    println!("=== SELECT FIGHTER ===");
    for f in &FIGHTERS {
        println!(
            "  {}  {:<24} HP {:>3} | NRG {:>3} | {} (cost {})",
            f.id, f.name, f.max_hp, f.max_energy, f.skill_name, f.skill_cost
        );
    }
    println!();
    println!("=== SELECT STAGE ===");
    for s in &STAGES {
        println!("  {}  {:<20} Hazard: {}", s.id, s.name, s.hazard_label);
    }
    println!();
}

/// One line per cell; both fighters on a cell shows VS
fn render_grid(p1: &CombatantState, p2: &CombatantState) -> String {
    let mut cells = Vec::with_capacity((GRID_SIZE + 1) as usize);
    for idx in 0..=GRID_SIZE {
        let cell = match (p1.position == idx, p2.position == idx) {
            (true, true) => "VS".to_string(),
            (true, false) => marker(Side::One, p1),
            (false, true) => marker(Side::Two, p2),
            (false, false) => "..".to_string(),
        };
        cells.push(format!("{:^5}", cell));
    }
    format!("|{}|", cells.join("|"))
}

fn marker(side: Side, state: &CombatantState) -> String {
    let mut m = side.label().to_string();
    if state.is_jumping {
        m.push('^');
    }
    if state.is_blocking {
        m.push('#');
    }
    m
}

fn display_battle(controller: &Controller) {
    let (Some(p1), Some(p2)) = (controller.p1(), controller.p2()) else {
        return;
    };
    println!();
    println!("--- Turn {} | {} ---", controller.turn(), controller.stage().name);
    for (side, state) in [(Side::One, p1), (Side::Two, p2)] {
        println!(
            "  {} {:<24} HP {:>3}/{:<3} ENG {:>3}/{:<3}",
            side.label(),
            state.fighter.name,
            state.current_hp,
            state.fighter.max_hp,
            state.current_energy,
            state.fighter.max_energy
        );
    }
    println!("  {}", render_grid(p1, p2));

    if let Some(result) = controller.result() {
        println!();
        println!("K.O.!");
        match result {
            MatchResult::Winner(Side::One) => println!("WINNER: {}", p1.fighter.name),
            MatchResult::Winner(Side::Two) => println!("WINNER: {}", p2.fighter.name),
            MatchResult::Draw => println!("DRAW"),
        }
        println!("Type anything to return to the menu.");
    }
    println!();
}

fn display_turn(report: &TurnReport) {
    println!();
    for phase in &report.phases {
        let o = &phase.outcome;
        println!(
            "[Phase {}] {} vs {}: {}",
            o.phase_index,
            o.p1_action.label(),
            o.p2_action.label(),
            o.description
        );
        for side in Side::BOTH {
            if let Some(quote) = o.quote(side) {
                println!("    {}: \"{}\"", side.label(), quote);
            }
        }
        if let Some(artifact) = &phase.artifact {
            let preview: String = artifact.as_str().chars().take(48).collect();
            println!("    panel: {}...", preview);
        }
    }
}
