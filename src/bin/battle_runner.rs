//! Headless Battle Runner
//!
//! Runs AI vs AI matches and outputs JSON results for balance checks.

use std::path::PathBuf;

use clap::Parser;
use manga_clash::catalog::{find_fighter, find_stage};
use manga_clash::core::error::Result;
use manga_clash::core::types::Side;
use manga_clash::core::{load_config, MatchConfig};
use manga_clash::session::{simulate_match, MatchResult, MatchSetup, MatchSummary};
use rayon::prelude::*;
use serde::Serialize;

/// Headless Battle Runner - AI vs AI matches for balance testing
#[derive(Parser, Debug)]
#[command(name = "battle_runner")]
#[command(about = "Run AI vs AI matches and output results")]
struct Args {
    /// Side 1 fighter id (c1..c9)
    #[arg(long, default_value = "c1")]
    p1: String,

    /// Side 2 fighter id (c1..c9)
    #[arg(long, default_value = "c2")]
    p2: String,

    /// Stage id (s1..s9)
    #[arg(long, default_value = "s1")]
    stage: String,

    /// Number of matches; match i uses seed + i
    #[arg(long, default_value_t = 1)]
    matches: u64,

    /// Random seed for deterministic runs
    #[arg(long)]
    seed: Option<u64>,

    /// Maximum turns before a match is a draw (overrides config)
    #[arg(long)]
    max_turns: Option<u32>,

    /// Optional TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output format: json or text
    #[arg(long, default_value = "json")]
    format: String,

    /// Print every match summary, not just the aggregate
    #[arg(long, short = 'v')]
    verbose: bool,
}

/// Aggregate over all matches
#[derive(Serialize)]
struct BatchReport {
    matches: usize,
    p1_wins: usize,
    p2_wins: usize,
    draws: usize,
    average_turns: f32,
    base_seed: u64,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    summaries: Vec<MatchSummary>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("manga_clash=warn")
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => MatchConfig::default(),
    };
    if let Some(max_turns) = args.max_turns {
        config.rules.max_turns = max_turns;
    }

    let base_seed = args.seed.or(config.rules.seed).unwrap_or_else(rand::random);
    let p1_fighter = find_fighter(&args.p1)?;
    let p2_fighter = find_fighter(&args.p2)?;
    let stage = find_stage(&args.stage)?;

    let summaries: Vec<MatchSummary> = (0..args.matches)
        .into_par_iter()
        .map(|i| {
            simulate_match(&MatchSetup {
                p1_fighter,
                p2_fighter,
                stage,
                seed: base_seed.wrapping_add(i * 2),
                settings: config.rules.clone(),
            })
        })
        .collect();

    let count = |wanted: MatchResult| summaries.iter().filter(|s| s.result == wanted).count();
    let total_turns: u32 = summaries.iter().map(|s| s.turns).sum();
    let report = BatchReport {
        matches: summaries.len(),
        p1_wins: count(MatchResult::Winner(Side::One)),
        p2_wins: count(MatchResult::Winner(Side::Two)),
        draws: count(MatchResult::Draw),
        average_turns: if summaries.is_empty() {
            0.0
        } else {
            total_turns as f32 / summaries.len() as f32
        },
        base_seed,
        summaries: if args.verbose { summaries.clone() } else { Vec::new() },
    };

    match args.format.as_str() {
        "text" => {
            println!("Batch Result");
            println!("============");
            println!("{} vs {} on {}", p1_fighter.name, p2_fighter.name, stage.name);
            println!("Matches: {}", report.matches);
            println!("P1 wins: {}", report.p1_wins);
            println!("P2 wins: {}", report.p2_wins);
            println!("Draws: {}", report.draws);
            println!("Average turns: {:.1}", report.average_turns);
            println!("Base seed: {}", report.base_seed);
            if args.verbose {
                println!();
                for s in &summaries {
                    println!(
                        "  seed {:>20}  {:?}  turns {:>3}  HP {}/{}",
                        s.seed, s.result, s.turns, s.p1_hp, s.p2_hp
                    );
                }
            }
        }
        other => {
            if other != "json" {
                eprintln!("Unknown format '{}', defaulting to json", other);
            }
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}
