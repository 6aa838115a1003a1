//! Headless Match Runner
//!
//! Runs a single duel or battle royal from a roster file and prints the
//! outcome as JSON or text. The seed is always reported so any run can
//! be replayed exactly.

use std::path::PathBuf;

use clap::Parser;
use serde::Serialize;

use iron_ring::core::config::MatchConfig;
use iron_ring::core::error::{Result, RingError};
use iron_ring::ring::{run_battle_royal, run_duel, SeededDice};
use iron_ring::roster::{JsonRosterStore, RosterStore, Wrestler};

/// Headless Match Runner - scripted matches for testing and tuning
#[derive(Parser, Debug)]
#[command(name = "match_runner")]
#[command(about = "Run a headless duel or battle royal from a roster file")]
struct Args {
    /// Path to the roster JSON file
    #[arg(long, default_value = "wrestlers.json")]
    roster: PathBuf,

    /// Match type: duel or royal
    #[arg(long, default_value = "duel")]
    mode: String,

    /// Wrestler names to include, in order (repeatable).
    /// Defaults to the first two for a duel, the whole roster for a royal.
    #[arg(long = "name")]
    names: Vec<String>,

    /// Random seed for deterministic runs
    #[arg(long)]
    seed: Option<u64>,

    /// Output format: json or text
    #[arg(long, default_value = "json")]
    format: String,

    /// Override the round safety cap
    #[arg(long)]
    max_rounds: Option<u32>,
}

/// JSON output structure
#[derive(Serialize)]
struct RunnerOutput {
    mode: String,
    winner: String,
    rounds: u32,
    seed: u64,
    log: Vec<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("iron_ring=warn")
        .init();

    let args = Args::parse();

    let seed = args.seed.unwrap_or_else(|| rand::random());
    let mut dice = SeededDice::from_seed(seed);

    let mut config = MatchConfig::default();
    if let Some(cap) = args.max_rounds {
        config.max_rounds = cap;
    }

    let roster = JsonRosterStore::new(&args.roster).load_roster()?;
    let mut selected = select_participants(roster, &args.names)?;
    if selected.len() < 2 {
        return Err(RingError::NotEnoughWrestlers {
            needed: 2,
            got: selected.len(),
        });
    }

    let outcome = match args.mode.as_str() {
        "duel" => {
            selected.truncate(2);
            let mut w2 = selected.pop().unwrap();
            let mut w1 = selected.pop().unwrap();
            run_duel(&mut w1, &mut w2, &mut dice, &config)?
        }
        "royal" => run_battle_royal(selected, &mut dice, &config)?,
        other => {
            return Err(RingError::ConfigError(format!(
                "unknown mode: {other} (expected duel or royal)"
            )))
        }
    };

    let output = RunnerOutput {
        mode: args.mode,
        winner: outcome.winner,
        rounds: outcome.rounds,
        seed,
        log: outcome.log,
    };

    match args.format.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&output)?),
        _ => {
            for line in &output.log {
                println!("{line}");
            }
            println!("(seed {}, {} rounds)", output.seed, output.rounds);
        }
    }

    Ok(())
}

/// Resolve requested names against the roster, preserving request order.
/// With no names requested, the whole roster participates.
fn select_participants(roster: Vec<Wrestler>, names: &[String]) -> Result<Vec<Wrestler>> {
    if names.is_empty() {
        return Ok(roster);
    }
    names
        .iter()
        .map(|name| {
            roster
                .iter()
                .find(|w| &w.name == name)
                .cloned()
                .ok_or_else(|| RingError::WrestlerNotFound(name.clone()))
        })
        .collect()
}
