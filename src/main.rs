//! Iron Ring - Entry Point
//!
//! Interactive console for the wrestling simulator: manage the roster,
//! run duels and battle royals, and browse past results. All state
//! lives in two flat files next to the binary.

use std::io::{self, Write};
use std::path::Path;

use iron_ring::core::config::MatchConfig;
use iron_ring::core::error::{Result, RingError};
use iron_ring::ring::{run_battle_royal, run_duel, SeededDice};
use iron_ring::roster::{HistoryStore, JsonRosterStore, MatchRecord, RosterStore, Wrestler};

const ROSTER_FILE: &str = "wrestlers.json";
const HISTORY_FILE: &str = "match_history.json";
const CONFIG_FILE: &str = "ring.toml";

fn main() -> Result<()> {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter("iron_ring=info")
        .init();

    tracing::info!("Iron Ring starting...");

    let config = if Path::new(CONFIG_FILE).exists() {
        MatchConfig::from_toml_file(Path::new(CONFIG_FILE))?
    } else {
        MatchConfig::default()
    };
    let store = JsonRosterStore::new(ROSTER_FILE);
    let history = HistoryStore::new(HISTORY_FILE);

    println!("\n=== IRON RING ===");
    println!("Turn-based wrestling match simulator");
    println!();
    println!("Commands:");
    println!("  list / l        - Show the roster");
    println!("  create / c      - Create a new wrestler");
    println!("  delete <name>   - Remove a wrestler from the roster");
    println!("  duel [a, b]     - Run a one-on-one match (prompts if no names)");
    println!("  royal [a, b, ..]- Run a battle royal (whole roster if no names)");
    println!("  history / h     - Show past match results (history last for full log)");
    println!("  quit / q        - Exit");
    println!();

    let roster = store.load_roster()?;
    if roster.is_empty() {
        println!("No saved wrestlers yet. Use 'create' to build a roster.");
    } else {
        println!("Saved roster found with {} wrestlers.", roster.len());
    }

    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        let input = input.trim();

        if input.is_empty() {
            continue;
        }
        if input == "quit" || input == "q" {
            break;
        }

        if let Err(e) = handle_command(input, &store, &history, &config) {
            println!("Error: {e}");
        }
    }

    println!("Goodbye!");
    Ok(())
}

fn handle_command(
    input: &str,
    store: &impl RosterStore,
    history: &HistoryStore,
    config: &MatchConfig,
) -> Result<()> {
    if input == "list" || input == "l" {
        return list_roster(store);
    }
    if input == "create" || input == "c" {
        return create_wrestler(store);
    }
    if let Some(name) = input.strip_prefix("delete ") {
        return delete_wrestler(store, name.trim());
    }
    if input == "duel" {
        return run_duel_command(store, history, config, None);
    }
    if let Some(rest) = input.strip_prefix("duel ") {
        let names = split_names(rest);
        if names.len() != 2 {
            println!("Usage: duel <name>, <name>");
            return Ok(());
        }
        return run_duel_command(store, history, config, Some((names[0], names[1])));
    }
    if input == "royal" {
        return run_royal_command(store, history, config, &[]);
    }
    if let Some(rest) = input.strip_prefix("royal ") {
        let names = split_names(rest);
        return run_royal_command(store, history, config, &names);
    }
    if input == "history" || input == "h" {
        return show_history(history, false);
    }
    if input == "history last" {
        return show_history(history, true);
    }

    println!("Unknown command: {input}");
    Ok(())
}

fn list_roster(store: &impl RosterStore) -> Result<()> {
    let roster = store.load_roster()?;
    if roster.is_empty() {
        println!("The roster is empty.");
        return Ok(());
    }
    for w in &roster {
        println!(
            "  {} (str {}, agi {}, cha {})",
            w.name, w.strength, w.agility, w.charisma
        );
    }
    Ok(())
}

fn create_wrestler(store: &impl RosterStore) -> Result<()> {
    println!("Create your wrestler:");
    let name = prompt("Name: ")?;
    let strength = prompt_attribute("Strength (1-20): ")?;
    let agility = prompt_attribute("Agility (1-20): ")?;
    let charisma = prompt_attribute("Charisma (1-20): ")?;

    let wrestler = Wrestler::new(name, strength, agility, charisma)?;

    let mut roster = store.load_roster()?;
    if roster.iter().any(|w| w.name == wrestler.name) {
        return Err(RingError::InvalidWrestler(format!(
            "a wrestler named {} already exists",
            wrestler.name
        )));
    }
    println!("{} joins the roster!", wrestler.name);
    roster.push(wrestler);
    store.save_roster(&roster)
}

fn delete_wrestler(store: &impl RosterStore, name: &str) -> Result<()> {
    let mut roster = store.load_roster()?;
    let before = roster.len();
    roster.retain(|w| w.name != name);
    if roster.len() == before {
        return Err(RingError::WrestlerNotFound(name.to_string()));
    }
    store.save_roster(&roster)?;
    println!("{name} has left the federation.");
    Ok(())
}

fn run_duel_command(
    store: &impl RosterStore,
    history: &HistoryStore,
    config: &MatchConfig,
    names: Option<(&str, &str)>,
) -> Result<()> {
    let roster = store.load_roster()?;
    let (first, second) = match names {
        Some((a, b)) => (a.to_string(), b.to_string()),
        None => (prompt("First wrestler: ")?, prompt("Second wrestler: ")?),
    };

    let mut w1 = find_wrestler(&roster, &first)?;
    let mut w2 = find_wrestler(&roster, &second)?;

    let mut dice = SeededDice::from_entropy();
    let outcome = run_duel(&mut w1, &mut w2, &mut dice, config)?;

    for line in &outcome.log {
        println!("{line}");
    }
    history.append(MatchRecord::from_outcome(
        &outcome,
        vec![w1.name.clone(), w2.name.clone()],
    ))
}

fn run_royal_command(
    store: &impl RosterStore,
    history: &HistoryStore,
    config: &MatchConfig,
    names: &[&str],
) -> Result<()> {
    let roster = store.load_roster()?;
    let field = if names.is_empty() {
        roster
    } else {
        names
            .iter()
            .map(|name| find_wrestler(&roster, name))
            .collect::<Result<Vec<_>>>()?
    };
    let participants: Vec<String> = field.iter().map(|w| w.name.clone()).collect();

    let mut dice = SeededDice::from_entropy();
    let outcome = run_battle_royal(field, &mut dice, config)?;

    for line in &outcome.log {
        println!("{line}");
    }
    history.append(MatchRecord::from_outcome(&outcome, participants))
}

fn show_history(history: &HistoryStore, full_last: bool) -> Result<()> {
    let records = history.load()?;
    if records.is_empty() {
        println!("No matches recorded yet.");
        return Ok(());
    }

    if full_last {
        // Full play-by-play of the most recent match only.
        let last = records.last().unwrap();
        for line in &last.log {
            println!("{line}");
        }
        return Ok(());
    }

    for (i, record) in records.iter().enumerate() {
        println!(
            "  {}. {} won over [{}] in {} rounds",
            i + 1,
            record.winner,
            record.participants.join(", "),
            record.rounds
        );
    }
    Ok(())
}

/// Split a name list off a command line. Comma-separated when a comma
/// is present (names may contain spaces), whitespace-separated
/// otherwise.
fn split_names(rest: &str) -> Vec<&str> {
    if rest.contains(',') {
        rest.split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .collect()
    } else {
        rest.split_whitespace().collect()
    }
}

fn find_wrestler(roster: &[Wrestler], name: &str) -> Result<Wrestler> {
    roster
        .iter()
        .find(|w| w.name == name)
        .cloned()
        .ok_or_else(|| RingError::WrestlerNotFound(name.to_string()))
}

fn prompt(message: &str) -> Result<String> {
    print!("{message}");
    io::stdout().flush()?;
    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

fn prompt_attribute(message: &str) -> Result<i32> {
    let input = prompt(message)?;
    input
        .parse()
        .map_err(|_| RingError::InvalidWrestler(format!("not a number: {input}")))
}
