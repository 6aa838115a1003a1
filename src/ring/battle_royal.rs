//! N-way elimination match engine
//!
//! Each round two distinct wrestlers are drawn from the live field; a
//! knockout eliminates the defender from the field. The last wrestler
//! standing wins.

use crate::core::config::MatchConfig;
use crate::core::error::{Result, RingError};
use crate::ring::dice::Dice;
use crate::ring::moves::resolve_move;
use crate::ring::outcome::MatchOutcome;
use crate::roster::wrestler::Wrestler;

/// Run a battle royal over the given field to a single survivor
///
/// Everyone enters at `config.starting_health`. The field is consumed:
/// each match gets its own copies of the wrestlers, so damage never
/// leaks into a caller's roster. Fails fast with
/// [`RingError::NotEnoughWrestlers`] below two participants.
pub fn run_battle_royal(
    mut field: Vec<Wrestler>,
    dice: &mut impl Dice,
    config: &MatchConfig,
) -> Result<MatchOutcome> {
    if field.len() < 2 {
        return Err(RingError::NotEnoughWrestlers {
            needed: 2,
            got: field.len(),
        });
    }
    for wrestler in &mut field {
        wrestler.health = config.starting_health;
    }

    // One knockout per elimination; scale the stall cap accordingly.
    let round_limit = config.max_rounds * (field.len() as u32 - 1);
    let mut log = vec![format!("{} wrestlers enter the Battle Royal!", field.len())];
    let mut rounds = 0u32;

    while field.len() > 1 {
        if rounds >= round_limit {
            tracing::warn!(rounds, remaining = field.len(), "battle royal hit the round limit");
            return Err(RingError::RoundLimit(round_limit));
        }
        rounds += 1;

        let (attacker_idx, defender_idx) = dice.pick_two(field.len());
        let (attacker, defender) = if attacker_idx < defender_idx {
            let (head, tail) = field.split_at_mut(defender_idx);
            (&head[attacker_idx], &mut tail[0])
        } else {
            let (head, tail) = field.split_at_mut(attacker_idx);
            (&tail[0], &mut head[defender_idx])
        };

        let result = resolve_move(attacker, defender, dice, config);
        log.push(format!(
            "{} ({} takes {} damage!)",
            result.narration, defender.name, result.damage
        ));
        log.push(format!("{}'s health: {}", defender.name, defender.health));

        if defender.is_knocked_out() {
            let name = defender.name.clone();
            log.push(format!("{name} is eliminated from the Battle Royal!"));
            tracing::debug!(eliminated = %name, remaining = field.len() - 1, "elimination");
            field.remove(defender_idx);
        }
    }

    let winner = field.remove(0);
    log.push(format!("{} wins the Battle Royal!", winner.name));
    tracing::info!(winner = %winner.name, rounds, "battle royal finished");

    Ok(MatchOutcome {
        winner: winner.name,
        rounds,
        log,
    })
}
