//! One-on-one match engine
//!
//! Rounds alternate on a coin flip until one wrestler is knocked out.
//! The engine holds no state between calls; the log lives only for the
//! duration of one match.

use crate::core::config::MatchConfig;
use crate::core::error::{Result, RingError};
use crate::ring::dice::Dice;
use crate::ring::moves::resolve_move;
use crate::ring::outcome::MatchOutcome;
use crate::roster::wrestler::Wrestler;

/// Run a duel between two wrestlers to a knockout
///
/// Both wrestlers enter at `config.starting_health`. Each round the
/// attacker is chosen by coin flip, independent of who attacked last.
/// The loop ends when either wrestler drops to zero health; if both
/// were somehow down, the first-listed wrestler takes the decision.
/// Aborts with [`RingError::RoundLimit`] if the match outlives
/// `config.max_rounds`.
pub fn run_duel(
    w1: &mut Wrestler,
    w2: &mut Wrestler,
    dice: &mut impl Dice,
    config: &MatchConfig,
) -> Result<MatchOutcome> {
    w1.health = config.starting_health;
    w2.health = config.starting_health;

    let mut log = vec!["The match begins!".to_string()];
    let mut rounds = 0u32;

    while !w1.is_knocked_out() && !w2.is_knocked_out() {
        if rounds >= config.max_rounds {
            tracing::warn!(rounds, "duel hit the round limit without a knockout");
            return Err(RingError::RoundLimit(config.max_rounds));
        }
        rounds += 1;

        let (attacker, defender) = if dice.coin_flip() {
            (&*w1, &mut *w2)
        } else {
            (&*w2, &mut *w1)
        };

        let result = resolve_move(attacker, defender, dice, config);
        log.push(format!(
            "{} ({} takes {} damage!)",
            result.narration, defender.name, result.damage
        ));
        log.push(format!("{}'s health: {}", defender.name, defender.health));
    }

    let winner = if w2.is_knocked_out() { &*w1 } else { &*w2 };
    log.push(format!("{} wins the match!", winner.name));
    tracing::info!(winner = %winner.name, rounds, "duel finished");

    Ok(MatchOutcome {
        winner: winner.name.clone(),
        rounds,
        log,
    })
}
