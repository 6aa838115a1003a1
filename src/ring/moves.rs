//! Move resolution
//!
//! A move is one attack: a randomly chosen piece of ring flavor plus a
//! damage amount derived from the attacker's strength and the defender's
//! agility. Resolution mutates nothing but the defender's health.

use crate::core::config::MatchConfig;
use crate::ring::dice::Dice;
use crate::roster::wrestler::Wrestler;

/// Number of entries in the move catalogue.
pub const MOVE_COUNT: usize = 5;

/// Result of one resolved move
#[derive(Debug, Clone)]
pub struct MoveResult {
    /// Flavor line describing the move, already naming both wrestlers.
    pub narration: String,
    /// Damage actually dealt (zero or more).
    pub damage: i32,
}

fn narrate(index: usize, attacker: &str, defender: &str) -> String {
    match index {
        0 => format!("{attacker} delivers a powerful suplex to {defender}!"),
        1 => format!("{attacker} lands a high-flying dropkick on {defender}!"),
        2 => format!("{attacker} executes a devastating clothesline on {defender}!"),
        3 => format!("{attacker} slams {defender} into the mat with a body slam!"),
        _ => format!("{attacker} locks {defender} into a submission hold!"),
    }
}

/// Damage formula: base roll plus strength, less half the defender's
/// agility (integer division), floored at zero.
pub fn compute_damage(roll: i32, attacker: &Wrestler, defender: &Wrestler) -> i32 {
    (roll + attacker.strength - defender.agility / 2).max(0)
}

/// Resolve one move from `attacker` against `defender`
///
/// Picks a move from the catalogue, computes damage, and applies it to
/// the defender's health. Returns the narration and the damage dealt.
pub fn resolve_move(
    attacker: &Wrestler,
    defender: &mut Wrestler,
    dice: &mut impl Dice,
    config: &MatchConfig,
) -> MoveResult {
    let narration = narrate(dice.move_index(MOVE_COUNT), &attacker.name, &defender.name);
    let roll = dice.damage_roll(config.damage_roll_min, config.damage_roll_max);
    let damage = compute_damage(roll, attacker, defender);
    defender.take_damage(damage);

    tracing::debug!(
        attacker = %attacker.name,
        defender = %defender.name,
        damage,
        health = defender.health,
        "move resolved"
    );

    MoveResult { narration, damage }
}
