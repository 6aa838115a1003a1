//! Duel engine integration tests
//!
//! Scripted dice pin down the exact damage math and termination
//! behavior; seeded dice cover the end-to-end invariants.

use iron_ring::core::config::MatchConfig;
use iron_ring::core::error::RingError;
use iron_ring::ring::{run_duel, Dice, SeededDice};
use iron_ring::roster::Wrestler;

/// Minimum rolls, first move, strictly alternating attacker.
struct MinAlternatingDice {
    first_attacks: bool,
}

impl Dice for MinAlternatingDice {
    fn damage_roll(&mut self, min: i32, _max: i32) -> i32 {
        min
    }
    fn move_index(&mut self, _len: usize) -> usize {
        0
    }
    fn coin_flip(&mut self) -> bool {
        let flip = self.first_attacks;
        self.first_attacks = !self.first_attacks;
        flip
    }
    fn pick_two(&mut self, _n: usize) -> (usize, usize) {
        (0, 1)
    }
}

/// Dice whose rolls always come out low enough that damage floors at zero.
struct HarmlessDice;

impl Dice for HarmlessDice {
    fn damage_roll(&mut self, _min: i32, _max: i32) -> i32 {
        -100
    }
    fn move_index(&mut self, _len: usize) -> usize {
        0
    }
    fn coin_flip(&mut self) -> bool {
        true
    }
    fn pick_two(&mut self, _n: usize) -> (usize, usize) {
        (0, 1)
    }
}

#[test]
fn minimum_roll_duel_plays_out_exactly() {
    // A(str 10, agi 4) vs B(str 8, agi 10) on all-minimum rolls with
    // alternating attackers: A's hits land for 5+10-5 = 10, B's for
    // 5+8-2 = 11. B falls on A's tenth hit, round 19.
    let mut a = Wrestler::new("A", 10, 4, 10).unwrap();
    let mut b = Wrestler::new("B", 8, 10, 10).unwrap();
    let mut dice = MinAlternatingDice {
        first_attacks: true,
    };

    let outcome = run_duel(&mut a, &mut b, &mut dice, &MatchConfig::default()).unwrap();

    assert_eq!(
        outcome.log[1],
        "A delivers a powerful suplex to B! (B takes 10 damage!)"
    );
    assert_eq!(outcome.log[2], "B's health: 90");
    assert_eq!(
        outcome.log[3],
        "B delivers a powerful suplex to A! (A takes 11 damage!)"
    );
    assert_eq!(outcome.log[4], "A's health: 89");

    assert_eq!(outcome.winner, "A");
    assert_eq!(outcome.rounds, 19);
    assert_eq!(b.health, 0);
    assert_eq!(a.health, 1);
}

#[test]
fn bounded_damage_terminates_within_total_health_rounds() {
    // Every hit lands for at least 1, so 200 total health bounds the
    // round count at 200 even in the worst case.
    let mut w1 = Wrestler::new("Grinder", 1, 1, 1).unwrap();
    let mut w2 = Wrestler::new("Mule", 1, 1, 1).unwrap();
    let mut dice = MinAlternatingDice {
        first_attacks: false,
    };

    let outcome = run_duel(&mut w1, &mut w2, &mut dice, &MatchConfig::default()).unwrap();
    assert!(outcome.rounds <= 200);
}

#[test]
fn zero_damage_forever_hits_the_round_limit() {
    let mut w1 = Wrestler::new("Pillow", 1, 20, 1).unwrap();
    let mut w2 = Wrestler::new("Feather", 1, 20, 1).unwrap();
    let config = MatchConfig {
        max_rounds: 50,
        ..MatchConfig::default()
    };

    let err = run_duel(&mut w1, &mut w2, &mut HarmlessDice, &config).unwrap_err();
    assert!(matches!(err, RingError::RoundLimit(50)));
    // Nobody ever got hurt.
    assert_eq!(w1.health, config.starting_health);
    assert_eq!(w2.health, config.starting_health);
}

#[test]
fn configured_starting_health_shapes_the_match() {
    // Same all-minimum scenario as above, but entering at 50 health:
    // B falls on A's fifth 10-point hit, round 9, with A on 50-4*11 = 6.
    let mut a = Wrestler::new("A", 10, 4, 10).unwrap();
    let mut b = Wrestler::new("B", 8, 10, 10).unwrap();
    let config = MatchConfig {
        starting_health: 50,
        ..MatchConfig::default()
    };
    let mut dice = MinAlternatingDice {
        first_attacks: true,
    };

    let outcome = run_duel(&mut a, &mut b, &mut dice, &config).unwrap();

    assert_eq!(outcome.log[2], "B's health: 40");
    assert_eq!(outcome.winner, "A");
    assert_eq!(outcome.rounds, 9);
    assert_eq!(a.health, 6);
    assert_eq!(b.health, 0);
}

#[test]
fn seeded_duel_leaves_one_standing() {
    let mut w1 = Wrestler::new("Colossus", 14, 5, 8).unwrap();
    let mut w2 = Wrestler::new("Phantom", 7, 16, 12).unwrap();
    let mut dice = SeededDice::from_seed(2024);

    let outcome = run_duel(&mut w1, &mut w2, &mut dice, &MatchConfig::default()).unwrap();

    let (winner, loser) = if outcome.winner == w1.name {
        (&w1, &w2)
    } else {
        (&w2, &w1)
    };
    assert!(winner.health > 0);
    assert_eq!(loser.health, 0);
    assert_eq!(
        outcome.log.last().unwrap(),
        &format!("{} wins the match!", winner.name)
    );
}
