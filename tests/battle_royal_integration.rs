//! Battle royal engine integration tests

use iron_ring::core::config::MatchConfig;
use iron_ring::core::error::RingError;
use iron_ring::ring::{run_battle_royal, Dice, SeededDice};
use iron_ring::roster::Wrestler;

fn field(names: &[&str]) -> Vec<Wrestler> {
    names
        .iter()
        .map(|n| Wrestler::new(*n, 10, 8, 10).unwrap())
        .collect()
}

/// One-hit knockouts, always pairing the first two live wrestlers.
struct SteamrollerDice;

impl Dice for SteamrollerDice {
    fn damage_roll(&mut self, _min: i32, _max: i32) -> i32 {
        1000
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

/// Forwards to seeded dice but panics if a wrestler ever gets sampled
/// as both attacker and defender in the same round.
struct DistinctCheckingDice(SeededDice);

impl Dice for DistinctCheckingDice {
    fn damage_roll(&mut self, min: i32, max: i32) -> i32 {
        self.0.damage_roll(min, max)
    }
    fn move_index(&mut self, len: usize) -> usize {
        self.0.move_index(len)
    }
    fn coin_flip(&mut self) -> bool {
        self.0.coin_flip()
    }
    fn pick_two(&mut self, n: usize) -> (usize, usize) {
        let (a, d) = self.0.pick_two(n);
        assert_ne!(a, d, "attacker and defender must be distinct");
        (a, d)
    }
}

#[test]
fn three_one_hit_knockouts_leave_one_winner() {
    // Round 1: Ox flattens Viper. Round 2: Ox flattens Titan.
    let outcome = run_battle_royal(
        field(&["Ox", "Viper", "Titan"]),
        &mut SteamrollerDice,
        &MatchConfig::default(),
    )
    .unwrap();

    assert_eq!(outcome.rounds, 2);
    assert_eq!(outcome.winner, "Ox");

    let eliminations: Vec<&String> = outcome
        .log
        .iter()
        .filter(|line| line.contains("is eliminated"))
        .collect();
    assert_eq!(eliminations.len(), 2);
    assert!(eliminations[0].contains("Viper"));
    assert!(eliminations[1].contains("Titan"));
    assert_eq!(outcome.log.last().unwrap(), "Ox wins the Battle Royal!");
}

#[test]
fn every_knockout_removes_exactly_one_wrestler() {
    let names = ["Ox", "Viper", "Titan", "Comet", "Gale", "Boulder"];
    let outcome = run_battle_royal(
        field(&names),
        &mut SeededDice::from_seed(11),
        &MatchConfig::default(),
    )
    .unwrap();

    let eliminations = outcome
        .log
        .iter()
        .filter(|line| line.contains("is eliminated"))
        .count();
    assert_eq!(eliminations, names.len() - 1);
    assert!(names.contains(&outcome.winner.as_str()));
}

#[test]
fn sampling_never_pairs_a_wrestler_with_itself() {
    let names = ["Ox", "Viper", "Titan", "Comet", "Gale", "Boulder"];
    let mut dice = DistinctCheckingDice(SeededDice::from_seed(8));
    run_battle_royal(field(&names), &mut dice, &MatchConfig::default()).unwrap();
}

#[test]
fn fewer_than_two_participants_is_an_error() {
    let err = run_battle_royal(
        field(&["Hermit"]),
        &mut SeededDice::from_seed(1),
        &MatchConfig::default(),
    )
    .unwrap_err();
    assert!(matches!(
        err,
        RingError::NotEnoughWrestlers { needed: 2, got: 1 }
    ));
}

#[test]
fn same_seed_reproduces_the_whole_card() {
    let names = ["Ox", "Viper", "Titan", "Comet"];
    let config = MatchConfig::default();

    let first =
        run_battle_royal(field(&names), &mut SeededDice::from_seed(31), &config).unwrap();
    let second =
        run_battle_royal(field(&names), &mut SeededDice::from_seed(31), &config).unwrap();

    assert_eq!(first.winner, second.winner);
    assert_eq!(first.log, second.log);
}
