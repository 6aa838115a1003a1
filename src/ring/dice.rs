//! Injectable randomness for the match engines
//!
//! Every random decision the simulation makes goes through the `Dice`
//! trait. Matches run against `SeededDice` are fully reproducible from
//! their seed; tests substitute scripted implementations.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of every random decision in a match
pub trait Dice {
    /// Base damage roll, uniform in `min..=max`.
    fn damage_roll(&mut self, min: i32, max: i32) -> i32;

    /// Index into the move catalogue, uniform in `0..len`.
    fn move_index(&mut self, len: usize) -> usize;

    /// Attacker/defender ordering flip for a duel round.
    fn coin_flip(&mut self) -> bool;

    /// Two distinct indices in `0..n`, first is the attacker.
    ///
    /// Requires `n >= 2`; the battle royal engine enforces this before
    /// its first sample.
    fn pick_two(&mut self, n: usize) -> (usize, usize);
}

/// Production dice backed by a seeded ChaCha8 generator
pub struct SeededDice {
    rng: ChaCha8Rng,
}

impl SeededDice {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: ChaCha8Rng::from_entropy(),
        }
    }
}

impl Dice for SeededDice {
    fn damage_roll(&mut self, min: i32, max: i32) -> i32 {
        self.rng.gen_range(min..=max)
    }

    fn move_index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }

    fn coin_flip(&mut self) -> bool {
        self.rng.gen_bool(0.5)
    }

    fn pick_two(&mut self, n: usize) -> (usize, usize) {
        debug_assert!(n >= 2);
        let first = self.rng.gen_range(0..n);
        // Sample the second from the remaining n-1 slots, skipping the first.
        let mut second = self.rng.gen_range(0..n - 1);
        if second >= first {
            second += 1;
        }
        (first, second)
    }
}
