pub mod battle_royal;
pub mod dice;
pub mod duel;
pub mod moves;
pub mod outcome;

pub use battle_royal::run_battle_royal;
pub use dice::{Dice, SeededDice};
pub use duel::run_duel;
pub use moves::{compute_damage, resolve_move, MoveResult};
pub use outcome::MatchOutcome;
