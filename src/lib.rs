//! Iron Ring - Turn-Based Wrestling Match Simulator

pub mod core;
pub mod ring;
pub mod roster;
