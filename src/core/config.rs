//! Match tuning constants with documented ranges
//!
//! All magic numbers used by the simulation are collected here with
//! explanations of their purpose and how they interact with each other.

use std::path::Path;

use serde::Deserialize;

use crate::core::error::{Result, RingError};

/// Every wrestler enters the ring at this health.
pub const STARTING_HEALTH: i32 = 100;

/// Lower bound for strength/agility/charisma.
pub const ATTRIBUTE_MIN: i32 = 1;

/// Upper bound for strength/agility/charisma.
pub const ATTRIBUTE_MAX: i32 = 20;

/// Configuration for a single match
///
/// These values have been tuned so a typical duel resolves in well under
/// twenty rounds. Changing them affects pacing, not the rules.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Health each participant starts the match with.
    pub starting_health: i32,

    /// Minimum base damage roll per move (inclusive).
    ///
    /// With the default range (5..=15), even a minimum roll against an
    /// agile defender can still land for zero once strength and agility
    /// modifiers are applied. Damage never goes negative.
    pub damage_roll_min: i32,

    /// Maximum base damage roll per move (inclusive).
    pub damage_roll_max: i32,

    /// Hard cap on duel rounds before the match is aborted.
    ///
    /// Damage floors at zero, so a pathological attribute pairing could in
    /// principle stall forever. The cap is a policy choice: at 1000 rounds
    /// a match that has not produced a knockout is declared stuck and the
    /// engine returns an error instead of spinning. A battle royal scales
    /// this cap by the number of eliminations required.
    pub max_rounds: u32,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            starting_health: STARTING_HEALTH,
            damage_roll_min: 5,
            damage_roll_max: 15,
            max_rounds: 1000,
        }
    }
}

impl MatchConfig {
    /// Load overrides from a TOML file. Absent keys keep their defaults.
    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| RingError::ConfigError(format!("{}: {e}", path.display())))
    }
}
