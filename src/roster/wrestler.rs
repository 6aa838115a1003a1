//! The wrestler model
//!
//! A wrestler is identified by name within a roster. Attributes are
//! fixed at creation; only health changes, and only through
//! `take_damage`. Health lives in `[0, starting_health]` and is never
//! persisted: every match starts from full health.

use crate::core::config::{ATTRIBUTE_MAX, ATTRIBUTE_MIN, STARTING_HEALTH};
use crate::core::error::{Result, RingError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wrestler {
    pub name: String,
    pub strength: i32,
    pub agility: i32,
    pub charisma: i32,
    pub health: i32,
}

impl Wrestler {
    /// Create a wrestler at full health, validating name and attributes
    ///
    /// This is the boundary where bad input stops: the engines assume
    /// every wrestler they see passed this check.
    pub fn new(
        name: impl Into<String>,
        strength: i32,
        agility: i32,
        charisma: i32,
    ) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(RingError::InvalidWrestler(
                "name must not be empty".to_string(),
            ));
        }
        for (label, value) in [
            ("strength", strength),
            ("agility", agility),
            ("charisma", charisma),
        ] {
            if !(ATTRIBUTE_MIN..=ATTRIBUTE_MAX).contains(&value) {
                return Err(RingError::InvalidWrestler(format!(
                    "{label} must be between {ATTRIBUTE_MIN} and {ATTRIBUTE_MAX}, got {value}"
                )));
            }
        }

        Ok(Self {
            name,
            strength,
            agility,
            charisma,
            health: STARTING_HEALTH,
        })
    }

    /// Reduce health by `damage`, clamped at zero.
    pub fn take_damage(&mut self, damage: i32) {
        debug_assert!(damage >= 0);
        self.health = (self.health - damage).max(0);
    }

    pub fn is_knocked_out(&self) -> bool {
        self.health <= 0
    }
}
