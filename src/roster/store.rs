//! Flat-file roster persistence
//!
//! The roster is a JSON list of records holding name and attributes
//! only. Health is deliberately absent from the schema: wrestlers
//! always load at full health, whatever happened to them last match.

use std::io::ErrorKind;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::core::error::Result;
use crate::roster::wrestler::Wrestler;

/// Storage collaborator for the roster
///
/// Handlers receive an implementation of this trait rather than
/// touching the filesystem themselves.
pub trait RosterStore {
    /// Load the full roster. A missing store is an empty roster.
    fn load_roster(&self) -> Result<Vec<Wrestler>>;

    /// Overwrite the stored roster with `roster`.
    fn save_roster(&self, roster: &[Wrestler]) -> Result<()>;
}

/// On-disk shape of one wrestler. No health field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WrestlerRecord {
    pub name: String,
    pub strength: i32,
    pub agility: i32,
    pub charisma: i32,
}

impl From<&Wrestler> for WrestlerRecord {
    fn from(w: &Wrestler) -> Self {
        Self {
            name: w.name.clone(),
            strength: w.strength,
            agility: w.agility,
            charisma: w.charisma,
        }
    }
}

impl TryFrom<WrestlerRecord> for Wrestler {
    type Error = crate::core::error::RingError;

    /// Records re-enter through the validating constructor, so a
    /// hand-edited file cannot smuggle bad attributes past the boundary.
    fn try_from(record: WrestlerRecord) -> Result<Self> {
        Wrestler::new(record.name, record.strength, record.agility, record.charisma)
    }
}

/// Roster store backed by a single JSON file
pub struct JsonRosterStore {
    path: PathBuf,
}

impl JsonRosterStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RosterStore for JsonRosterStore {
    fn load_roster(&self) -> Result<Vec<Wrestler>> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no roster file, starting empty");
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };
        let records: Vec<WrestlerRecord> = serde_json::from_str(&content)?;
        let roster: Vec<Wrestler> = records
            .into_iter()
            .map(Wrestler::try_from)
            .collect::<Result<_>>()?;
        tracing::debug!(count = roster.len(), "roster loaded");
        Ok(roster)
    }

    fn save_roster(&self, roster: &[Wrestler]) -> Result<()> {
        let records: Vec<WrestlerRecord> = roster.iter().map(WrestlerRecord::from).collect();
        let json = serde_json::to_string_pretty(&records)?;
        std::fs::write(&self.path, json)?;
        tracing::debug!(count = roster.len(), "roster saved");
        Ok(())
    }
}
