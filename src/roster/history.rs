//! Append-only match history
//!
//! Each completed match appends one record. The file is a JSON list;
//! a missing file reads as an empty history.

use std::io::ErrorKind;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::core::error::Result;
use crate::ring::outcome::MatchOutcome;

/// One finished match, as stored in the history file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchRecord {
    pub winner: String,
    pub participants: Vec<String>,
    pub rounds: u32,
    pub log: Vec<String>,
}

impl MatchRecord {
    pub fn from_outcome(outcome: &MatchOutcome, participants: Vec<String>) -> Self {
        Self {
            winner: outcome.winner.clone(),
            participants,
            rounds: outcome.rounds,
            log: outcome.log.clone(),
        }
    }
}

/// History store backed by a single JSON file
pub struct HistoryStore {
    path: PathBuf,
}

impl HistoryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Load all recorded matches, oldest first.
    pub fn load(&self) -> Result<Vec<MatchRecord>> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no history file, starting empty");
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };
        Ok(serde_json::from_str(&content)?)
    }

    /// Append one match to the history.
    pub fn append(&self, record: MatchRecord) -> Result<()> {
        let mut records = self.load()?;
        records.push(record);
        let json = serde_json::to_string_pretty(&records)?;
        std::fs::write(&self.path, json)?;
        tracing::debug!(count = records.len(), "history updated");
        Ok(())
    }
}
