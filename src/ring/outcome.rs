use serde::{Deserialize, Serialize};

/// Result of a completed match
///
/// The log is the full play-by-play in the order it happened, ending
/// with the winner announcement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchOutcome {
    /// Name of the winning wrestler.
    pub winner: String,
    /// Number of attack rounds the match ran.
    pub rounds: u32,
    /// Ordered narrative log.
    pub log: Vec<String>,
}
