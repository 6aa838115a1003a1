use thiserror::Error;

#[derive(Error, Debug)]
pub enum RingError {
    #[error("Wrestler not found: {0}")]
    WrestlerNotFound(String),

    #[error("Invalid wrestler: {0}")]
    InvalidWrestler(String),

    #[error("Battle royal needs at least {needed} wrestlers, got {got}")]
    NotEnoughWrestlers { needed: usize, got: usize },

    #[error("Match aborted after hitting the round limit of {0}")]
    RoundLimit(u32),

    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RingError>;
