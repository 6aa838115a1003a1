pub mod config;
pub mod error;

pub use config::MatchConfig;
pub use error::{Result, RingError};
