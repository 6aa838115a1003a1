pub mod history;
pub mod store;
pub mod wrestler;

pub use history::{HistoryStore, MatchRecord};
pub use store::{JsonRosterStore, RosterStore, WrestlerRecord};
pub use wrestler::Wrestler;
