mod file_io;
mod record;
mod stats;

pub use file_io::{HistoryError, load_history, save_history};
pub use record::{GameMode, MatchHistory, MatchRecord, MatchResult};
pub use stats::PlayerStats;

pub const HISTORY_VERSION: u8 = 1;
pub const RECENT_GAMES_LIMIT: usize = 10;
