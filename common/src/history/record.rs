use std::fmt;

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

use super::HISTORY_VERSION;
use crate::games::tictactoe::{Difficulty, Outcome, Side};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameMode {
    VsAi,
    TwoPlayer,
    AiVsAi,
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GameMode::VsAi => "VS AI",
            GameMode::TwoPlayer => "Two Player",
            GameMode::AiVsAi => "AI vs AI",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchResult {
    Win,
    Loss,
    Draw,
    XWin,
    OWin,
}

impl MatchResult {
    /// Result of a finished match from `side`'s point of view.
    pub fn for_side(outcome: Outcome, side: Side) -> Option<Self> {
        match outcome {
            Outcome::InProgress => None,
            Outcome::Draw => Some(MatchResult::Draw),
            Outcome::Win(winner) if winner == side => Some(MatchResult::Win),
            Outcome::Win(_) => Some(MatchResult::Loss),
        }
    }

    /// Result named after the winning side, for matches with no single owner.
    pub fn by_winning_side(outcome: Outcome) -> Option<Self> {
        match outcome {
            Outcome::InProgress => None,
            Outcome::Draw => Some(MatchResult::Draw),
            Outcome::Win(Side::X) => Some(MatchResult::XWin),
            Outcome::Win(Side::O) => Some(MatchResult::OWin),
        }
    }
}

impl fmt::Display for MatchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MatchResult::Win => "Win",
            MatchResult::Loss => "Loss",
            MatchResult::Draw => "Draw",
            MatchResult::XWin => "X Win",
            MatchResult::OWin => "O Win",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub played_at: DateTime<Utc>,
    pub player_name: String,
    pub opponent_name: String,
    pub mode: GameMode,
    pub difficulty: Option<Difficulty>,
    pub player_side: Side,
    pub result: MatchResult,
    pub moves: String,
}

impl MatchRecord {
    pub fn summary(&self) -> String {
        let difficulty = self
            .difficulty
            .map_or_else(|| "-".to_string(), |d| d.to_string());
        format!(
            "{} - {} - {} vs {} - {}",
            self.mode,
            difficulty,
            self.result,
            self.opponent_name,
            self.played_at.with_timezone(&Local).format("%Y-%m-%d %H:%M"),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchHistory {
    pub version: u8,
    pub records: Vec<MatchRecord>,
}

impl Default for MatchHistory {
    fn default() -> Self {
        Self {
            version: HISTORY_VERSION,
            records: Vec::new(),
        }
    }
}

impl MatchHistory {
    pub fn push(&mut self, record: MatchRecord) {
        self.records.push(record);
    }

    /// Most recent first.
    pub fn recent_for(&self, player_name: &str, limit: usize) -> Vec<&MatchRecord> {
        let mut records: Vec<&MatchRecord> = self
            .records
            .iter()
            .filter(|r| r.player_name == player_name)
            .collect();
        records.sort_by(|a, b| b.played_at.cmp(&a.played_at));
        records.truncate(limit);
        records
    }

    pub fn last_played(&self, player_name: &str) -> Option<DateTime<Utc>> {
        self.records
            .iter()
            .filter(|r| r.player_name == player_name)
            .map(|r| r.played_at)
            .max()
    }
}
