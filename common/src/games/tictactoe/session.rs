use chrono::Utc;

use crate::games::SessionRng;
use crate::history::{GameMode, MatchRecord, MatchResult};
use crate::{log, log_debug};
use super::bot_controller::select_move;
use super::game_state::{MoveError, TicTacToeGameState};
use super::types::{Difficulty, Outcome, Position, Side};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerKind {
    Human,
    Bot(Difficulty),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Scoreboard {
    pub x_wins: u32,
    pub o_wins: u32,
    pub draws: u32,
}

impl Scoreboard {
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win(Side::X) => self.x_wins += 1,
            Outcome::Win(Side::O) => self.o_wins += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::InProgress => {}
        }
    }
}

pub struct TicTacToeSessionSettings {
    pub mode: GameMode,
    pub player_name: String,
    pub human_side: Side,
    pub difficulty: Difficulty,
    /// Only used by `GameMode::AiVsAi`; the other bot plays `difficulty`.
    pub opponent_difficulty: Difficulty,
}

pub struct TicTacToeSession {
    pub session_id: String,
    pub settings: TicTacToeSessionSettings,
    pub game_state: TicTacToeGameState,
    pub scoreboard: Scoreboard,
    rng: SessionRng,
}

impl TicTacToeSession {
    pub fn new(session_id: String, settings: TicTacToeSessionSettings, rng: SessionRng) -> Self {
        log_debug!(
            "[session:{}] {} match, seed {}",
            session_id,
            settings.mode,
            rng.seed()
        );
        Self {
            session_id,
            settings,
            game_state: TicTacToeGameState::new(),
            scoreboard: Scoreboard::default(),
            rng,
        }
    }

    pub fn player(&self, side: Side) -> PlayerKind {
        let settings = &self.settings;
        match settings.mode {
            GameMode::TwoPlayer => PlayerKind::Human,
            GameMode::VsAi if side == settings.human_side => PlayerKind::Human,
            GameMode::VsAi => PlayerKind::Bot(settings.difficulty),
            GameMode::AiVsAi if side == Side::X => PlayerKind::Bot(settings.difficulty),
            GameMode::AiVsAi => PlayerKind::Bot(settings.opponent_difficulty),
        }
    }

    pub fn is_bot_turn(&self) -> bool {
        !self.game_state.is_over()
            && matches!(self.player(self.game_state.current_side), PlayerKind::Bot(_))
    }

    /// Lets the bot on move choose and place a mark. Returns `None` when it is not
    /// a bot's turn or the game is already over.
    pub fn play_bot_turn(&mut self) -> Option<(Position, Outcome)> {
        if !self.is_bot_turn() {
            return None;
        }

        let side = self.game_state.current_side;
        let PlayerKind::Bot(difficulty) = self.player(side) else {
            return None;
        };

        let position = select_move(&self.game_state.board, side, difficulty, &mut self.rng)?;
        log_debug!(
            "[session:{}] {} bot ({}) picks {}",
            self.session_id,
            difficulty,
            side,
            position
        );

        match self.apply(position) {
            Ok(outcome) => Some((position, outcome)),
            Err(e) => {
                log!(
                    "[session:{}] Bot {} failed to place mark at {}: {}",
                    self.session_id,
                    side,
                    position,
                    e
                );
                None
            }
        }
    }

    pub fn play_human_turn(&mut self, position: Position) -> Result<Outcome, MoveError> {
        if self.game_state.is_over() {
            return Err(MoveError::GameOver);
        }
        if self.is_bot_turn() {
            return Err(MoveError::NotYourTurn);
        }

        self.apply(position).inspect_err(|e| {
            log_debug!(
                "[session:{}] Player {} rejected at {}: {}",
                self.session_id,
                self.game_state.current_side,
                position,
                e
            );
        })
    }

    /// Against a bot there is no real take-back: the match restarts, as a
    /// finished bot reply would otherwise have to be unwound too. Two humans
    /// take back one move at a time.
    pub fn undo(&mut self) -> Result<(), MoveError> {
        match self.settings.mode {
            GameMode::TwoPlayer => self.game_state.undo().map(|_| ()),
            GameMode::VsAi | GameMode::AiVsAi => {
                self.game_state.reset();
                Ok(())
            }
        }
    }

    pub fn restart(&mut self) {
        self.game_state.reset();
    }

    /// History entry for the finished match, from the configured player's side.
    pub fn match_record(&self) -> Option<MatchRecord> {
        let settings = &self.settings;
        let status = self.game_state.status;
        let (player_side, opponent_name, difficulty, result) = match settings.mode {
            GameMode::VsAi => (
                settings.human_side,
                "AI".to_string(),
                Some(settings.difficulty),
                MatchResult::for_side(status, settings.human_side)?,
            ),
            GameMode::TwoPlayer => (
                Side::X,
                "Local Player".to_string(),
                None,
                MatchResult::by_winning_side(status)?,
            ),
            GameMode::AiVsAi => return None,
        };

        Some(MatchRecord {
            played_at: Utc::now(),
            player_name: settings.player_name.clone(),
            opponent_name,
            mode: settings.mode,
            difficulty,
            player_side,
            result,
            moves: self.game_state.board.to_notation(),
        })
    }

    fn apply(&mut self, position: Position) -> Result<Outcome, MoveError> {
        let outcome = self.game_state.place_mark(position)?;
        if outcome.is_over() {
            self.scoreboard.record(outcome);
            log!(
                "[session:{}] Match over: {} ({})",
                self.session_id,
                describe_outcome(outcome),
                self.game_state.board.to_notation()
            );
        }
        Ok(outcome)
    }
}

pub fn describe_outcome(outcome: Outcome) -> String {
    match outcome {
        Outcome::InProgress => "in progress".to_string(),
        Outcome::Win(side) => format!("{} wins", side),
        Outcome::Draw => "draw".to_string(),
    }
}
