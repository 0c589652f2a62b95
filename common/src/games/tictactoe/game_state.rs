use std::fmt;

use super::board::Board;
use super::types::{Outcome, Position, Side, WinningLine};
use super::win_detector::{check_win_with_line, evaluate};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    GameOver,
    OutOfBounds { row: usize, col: usize },
    Occupied(Position),
    NotYourTurn,
    NothingToUndo,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::GameOver => write!(f, "Game is already over"),
            MoveError::OutOfBounds { row, col } => {
                write!(f, "Position ({}, {}) is out of bounds", row, col)
            }
            MoveError::Occupied(pos) => write!(f, "Cell {} is already marked", pos),
            MoveError::NotYourTurn => write!(f, "Not your turn"),
            MoveError::NothingToUndo => write!(f, "No moves to undo"),
        }
    }
}

impl std::error::Error for MoveError {}

#[derive(Debug, Clone)]
pub struct TicTacToeGameState {
    pub board: Board,
    pub current_side: Side,
    pub status: Outcome,
    pub last_move: Option<Position>,
    pub moves: Vec<Position>,
}

impl Default for TicTacToeGameState {
    fn default() -> Self {
        Self::new()
    }
}

impl TicTacToeGameState {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_side: Side::X,
            status: Outcome::InProgress,
            last_move: None,
            moves: Vec::new(),
        }
    }

    pub fn place_mark(&mut self, position: Position) -> Result<Outcome, MoveError> {
        if self.status.is_over() {
            return Err(MoveError::GameOver);
        }

        if !position.is_on_board() {
            return Err(MoveError::OutOfBounds {
                row: position.row,
                col: position.col,
            });
        }

        if !self.board.is_valid_move(position) {
            return Err(MoveError::Occupied(position));
        }

        self.board.place(position, self.current_side);
        self.last_move = Some(position);
        self.moves.push(position);

        self.status = evaluate(&self.board);

        if !self.status.is_over() {
            self.current_side = self.current_side.opponent();
        }

        Ok(self.status)
    }

    /// Takes back the most recent move, reopening a finished game if needed.
    pub fn undo(&mut self) -> Result<Position, MoveError> {
        let Some(position) = self.moves.pop() else {
            return Err(MoveError::NothingToUndo);
        };

        self.board.clear(position);
        self.last_move = self.moves.last().copied();
        self.status = evaluate(&self.board);
        self.current_side = self.board.side_to_move().unwrap_or(Side::X);

        Ok(position)
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        check_win_with_line(&self.board)
    }

    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(state: &mut TicTacToeGameState, moves: &[(usize, usize)]) -> Outcome {
        let mut outcome = Outcome::InProgress;
        for &(row, col) in moves {
            outcome = state.place_mark(Position::new(row, col)).unwrap();
        }
        outcome
    }

    #[test]
    fn test_x_moves_first_and_turns_alternate() {
        let mut state = TicTacToeGameState::new();
        assert_eq!(state.current_side, Side::X);
        state.place_mark(Position::new(1, 1)).unwrap();
        assert_eq!(state.current_side, Side::O);
        assert_eq!(state.last_move, Some(Position::new(1, 1)));
        state.place_mark(Position::new(0, 0)).unwrap();
        assert_eq!(state.current_side, Side::X);
    }

    #[test]
    fn test_occupied_and_out_of_bounds_rejected() {
        let mut state = TicTacToeGameState::new();
        state.place_mark(Position::new(0, 0)).unwrap();
        assert_eq!(
            state.place_mark(Position::new(0, 0)),
            Err(MoveError::Occupied(Position::new(0, 0)))
        );
        assert_eq!(
            state.place_mark(Position::new(0, 3)),
            Err(MoveError::OutOfBounds { row: 0, col: 3 })
        );
        assert_eq!(state.current_side, Side::O);
        assert_eq!(state.moves.len(), 1);
    }

    #[test]
    fn test_win_stops_the_game() {
        let mut state = TicTacToeGameState::new();
        let outcome = play(&mut state, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
        assert_eq!(outcome, Outcome::Win(Side::X));
        assert_eq!(state.current_side, Side::X);
        assert_eq!(state.winning_line().map(|l| l.side), Some(Side::X));
        assert_eq!(
            state.place_mark(Position::new(2, 2)),
            Err(MoveError::GameOver)
        );
    }

    #[test]
    fn test_draw_detected_on_last_move() {
        let mut state = TicTacToeGameState::new();
        let outcome = play(
            &mut state,
            &[(0, 0), (0, 1), (0, 2), (1, 1), (1, 0), (1, 2), (2, 1), (2, 0), (2, 2)],
        );
        assert_eq!(outcome, Outcome::Draw);
        assert!(state.is_over());
        assert_eq!(state.board.to_notation(), "XOXXOOOXX");
    }

    #[test]
    fn test_undo_reopens_finished_game() {
        let mut state = TicTacToeGameState::new();
        play(&mut state, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
        assert_eq!(state.undo(), Ok(Position::new(0, 2)));
        assert_eq!(state.status, Outcome::InProgress);
        assert_eq!(state.current_side, Side::X);
        assert_eq!(state.last_move, Some(Position::new(1, 1)));
    }

    #[test]
    fn test_undo_on_empty_board_fails() {
        let mut state = TicTacToeGameState::new();
        assert_eq!(state.undo(), Err(MoveError::NothingToUndo));
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut state = TicTacToeGameState::new();
        play(&mut state, &[(0, 0), (1, 1)]);
        state.reset();
        assert!(state.board.is_empty());
        assert!(state.moves.is_empty());
        assert_eq!(state.current_side, Side::X);
        assert_eq!(state.status, Outcome::InProgress);
    }
}
