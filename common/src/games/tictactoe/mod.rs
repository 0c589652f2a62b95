mod board;
mod bot_controller;
mod game_state;
mod session;
mod types;
mod win_detector;

pub use board::Board;
pub use bot_controller::{
    RANDOM_MOVE_PERCENT, calculate_minimax_move, calculate_random_move, find_winning_move,
    select_move,
};
pub use game_state::{MoveError, TicTacToeGameState};
pub use session::{
    PlayerKind, Scoreboard, TicTacToeSession, TicTacToeSessionSettings, describe_outcome,
};
pub use types::{BOARD_SIZE, Cell, Difficulty, Line, Outcome, Position, Side, WinningLine};
pub use win_detector::{
    LINES, check_win, check_win_with_line, evaluate, is_draw, is_terminal, is_winning_line,
};
