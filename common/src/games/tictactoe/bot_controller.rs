use rand::Rng;
use rand::seq::IndexedRandom;

use super::board::Board;
use super::types::{Difficulty, Position, Side};
use super::win_detector::check_win;

pub const RANDOM_MOVE_PERCENT: u32 = 30;

const WIN_SCORE: i32 = 10;

const POSITIONAL_PRIORITY: [Position; 9] = [
    Position::new(1, 1),
    Position::new(0, 0),
    Position::new(0, 2),
    Position::new(2, 0),
    Position::new(2, 2),
    Position::new(0, 1),
    Position::new(1, 0),
    Position::new(1, 2),
    Position::new(2, 1),
];

/// Picks a cell for `side`. Returns `None` only when the board has no empty cell;
/// callers are expected to check for game over first.
///
/// `rng` is only drawn from by [`Difficulty::Easy`], so Hard and Medium are fully
/// deterministic for a given board.
pub fn select_move<R: Rng + ?Sized>(
    board: &Board,
    side: Side,
    difficulty: Difficulty,
    rng: &mut R,
) -> Option<Position> {
    match difficulty {
        Difficulty::Hard => calculate_minimax_move(board, side),
        Difficulty::Medium => calculate_medium_move(board, side, rng),
        Difficulty::Easy => calculate_easy_move(board, side, rng),
    }
}

pub fn calculate_random_move<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<Position> {
    let available_moves: Vec<Position> = board.available_moves().collect();
    available_moves.choose(rng).copied()
}

fn calculate_easy_move<R: Rng + ?Sized>(board: &Board, side: Side, rng: &mut R) -> Option<Position> {
    if rng.random_range(0..100) < RANDOM_MOVE_PERCENT {
        return calculate_random_move(board, rng);
    }
    calculate_medium_move(board, side, rng)
}

fn calculate_medium_move<R: Rng + ?Sized>(
    board: &Board,
    side: Side,
    rng: &mut R,
) -> Option<Position> {
    if let Some(position) = find_winning_move(board, side) {
        return Some(position);
    }

    if let Some(position) = find_winning_move(board, side.opponent()) {
        return Some(position);
    }

    if let Some(position) = POSITIONAL_PRIORITY
        .into_iter()
        .find(|&pos| board.is_valid_move(pos))
    {
        return Some(position);
    }

    calculate_random_move(board, rng)
}

/// First empty cell, row-major, where `side` completes a line.
pub fn find_winning_move(board: &Board, side: Side) -> Option<Position> {
    board
        .available_moves()
        .find(|&pos| check_win(&board.with_mark(pos, side)) == Some(side))
}

pub fn calculate_minimax_move(board: &Board, bot_side: Side) -> Option<Position> {
    let mut best_move = None;
    let mut best_score = i32::MIN;

    for position in board.available_moves() {
        let score = minimax(board.with_mark(position, bot_side), 0, false, bot_side);

        if score > best_score {
            best_score = score;
            best_move = Some(position);
        }
    }

    best_move
}

fn minimax(board: Board, depth: i32, is_maximizing: bool, bot_side: Side) -> i32 {
    if let Some(winner) = check_win(&board) {
        return if winner == bot_side {
            WIN_SCORE - depth
        } else {
            depth - WIN_SCORE
        };
    }

    if board.is_full() {
        return 0;
    }

    let mover = if is_maximizing {
        bot_side
    } else {
        bot_side.opponent()
    };

    let scores = board
        .available_moves()
        .map(|pos| minimax(board.with_mark(pos, mover), depth + 1, !is_maximizing, bot_side));

    if is_maximizing {
        scores.max().unwrap_or(0)
    } else {
        scores.min().unwrap_or(0)
    }
}
