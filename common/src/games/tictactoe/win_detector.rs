use super::board::Board;
use super::types::{Cell, Line, Outcome, Position, Side, WinningLine};

const fn pos(row: usize, col: usize) -> Position {
    Position::new(row, col)
}

/// Rows top to bottom, columns left to right, then the two diagonals.
/// When several lines are complete the first one in this order wins.
pub const LINES: [Line; 8] = [
    [pos(0, 0), pos(0, 1), pos(0, 2)],
    [pos(1, 0), pos(1, 1), pos(1, 2)],
    [pos(2, 0), pos(2, 1), pos(2, 2)],
    [pos(0, 0), pos(1, 0), pos(2, 0)],
    [pos(0, 1), pos(1, 1), pos(2, 1)],
    [pos(0, 2), pos(1, 2), pos(2, 2)],
    [pos(0, 0), pos(1, 1), pos(2, 2)],
    [pos(0, 2), pos(1, 1), pos(2, 0)],
];

pub fn is_winning_line(a: Cell, b: Cell, c: Cell) -> bool {
    !a.is_empty() && a == b && b == c
}

pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    LINES.iter().find_map(|&line| {
        let [a, b, c] = line.map(|p| board.cell(p.row, p.col));
        if is_winning_line(a, b, c) {
            a.side().map(|side| WinningLine::new(side, line))
        } else {
            None
        }
    })
}

pub fn check_win(board: &Board) -> Option<Side> {
    check_win_with_line(board).map(|line| line.side)
}

pub fn is_draw(board: &Board) -> bool {
    board.is_full() && check_win(board).is_none()
}

pub fn is_terminal(board: &Board) -> bool {
    check_win(board).is_some() || board.is_full()
}

pub fn evaluate(board: &Board) -> Outcome {
    if let Some(side) = check_win(board) {
        Outcome::Win(side)
    } else if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}
