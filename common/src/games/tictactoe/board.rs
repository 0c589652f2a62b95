use std::fmt;
use std::str::FromStr;

use super::types::{BOARD_SIZE, Cell, Position, Side};

const EMPTY_SYMBOL: char = '-';

/// Row-major 3x3 grid. `Copy`, so search code can branch on values instead of
/// placing and erasing marks on a shared grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, position: Position) -> Option<Cell> {
        self.cells.get(position.row)?.get(position.col).copied()
    }

    pub fn cell(&self, row: usize, col: usize) -> Cell {
        self.get(Position::new(row, col)).unwrap_or(Cell::Empty)
    }

    pub fn is_valid_move(&self, position: Position) -> bool {
        self.get(position) == Some(Cell::Empty)
    }

    /// Writes `side` at `position`. Off-board positions are ignored.
    pub fn place(&mut self, position: Position, side: Side) {
        if let Some(cell) = self
            .cells
            .get_mut(position.row)
            .and_then(|row| row.get_mut(position.col))
        {
            *cell = Cell::Marked(side);
        }
    }

    pub fn clear(&mut self, position: Position) {
        if let Some(cell) = self
            .cells
            .get_mut(position.row)
            .and_then(|row| row.get_mut(position.col))
        {
            *cell = Cell::Empty;
        }
    }

    pub fn with_mark(mut self, position: Position, side: Side) -> Self {
        self.place(position, side);
        self
    }

    pub fn available_moves(&self) -> impl Iterator<Item = Position> {
        Self::positions().filter(move |&pos| self.is_valid_move(pos))
    }

    pub fn positions() -> impl Iterator<Item = Position> {
        (0..BOARD_SIZE * BOARD_SIZE).filter_map(Position::from_index)
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|cell| !cell.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().flatten().all(|cell| cell.is_empty())
    }

    pub fn count(&self, side: Side) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell == Cell::Marked(side))
            .count()
    }

    /// Side whose turn it is if X always opens, or `None` when the mark counts
    /// cannot come from alternating play.
    pub fn side_to_move(&self) -> Option<Side> {
        let x = self.count(Side::X);
        let o = self.count(Side::O);
        if x == o {
            Some(Side::X)
        } else if x == o + 1 {
            Some(Side::O)
        } else {
            None
        }
    }

    /// Nine-character row-major notation, `X`, `O` and `-` for empty.
    pub fn to_notation(&self) -> String {
        self.cells
            .iter()
            .flatten()
            .map(|cell| cell.side().map_or(EMPTY_SYMBOL, Side::symbol))
            .collect()
    }
}

impl FromStr for Board {
    type Err = String;

    /// Accepts the notation produced by [`Board::to_notation`]. Whitespace is
    /// ignored and `.` or `_` may stand for an empty cell.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if symbols.len() != BOARD_SIZE * BOARD_SIZE {
            return Err(format!(
                "Board notation must have {} cells, got {}",
                BOARD_SIZE * BOARD_SIZE,
                symbols.len()
            ));
        }

        let mut board = Board::new();
        for (index, symbol) in symbols.into_iter().enumerate() {
            let Some(position) = Position::from_index(index) else {
                continue;
            };
            match symbol {
                'X' | 'x' => board.place(position, Side::X),
                'O' | 'o' => board.place(position, Side::O),
                '-' | '.' | '_' => {}
                other => return Err(format!("Unexpected board symbol '{}'", other)),
            }
        }
        Ok(board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row_index, row) in self.cells.iter().enumerate() {
            if row_index > 0 {
                writeln!(f, "---+---+---")?;
            }
            let symbols: Vec<String> = row
                .iter()
                .map(|cell| format!(" {} ", cell.side().map_or(' ', Side::symbol)))
                .collect();
            writeln!(f, "{}", symbols.join("|"))?;
        }
        Ok(())
    }
}
