use common::games::tictactoe::{BOARD_SIZE, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputCommand {
    Place(Position),
    Undo,
    Restart,
    Quit,
    Help,
}

/// Accepts `row col` (0-based), a single keypad digit `1`-`9` in row-major
/// order, or one of the word commands.
pub fn parse_command(line: &str) -> Result<InputCommand, String> {
    let trimmed = line.trim().to_ascii_lowercase();
    match trimmed.as_str() {
        "u" | "undo" => return Ok(InputCommand::Undo),
        "r" | "restart" => return Ok(InputCommand::Restart),
        "q" | "quit" | "exit" => return Ok(InputCommand::Quit),
        "h" | "?" | "help" => return Ok(InputCommand::Help),
        "" => return Err("Enter a move".to_string()),
        _ => {}
    }

    let parts: Vec<&str> = trimmed
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|part| !part.is_empty())
        .collect();

    match parts.as_slice() {
        [cell] => {
            let number: usize = cell
                .parse()
                .map_err(|_| format!("Unknown command '{}'", cell))?;
            number
                .checked_sub(1)
                .and_then(Position::from_index)
                .map(InputCommand::Place)
                .ok_or_else(|| format!("Cell number must be between 1 and {}", BOARD_SIZE * BOARD_SIZE))
        }
        [row, col] => {
            let row: usize = row.parse().map_err(|_| format!("Invalid row '{}'", row))?;
            let col: usize = col.parse().map_err(|_| format!("Invalid column '{}'", col))?;
            let position = Position::new(row, col);
            if !position.is_on_board() {
                return Err(format!(
                    "Row and column must be between 0 and {}",
                    BOARD_SIZE - 1
                ));
            }
            Ok(InputCommand::Place(position))
        }
        _ => Err(format!("Could not understand '{}'", line.trim())),
    }
}

pub fn parse_yes(line: &str) -> bool {
    matches!(line.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

pub const HELP_TEXT: &str = "\
Moves: 'row col' (0-2 each, e.g. '1 2') or a cell number 1-9:
   1 | 2 | 3
   4 | 5 | 6
   7 | 8 | 9
Commands: u = undo, r = restart, q = quit, h = help";
