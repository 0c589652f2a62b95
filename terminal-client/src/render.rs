use common::games::tictactoe::{BOARD_SIZE, Board, Position, Scoreboard, Side, WinningLine};

/// Board grid with the cells of `highlight` wrapped in brackets.
pub fn render_board(board: &Board, highlight: Option<&WinningLine>) -> String {
    let rows: Vec<String> = (0..BOARD_SIZE)
        .map(|row| {
            (0..BOARD_SIZE)
                .map(|col| {
                    let symbol = board.cell(row, col).side().map_or(' ', Side::symbol);
                    let highlighted = highlight.is_some_and(|line| line.contains(Position::new(row, col)));
                    if highlighted {
                        format!("[{}]", symbol)
                    } else {
                        format!(" {} ", symbol)
                    }
                })
                .collect::<Vec<_>>()
                .join("|")
        })
        .collect();
    rows.join("\n---+---+---\n")
}

pub fn render_scoreboard(scoreboard: &Scoreboard) -> String {
    format!(
        "Player X: {}  Player O: {}  Draws: {}",
        scoreboard.x_wins, scoreboard.o_wins, scoreboard.draws
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::games::tictactoe::check_win_with_line;

    #[test]
    fn test_render_plain_board() {
        let board: Board = "X-- -O- ---".parse().unwrap();
        let rendered = render_board(&board, None);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], " X |   |   ");
        assert_eq!(lines[2], "   | O |   ");
    }

    #[test]
    fn test_render_highlights_winning_line() {
        let board: Board = "XXX OO- ---".parse().unwrap();
        let line = check_win_with_line(&board);
        let rendered = render_board(&board, line.as_ref());
        assert!(rendered.starts_with("[X]|[X]|[X]"));
        assert!(rendered.contains(" O | O |   "));
    }

    #[test]
    fn test_render_scoreboard() {
        let scoreboard = Scoreboard { x_wins: 2, o_wins: 1, draws: 3 };
        assert_eq!(render_scoreboard(&scoreboard), "Player X: 2  Player O: 1  Draws: 3");
    }
}
