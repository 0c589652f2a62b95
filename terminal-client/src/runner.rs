use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use common::games::tictactoe::{Outcome, PlayerKind, Side, TicTacToeSession};
use common::history::GameMode;
use crate::input::{HELP_TEXT, InputCommand, parse_command, parse_yes};
use crate::render::{render_board, render_scoreboard};

pub struct PlayOptions {
    pub bot_delay: Duration,
}

fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

fn player_label(session: &TicTacToeSession, side: Side) -> String {
    match (session.settings.mode, session.player(side)) {
        (GameMode::AiVsAi, PlayerKind::Bot(difficulty)) => format!("{} bot ({})", difficulty, side),
        (_, PlayerKind::Bot(_)) => format!("Computer ({})", side),
        (GameMode::VsAi, PlayerKind::Human) => format!("You ({})", side),
        (_, PlayerKind::Human) => format!("Player {}", side),
    }
}

fn announce(session: &TicTacToeSession) -> String {
    match session.game_state.status {
        Outcome::InProgress => "Game in progress".to_string(),
        Outcome::Draw => "It's a draw!".to_string(),
        Outcome::Win(side) => match (session.settings.mode, session.player(side)) {
            (GameMode::VsAi, PlayerKind::Human) => "You win!".to_string(),
            (GameMode::VsAi, PlayerKind::Bot(_)) => "Computer wins!".to_string(),
            _ => format!("{} wins!", player_label(session, side)),
        },
    }
}

fn show_board<W: Write>(session: &TicTacToeSession, out: &mut W) -> io::Result<()> {
    let winning_line = session.game_state.winning_line();
    writeln!(out, "\n{}\n", render_board(&session.game_state.board, winning_line.as_ref()))
}

/// Plays matches until the user quits or declines a rematch. `on_match_over`
/// runs once for every match that reaches a result.
pub fn run_matches<R: BufRead, W: Write>(
    session: &mut TicTacToeSession,
    input: &mut R,
    out: &mut W,
    options: &PlayOptions,
    mut on_match_over: impl FnMut(&TicTacToeSession),
) -> io::Result<()> {
    writeln!(out, "{}", HELP_TEXT)?;

    loop {
        show_board(session, out)?;

        while !session.game_state.is_over() {
            let side = session.game_state.current_side;

            if session.is_bot_turn() {
                if !options.bot_delay.is_zero() {
                    thread::sleep(options.bot_delay);
                }
                let Some((position, _)) = session.play_bot_turn() else {
                    break;
                };
                writeln!(out, "{} plays {}", player_label(session, side), position)?;
                show_board(session, out)?;
                continue;
            }

            write!(out, "{}> ", player_label(session, side))?;
            out.flush()?;
            let Some(line) = read_line(input)? else {
                return Ok(());
            };

            match parse_command(&line) {
                Ok(InputCommand::Place(position)) => match session.play_human_turn(position) {
                    Ok(_) => show_board(session, out)?,
                    Err(e) => writeln!(out, "{}", e)?,
                },
                Ok(InputCommand::Undo) => match session.undo() {
                    Ok(()) => {
                        if session.settings.mode != GameMode::TwoPlayer {
                            writeln!(out, "Undo not available against the computer. Starting new game.")?;
                        }
                        show_board(session, out)?;
                    }
                    Err(e) => writeln!(out, "{}", e)?,
                },
                Ok(InputCommand::Restart) => {
                    session.restart();
                    show_board(session, out)?;
                }
                Ok(InputCommand::Quit) => return Ok(()),
                Ok(InputCommand::Help) => writeln!(out, "{}", HELP_TEXT)?,
                Err(e) => writeln!(out, "{}", e)?,
            }
        }

        if session.game_state.is_over() {
            writeln!(out, "{}", announce(session))?;
            writeln!(out, "{}", render_scoreboard(&session.scoreboard))?;
            on_match_over(session);
        }

        write!(out, "Play again? [y/N] ")?;
        out.flush()?;
        match read_line(input)? {
            Some(line) if parse_yes(&line) => session.restart(),
            _ => return Ok(()),
        }
    }
}

pub fn run_watch<W: Write>(
    session: &mut TicTacToeSession,
    games: u32,
    out: &mut W,
    options: &PlayOptions,
) -> io::Result<()> {
    for game in 1..=games {
        writeln!(out, "=== Game {} of {} ===", game, games)?;
        session.restart();

        while session.is_bot_turn() {
            let side = session.game_state.current_side;
            if !options.bot_delay.is_zero() {
                thread::sleep(options.bot_delay);
            }
            let Some((position, _)) = session.play_bot_turn() else {
                break;
            };
            writeln!(out, "{} plays {}", player_label(session, side), position)?;
        }

        show_board(session, out)?;
        writeln!(out, "{}", announce(session))?;
    }

    writeln!(out, "{}", render_scoreboard(&session.scoreboard))
}
