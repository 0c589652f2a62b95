use std::io::{self, Write};

use common::history::{MatchHistory, PlayerStats, RECENT_GAMES_LIMIT};

pub fn write_stats<W: Write>(history: &MatchHistory, player_name: &str, out: &mut W) -> io::Result<()> {
    writeln!(out, "Statistics for: {}", player_name)?;
    writeln!(out)?;

    let stats = PlayerStats::from_history(history, player_name);
    if stats.total_games == 0 {
        return writeln!(out, "No games played yet.");
    }

    writeln!(out, "Overall Statistics:")?;
    writeln!(out, "Total Games: {}", stats.total_games)?;
    writeln!(out, "Wins: {}", stats.wins)?;
    writeln!(out, "Losses: {}", stats.losses)?;
    writeln!(out, "Draws: {}", stats.draws)?;
    if let Some(win_rate) = stats.win_rate() {
        writeln!(out, "Overall Win Rate: {:.1}%", win_rate)?;
    }
    if let Some(last_played) = history.last_played(player_name) {
        writeln!(
            out,
            "Last Played: {}",
            last_played.with_timezone(&chrono::Local).format("%Y-%m-%d %H:%M")
        )?;
    }

    writeln!(out)?;
    writeln!(out, "Recent Games:")?;
    for (index, record) in history
        .recent_for(player_name, RECENT_GAMES_LIMIT)
        .into_iter()
        .enumerate()
    {
        writeln!(out, "{}. {}", index + 1, record.summary())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use common::games::tictactoe::{Difficulty, Side};
    use common::history::{GameMode, MatchRecord, MatchResult};

    fn record(result: MatchResult) -> MatchRecord {
        MatchRecord {
            played_at: Utc::now(),
            player_name: "ann".to_string(),
            opponent_name: "AI".to_string(),
            mode: GameMode::VsAi,
            difficulty: Some(Difficulty::Easy),
            player_side: Side::X,
            result,
            moves: "XXXOO----".to_string(),
        }
    }

    #[test]
    fn test_stats_for_unknown_player() {
        let mut out = Vec::new();
        write_stats(&MatchHistory::default(), "nobody", &mut out).unwrap();
        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("No games played yet."));
    }

    #[test]
    fn test_stats_summary() {
        let mut history = MatchHistory::default();
        history.push(record(MatchResult::Win));
        history.push(record(MatchResult::Loss));
        history.push(record(MatchResult::Win));
        history.push(record(MatchResult::Draw));

        let mut out = Vec::new();
        write_stats(&history, "ann", &mut out).unwrap();
        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("Total Games: 4"));
        assert!(output.contains("Wins: 2"));
        assert!(output.contains("Overall Win Rate: 50.0%"));
        assert!(output.contains("4. VS AI - Easy - "));
    }
}
