use super::record::{MatchHistory, MatchResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlayerStats {
    pub total_games: u32,
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
}

impl PlayerStats {
    pub fn from_history(history: &MatchHistory, player_name: &str) -> Self {
        history
            .records
            .iter()
            .filter(|r| r.player_name == player_name)
            .fold(Self::default(), |mut stats, record| {
                stats.total_games += 1;
                // Two-player records are kept from X's seat.
                match record.result {
                    MatchResult::Win | MatchResult::XWin => stats.wins += 1,
                    MatchResult::Loss | MatchResult::OWin => stats.losses += 1,
                    MatchResult::Draw => stats.draws += 1,
                }
                stats
            })
    }

    /// Percentage of games won, or `None` before the first game.
    pub fn win_rate(&self) -> Option<f64> {
        if self.total_games == 0 {
            return None;
        }
        Some(f64::from(self.wins) * 100.0 / f64::from(self.total_games))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::record::tests::record;

    #[test]
    fn test_stats_count_only_named_player() {
        let mut history = MatchHistory::default();
        history.push(record("ann", MatchResult::Win, 1));
        history.push(record("ann", MatchResult::Win, 2));
        history.push(record("ann", MatchResult::Loss, 3));
        history.push(record("ann", MatchResult::Draw, 4));
        history.push(record("bob", MatchResult::Loss, 5));

        let stats = PlayerStats::from_history(&history, "ann");
        assert_eq!(
            stats,
            PlayerStats {
                total_games: 4,
                wins: 2,
                losses: 1,
                draws: 1,
            }
        );
        assert_eq!(stats.win_rate(), Some(50.0));
    }

    #[test]
    fn test_two_player_results_count_from_x_seat() {
        let mut history = MatchHistory::default();
        history.push(record("ann", MatchResult::XWin, 1));
        history.push(record("ann", MatchResult::OWin, 2));
        history.push(record("ann", MatchResult::OWin, 3));

        let stats = PlayerStats::from_history(&history, "ann");
        assert_eq!(stats.wins, 1);
        assert_eq!(stats.losses, 2);
        assert_eq!(stats.draws, 0);
        assert_eq!(stats.total_games, 3);
    }

    #[test]
    fn test_no_games_has_no_win_rate() {
        let stats = PlayerStats::from_history(&MatchHistory::default(), "nobody");
        assert_eq!(stats.total_games, 0);
        assert_eq!(stats.win_rate(), None);
    }
}
