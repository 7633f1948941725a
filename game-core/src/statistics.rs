use game_types::{GameOutcome, GameStatistics};
use tracing::debug;

/// Running totals over finished games.
#[derive(Debug, Clone, Default)]
pub struct StatisticsAggregator {
    statistics: GameStatistics,
}

impl StatisticsAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resume from previously saved totals.
    pub fn from_statistics(statistics: GameStatistics) -> Self {
        Self { statistics }
    }

    pub fn record(&mut self, outcome: &GameOutcome) {
        let stats = &mut self.statistics;

        stats.games_played += 1;
        stats.total_score += outcome.final_score;

        if outcome.won {
            stats.games_won += 1;
            stats.current_streak += 1;
            *stats
                .guess_distribution
                .entry(outcome.attempts_used)
                .or_insert(0) += 1;
        } else {
            stats.current_streak = 0;
        }
        stats.max_streak = stats.max_streak.max(stats.current_streak);

        stats.average_score = stats.total_score / f64::from(stats.games_played);
        stats.win_percentage =
            f64::from(stats.games_won) / f64::from(stats.games_played) * 100.0;

        let winning_attempts: u32 = stats
            .guess_distribution
            .iter()
            .map(|(attempts, count)| attempts * count)
            .sum();
        stats.average_guesses = if stats.games_won > 0 {
            f64::from(winning_attempts) / f64::from(stats.games_won)
        } else {
            0.0
        };

        debug!(
            "Recorded game: won={} attempts={} score={} (played {})",
            outcome.won, outcome.attempts_used, outcome.final_score, stats.games_played
        );
    }

    pub fn statistics(&self) -> &GameStatistics {
        &self.statistics
    }

    pub fn reset(&mut self) {
        self.statistics = GameStatistics::default();
    }
}
