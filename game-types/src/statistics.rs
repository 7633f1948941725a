use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use ts_rs::TS;

/// What a finished session reports to the statistics sink.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GameOutcome {
    pub won: bool,
    pub attempts_used: u32,
    pub final_score: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GameStatistics {
    pub games_played: u32,
    pub games_won: u32,
    pub current_streak: u32,
    pub max_streak: u32,
    pub total_score: f64,
    pub average_score: f64,
    pub win_percentage: f64,
    pub average_guesses: f64,
    /// Attempts-to-win histogram, keyed by attempt count.
    pub guess_distribution: BTreeMap<u32, u32>,
}
