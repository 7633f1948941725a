use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::{Difficulty, GameStatus, Guess, SessionId};

/// Result of a guess submission as shown to the player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GuessResponse {
    pub valid: bool,
    pub message: Option<String>,
}

impl GuessResponse {
    pub fn accepted() -> Self {
        Self {
            valid: true,
            message: None,
        }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: Some(message.into()),
        }
    }
}

/// Session view handed to the UI. The target word stays hidden until the
/// game is over.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GameSnapshot {
    pub id: SessionId,
    pub difficulty: Difficulty,
    pub word_length: usize,
    pub guesses: Vec<Guess>,
    pub current_guess: String,
    pub status: GameStatus,
    pub attempts_left: u32,
    pub max_attempts: u32,
    pub hints_used: u32,
    pub score: f64,
    pub target_word: Option<String>,
    pub start_time: String,       // ISO 8601 string
    pub end_time: Option<String>, // ISO 8601 string
}

/// End-of-game recap used for sharing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GameSummary {
    pub attempts: u32,
    pub won: bool,
    pub score: f64,
    pub target_word: String,
    pub guess_words: Vec<String>,
    pub share_text: String,
}
