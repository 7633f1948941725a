use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;
use uuid::Uuid;

use crate::GuessShapeError;

pub type SessionId = Uuid;

pub const MIN_WORD_LENGTH: usize = 3;
pub const MAX_WORD_LENGTH: usize = 14;
pub const WORD_LENGTH_OPTIONS: [usize; 12] = [3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14];

pub fn is_valid_word_length(length: usize) -> bool {
    (MIN_WORD_LENGTH..=MAX_WORD_LENGTH).contains(&length)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum LetterState {
    Correct, // Green - right letter, right square
    Present, // Yellow - in the word, elsewhere
    Absent,  // Gray - not in the word (or no copies left)
    Empty,   // Unfilled board cell, never produced by evaluation
}

impl LetterState {
    /// Keyboard priority: a higher rank is never overwritten by a lower one.
    pub fn rank(self) -> u8 {
        match self {
            LetterState::Correct => 3,
            LetterState::Present => 2,
            LetterState::Absent => 1,
            LetterState::Empty => 0,
        }
    }
}

/// A submitted, evaluated guess.
///
/// `states[i]` always describes `word[i]`, and no state is ever `Empty`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct Guess {
    word: String,
    states: Vec<LetterState>,
}

impl Guess {
    pub fn new(word: &str, states: Vec<LetterState>) -> Result<Self, GuessShapeError> {
        let word = word.to_ascii_uppercase();
        let word_length = word.chars().count();

        if word_length != states.len() {
            return Err(GuessShapeError::LengthMismatch {
                word_length,
                states_length: states.len(),
            });
        }

        if let Some(position) = states.iter().position(|s| *s == LetterState::Empty) {
            return Err(GuessShapeError::EmptyState { position });
        }

        Ok(Self { word, states })
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn states(&self) -> &[LetterState] {
        &self.states
    }

    /// Letters paired with their feedback, left to right.
    pub fn letters(&self) -> impl Iterator<Item = (usize, char, LetterState)> + '_ {
        self.word
            .chars()
            .zip(self.states.iter().copied())
            .enumerate()
            .map(|(i, (ch, state))| (i, ch, state))
    }

    pub fn is_winning(&self) -> bool {
        self.states.iter().all(|s| *s == LetterState::Correct)
    }

    pub fn count(&self, state: LetterState) -> usize {
        self.states.iter().filter(|s| **s == state).count()
    }
}

impl<'de> Deserialize<'de> for Guess {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct GuessRecord {
            word: String,
            states: Vec<LetterState>,
        }

        let record = GuessRecord::deserialize(deserializer)?;
        Guess::new(&record.word, record.states).map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn max_attempts(self) -> u32 {
        match self {
            Difficulty::Easy => 7,
            Difficulty::Medium => 5,
            Difficulty::Hard => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(format!("unknown difficulty: {other}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum GameStatus {
    Playing, // Accepting guesses
    Won,     // Terminal
    Lost,    // Terminal
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Won | GameStatus::Lost)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GameSettings {
    pub difficulty: Difficulty,
    pub word_length: usize,
    /// Submit automatically once the pending input reaches `word_length`.
    pub auto_submit: bool,
}

impl GameSettings {
    pub fn new(difficulty: Difficulty, word_length: usize) -> Self {
        Self {
            difficulty,
            word_length,
            auto_submit: false,
        }
    }
}

impl Default for GameSettings {
    fn default() -> Self {
        Self::new(Difficulty::Medium, 5)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct HintData {
    pub letter: char,
    pub position: Option<usize>,
}
