use chrono::{DateTime, Duration, Utc};
use game_types::{
    Difficulty, GameOutcome, GameSettings, GameSnapshot, GameStatus, GameSummary, Guess,
    HintData, MAX_WORD_LENGTH, MIN_WORD_LENGTH, SessionId, is_valid_word_length,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};
use uuid::Uuid;

use crate::{
    FormatIssue, GameError, KeyboardState, ScoringEngine, WordRepository, hints, score_guess,
};

/// One player's game: the secret word, the guess history and the counters
/// derived from it.
///
/// Only guess submission and hint requests mutate a session. Once the status
/// is `Won` or `Lost` the session is frozen.
#[derive(Debug)]
pub struct GameSession {
    id: SessionId,
    target_word: String, // Hidden from snapshots until the game ends
    difficulty: Difficulty,
    word_length: usize,
    max_attempts: u32,
    guesses: Vec<Guess>,
    current_guess: String,
    status: GameStatus,
    attempts_left: u32,
    hints_used: u32,
    score: f64,
    start_time: DateTime<Utc>,
    end_time: Option<DateTime<Utc>>,
    rng: StdRng,
}

/// What an accepted guess did to the session.
#[derive(Debug, Clone, PartialEq)]
pub struct GuessOutcome {
    pub guess: Guess,
    pub status: GameStatus,
    pub attempts_left: u32,
    pub score: f64,
}

impl GameSession {
    /// Start a game with a fresh target drawn from `words`.
    pub fn start<R: Rng>(
        settings: GameSettings,
        words: &WordRepository,
        rng: &mut R,
    ) -> Result<Self, GameError> {
        if !words.is_ready() {
            return Err(GameError::data_unavailable("word repository not initialized"));
        }

        let target_word = words.random_word_of_length(settings.word_length, rng)?;
        let session_rng = StdRng::from_rng(rng);
        Ok(Self::build(settings.difficulty, target_word, session_rng))
    }

    /// Start a game with a known target word. The word length comes from
    /// the target.
    pub fn with_target(difficulty: Difficulty, target_word: &str) -> Result<Self, GameError> {
        Self::with_target_seeded(difficulty, target_word, rand::random())
    }

    /// Like [`GameSession::with_target`] with a deterministic hint RNG.
    pub fn with_target_seeded(
        difficulty: Difficulty,
        target_word: &str,
        seed: u64,
    ) -> Result<Self, GameError> {
        let target_word = target_word.trim();
        if target_word.is_empty() || !target_word.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(GameError::InvalidFormat(FormatIssue::NonLetter));
        }

        let length = target_word.len();
        if !is_valid_word_length(length) {
            return Err(GameError::InvalidFormat(FormatIssue::WrongLength {
                expected: length.clamp(MIN_WORD_LENGTH, MAX_WORD_LENGTH),
                actual: length,
            }));
        }

        Ok(Self::build(
            difficulty,
            target_word.to_ascii_uppercase(),
            StdRng::seed_from_u64(seed),
        ))
    }

    fn build(difficulty: Difficulty, target_word: String, rng: StdRng) -> Self {
        let max_attempts = difficulty.max_attempts();
        let session = Self {
            id: Uuid::new_v4(),
            word_length: target_word.len(),
            target_word,
            difficulty,
            max_attempts,
            guesses: Vec::new(),
            current_guess: String::new(),
            status: GameStatus::Playing,
            attempts_left: max_attempts,
            hints_used: 0,
            score: ScoringEngine::score(&[], max_attempts, 0),
            start_time: Utc::now(),
            end_time: None,
            rng,
        };

        info!(
            "Started session {} ({} letters, {} attempts)",
            session.id, session.word_length, session.max_attempts
        );
        session
    }

    /// Check the shape of a submission before any dictionary lookup.
    pub fn validate_format(&self, text: &str) -> Result<(), GameError> {
        if self.status != GameStatus::Playing {
            return Err(GameError::InvalidFormat(FormatIssue::GameNotInProgress));
        }

        let actual = text.chars().count();
        if actual != self.word_length {
            return Err(GameError::InvalidFormat(FormatIssue::WrongLength {
                expected: self.word_length,
                actual,
            }));
        }

        if !text.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(GameError::InvalidFormat(FormatIssue::NonLetter));
        }

        Ok(())
    }

    /// Submit a guess.
    ///
    /// Format problems leave the session untouched. A word missing from the
    /// dictionary clears the pending input but consumes no attempt.
    pub fn submit_guess(
        &mut self,
        text: &str,
        words: &WordRepository,
    ) -> Result<GuessOutcome, GameError> {
        self.validate_format(text)?;

        if !words.is_valid_word(text) {
            debug!("Session {} rejected unknown word '{}'", self.id, text);
            self.current_guess.clear();
            return Err(GameError::NotAWord {
                word: text.to_ascii_uppercase(),
            });
        }

        let guess = score_guess(text, &self.target_word)?;
        let won = guess.is_winning();

        self.guesses.push(guess.clone());
        self.attempts_left = self.attempts_left.saturating_sub(1);
        self.current_guess.clear();

        if won {
            self.finish(GameStatus::Won);
        } else if self.attempts_left == 0 {
            self.finish(GameStatus::Lost);
        }

        self.refresh_score();

        info!(
            "Session {} guess {}/{}: {} -> {:?}",
            self.id,
            self.guesses.len(),
            self.max_attempts,
            guess.word(),
            self.status
        );

        Ok(GuessOutcome {
            guess,
            status: self.status,
            attempts_left: self.attempts_left,
            score: self.score,
        })
    }

    /// Submit whatever is pending in `current_guess`.
    pub fn submit_current_guess(
        &mut self,
        words: &WordRepository,
    ) -> Result<GuessOutcome, GameError> {
        let text = self.current_guess.clone();
        self.submit_guess(&text, words)
    }

    /// Reveal one letter not yet covered by any guess. `None` when the game
    /// is over or nothing is left to reveal.
    pub fn request_hint(&mut self) -> Option<HintData> {
        if self.status != GameStatus::Playing {
            return None;
        }

        let hint = hints::select_hint(&self.target_word, &self.guesses, &mut self.rng)?;
        self.hints_used += 1;
        self.refresh_score();

        debug!("Session {} used hint #{}", self.id, self.hints_used);
        Some(hint)
    }

    /// Replace the pending input. Text is uppercased and cut to the word
    /// length; ignored once the game is over.
    pub fn update_current_guess(&mut self, text: &str) {
        if self.status != GameStatus::Playing {
            return;
        }
        self.current_guess = text
            .chars()
            .take(self.word_length)
            .collect::<String>()
            .to_uppercase();
    }

    /// Whether the pending input is long enough to submit.
    pub fn is_current_guess_complete(&self) -> bool {
        self.current_guess.chars().count() == self.word_length
    }

    pub fn keyboard_state(&self) -> KeyboardState {
        KeyboardState::from_guesses(&self.guesses)
    }

    fn finish(&mut self, status: GameStatus) {
        self.status = status;
        self.end_time = Some(Utc::now());
    }

    fn refresh_score(&mut self) {
        self.score = ScoringEngine::score(&self.guesses, self.attempts_left, self.hints_used);
    }

    /// The statistics record for a finished game.
    pub fn outcome(&self) -> Option<GameOutcome> {
        if !self.status.is_terminal() {
            return None;
        }

        Some(GameOutcome {
            won: self.status == GameStatus::Won,
            attempts_used: self.attempts_used(),
            final_score: self.score,
        })
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            id: self.id,
            difficulty: self.difficulty,
            word_length: self.word_length,
            guesses: self.guesses.clone(),
            current_guess: self.current_guess.clone(),
            status: self.status,
            attempts_left: self.attempts_left,
            max_attempts: self.max_attempts,
            hints_used: self.hints_used,
            score: self.score,
            target_word: self
                .status
                .is_terminal()
                .then(|| self.target_word.clone()),
            start_time: self.start_time.to_rfc3339(),
            end_time: self.end_time.map(|t| t.to_rfc3339()),
        }
    }

    /// Share recap, available once the game is over.
    pub fn summary(&self) -> Option<GameSummary> {
        let outcome = self.outcome()?;

        let mut share_text = format!(
            "Word Game - {}\nWord: {}\n{}\nScore: {}",
            self.difficulty.label(),
            self.target_word,
            if outcome.won {
                format!("Solved in {} attempts", outcome.attempts_used)
            } else {
                "Not solved".to_string()
            },
            outcome.final_score
        );
        if self.hints_used > 0 {
            share_text.push_str(&format!("\nHints used: {}", self.hints_used));
        }

        Some(GameSummary {
            attempts: outcome.attempts_used,
            won: outcome.won,
            score: outcome.final_score,
            target_word: self.target_word.clone(),
            guess_words: self.guesses.iter().map(|g| g.word().to_string()).collect(),
            share_text,
        })
    }

    /// Wall-clock time played so far, or in total once finished.
    pub fn duration(&self) -> Duration {
        self.end_time.unwrap_or_else(Utc::now) - self.start_time
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn target_word(&self) -> &str {
        &self.target_word
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn word_length(&self) -> usize {
        self.word_length
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    pub fn guesses(&self) -> &[Guess] {
        &self.guesses
    }

    pub fn current_guess(&self) -> &str {
        &self.current_guess
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn attempts_left(&self) -> u32 {
        self.attempts_left
    }

    pub fn attempts_used(&self) -> u32 {
        self.max_attempts - self.attempts_left
    }

    pub fn hints_used(&self) -> u32 {
        self.hints_used
    }

    pub fn score(&self) -> f64 {
        self.score
    }

    pub fn start_time(&self) -> DateTime<Utc> {
        self.start_time
    }

    pub fn end_time(&self) -> Option<DateTime<Utc>> {
        self.end_time
    }
}

/// `"2m 5s"`, or just `"42s"` under a minute.
pub fn format_duration(duration: Duration) -> String {
    let total_seconds = duration.num_seconds().max(0);
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;

    if minutes > 0 {
        format!("{minutes}m {seconds}s")
    } else {
        format!("{seconds}s")
    }
}
