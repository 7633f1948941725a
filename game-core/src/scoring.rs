use game_types::{Guess, LetterState};

pub const CORRECT_LETTER_POINTS: f64 = 1.0;
pub const PRESENT_LETTER_POINTS: f64 = 0.5;
pub const ATTEMPT_LEFT_POINTS: f64 = 3.0;
pub const HINT_PENALTY: f64 = 0.5;

pub struct ScoringEngine;

impl ScoringEngine {
    /// Recompute the session score from scratch.
    ///
    /// Every `Correct` state across the history is worth 1 point and every
    /// `Present` state half a point, plus 3 points per remaining attempt,
    /// minus half a point per hint. Never negative.
    pub fn score(guesses: &[Guess], attempts_left: u32, hints_used: u32) -> f64 {
        let letter_points: f64 = guesses
            .iter()
            .flat_map(|guess| guess.states().iter())
            .map(|state| Self::letter_points(*state))
            .sum();

        let total = letter_points + ATTEMPT_LEFT_POINTS * f64::from(attempts_left)
            - HINT_PENALTY * f64::from(hints_used);

        total.max(0.0)
    }

    pub fn letter_points(state: LetterState) -> f64 {
        match state {
            LetterState::Correct => CORRECT_LETTER_POINTS,
            LetterState::Present => PRESENT_LETTER_POINTS,
            LetterState::Absent | LetterState::Empty => 0.0,
        }
    }
}
