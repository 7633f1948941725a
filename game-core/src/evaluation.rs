use game_types::{Guess, GuessShapeError, LetterState};
use std::collections::HashMap;

/// Score `guess` against `target` with Wordle's duplicate-letter rule.
///
/// Both words are compared case-insensitively. Callers must pass words of
/// equal length; positions past the end of the shorter word are not
/// produced.
///
/// 1. Every exact match is marked `Correct` and consumes one copy of its
///    letter from the target's letter pool.
/// 2. Remaining positions, left to right, become `Present` while the pool
///    still holds a copy of their letter, and `Absent` otherwise.
///
/// The first pass must finish before the second starts, so a letter guessed
/// twice but present once in the target gets exactly one non-absent state.
pub fn evaluate(guess: &str, target: &str) -> Vec<LetterState> {
    let guess_chars: Vec<char> = guess.chars().map(|c| c.to_ascii_uppercase()).collect();
    let target_chars: Vec<char> = target.chars().map(|c| c.to_ascii_uppercase()).collect();
    debug_assert_eq!(
        guess_chars.len(),
        target_chars.len(),
        "evaluate requires equal-length words"
    );

    let length = guess_chars.len().min(target_chars.len());
    let mut states = vec![LetterState::Absent; length];

    // Count frequency of each letter in target for handling duplicates
    let mut remaining: HashMap<char, u32> = HashMap::new();
    for ch in &target_chars {
        *remaining.entry(*ch).or_insert(0) += 1;
    }

    // First pass: exact matches
    for i in 0..length {
        if guess_chars[i] == target_chars[i] {
            states[i] = LetterState::Correct;
            if let Some(count) = remaining.get_mut(&guess_chars[i]) {
                *count -= 1;
            }
        }
    }

    // Second pass: displaced matches, leftmost first
    for i in 0..length {
        if states[i] == LetterState::Correct {
            continue;
        }

        if let Some(count) = remaining.get_mut(&guess_chars[i]) {
            if *count > 0 {
                states[i] = LetterState::Present;
                *count -= 1;
            }
        }
    }

    states
}

/// Evaluate and wrap into a [`Guess`] record.
pub fn score_guess(word: &str, target: &str) -> Result<Guess, GuessShapeError> {
    let states = evaluate(word, target);
    let word: String = word.chars().take(states.len()).collect();
    Guess::new(&word, states)
}
