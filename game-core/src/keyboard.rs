use game_types::{Guess, LetterState};
use serde::Serialize;
use std::collections::BTreeMap;

/// Best feedback seen per letter across a guess history.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct KeyboardState {
    keys: BTreeMap<char, LetterState>,
}

impl KeyboardState {
    pub fn from_guesses(guesses: &[Guess]) -> Self {
        let mut keys: BTreeMap<char, LetterState> = BTreeMap::new();

        for guess in guesses {
            for (_, letter, state) in guess.letters() {
                let best = keys.entry(letter).or_insert(state);
                if state.rank() > best.rank() {
                    *best = state;
                }
            }
        }

        Self { keys }
    }

    /// `Empty` for letters no guess has used yet.
    pub fn get(&self, letter: char) -> LetterState {
        self.keys
            .get(&letter.to_ascii_uppercase())
            .copied()
            .unwrap_or(LetterState::Empty)
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, LetterState)> + '_ {
        self.keys.iter().map(|(letter, state)| (*letter, *state))
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
