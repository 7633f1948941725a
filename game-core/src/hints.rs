use game_types::{Guess, HintData, LetterState};
use rand::Rng;
use rand::seq::IndexedRandom;
use std::collections::HashSet;

/// Letters appearing in any guess, and positions already confirmed correct.
pub fn revealed_from_guesses(guesses: &[Guess]) -> (HashSet<char>, HashSet<usize>) {
    let mut guessed_letters = HashSet::new();
    let mut correct_positions = HashSet::new();

    for guess in guesses {
        for (position, letter, state) in guess.letters() {
            guessed_letters.insert(letter);
            if state == LetterState::Correct {
                correct_positions.insert(position);
            }
        }
    }

    (guessed_letters, correct_positions)
}

/// Target letters still worth hinting, in target order without repeats.
///
/// A letter is excluded once it appears anywhere in any guess, whatever
/// feedback it received; a position is excluded once it was marked correct.
pub fn available_hints(
    target: &str,
    guessed_letters: &HashSet<char>,
    correct_positions: &HashSet<usize>,
) -> Vec<char> {
    let mut hints = Vec::new();

    for (position, letter) in target.chars().map(|c| c.to_ascii_uppercase()).enumerate() {
        if guessed_letters.contains(&letter) || correct_positions.contains(&position) {
            continue;
        }
        if !hints.contains(&letter) {
            hints.push(letter);
        }
    }

    hints
}

pub fn pick_hint<R: Rng + ?Sized>(available: &[char], rng: &mut R) -> Option<char> {
    available.choose(rng).copied()
}

/// One of the positions where `letter` occurs in `target`, chosen uniformly.
pub fn hint_position<R: Rng + ?Sized>(target: &str, letter: char, rng: &mut R) -> Option<usize> {
    let positions: Vec<usize> = target
        .chars()
        .enumerate()
        .filter(|(_, c)| c.to_ascii_uppercase() == letter)
        .map(|(i, _)| i)
        .collect();

    positions.choose(rng).copied()
}

/// Full hint selection over a guess history. `None` means no hints remain.
pub fn select_hint<R: Rng + ?Sized>(
    target: &str,
    guesses: &[Guess],
    rng: &mut R,
) -> Option<HintData> {
    let (guessed_letters, correct_positions) = revealed_from_guesses(guesses);
    let available = available_hints(target, &guessed_letters, &correct_positions);
    let letter = pick_hint(&available, rng)?;

    Some(HintData {
        letter,
        position: hint_position(target, letter, rng),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluation::score_guess;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn set<T: std::hash::Hash + Eq + Copy>(items: &[T]) -> HashSet<T> {
        items.iter().copied().collect()
    }

    #[test]
    fn test_available_hints_preserve_target_order_without_duplicates() {
        let hints = available_hints("APPLE", &HashSet::new(), &HashSet::new());
        assert_eq!(hints, vec!['A', 'P', 'L', 'E']);
    }

    #[test]
    fn test_guessed_letters_excluded_everywhere() {
        // P was guessed (even if absent elsewhere), so neither P is offered.
        let hints = available_hints("APPLE", &set(&['P', 'Z']), &HashSet::new());
        assert_eq!(hints, vec!['A', 'L', 'E']);
    }

    #[test]
    fn test_correct_positions_excluded() {
        let hints = available_hints("APPLE", &HashSet::new(), &set(&[0, 4]));
        assert_eq!(hints, vec!['P', 'L']);
    }

    #[test]
    fn test_revealed_from_guesses() {
        let guesses = vec![score_guess("ALLOY", "APPLE").unwrap()];
        let (letters, positions) = revealed_from_guesses(&guesses);
        assert_eq!(letters, set(&['A', 'L', 'O', 'Y']));
        assert_eq!(positions, set(&[0]));
    }

    #[test]
    fn test_pick_hint_empty() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(pick_hint(&[], &mut rng), None);
    }

    #[test]
    fn test_pick_hint_draws_from_available() {
        let mut rng = StdRng::seed_from_u64(42);
        let available = ['K', 'Q', 'X'];
        for _ in 0..20 {
            let letter = pick_hint(&available, &mut rng).unwrap();
            assert!(available.contains(&letter));
        }
    }

    #[test]
    fn test_hint_position_points_at_letter() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..20 {
            let position = hint_position("APPLE", 'P', &mut rng).unwrap();
            assert!(position == 1 || position == 2);
        }
        assert_eq!(hint_position("APPLE", 'Z', &mut rng), None);
    }

    #[test]
    fn test_select_hint_skips_revealed_letters() {
        let mut rng = StdRng::seed_from_u64(9);
        let guesses = vec![score_guess("ALLOY", "APPLE").unwrap()];

        for _ in 0..20 {
            let hint = select_hint("APPLE", &guesses, &mut rng).unwrap();
            assert!(hint.letter == 'P' || hint.letter == 'E');
            let position = hint.position.unwrap();
            assert_eq!("APPLE".chars().nth(position), Some(hint.letter));
        }
    }

    #[test]
    fn test_select_hint_exhausted() {
        let mut rng = StdRng::seed_from_u64(5);
        let guesses = vec![
            score_guess("PLACE", "APPLE").unwrap(),
        ];
        assert_eq!(select_hint("APPLE", &guesses, &mut rng), None);
    }
}
