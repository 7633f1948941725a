use thiserror::Error;

/// Raised when a guess record would break the word/states alignment.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessShapeError {
    #[error("guess has {word_length} letters but {states_length} states")]
    LengthMismatch {
        word_length: usize,
        states_length: usize,
    },
    #[error("guess state at position {position} is empty")]
    EmptyState { position: usize },
}
