use game_types::GuessShapeError;
use thiserror::Error;

/// Why a submission was turned away before evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatIssue {
    GameNotInProgress,
    WrongLength { expected: usize, actual: usize },
    NonLetter,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// Word lists missing, unreadable or too small. Retry initialization.
    #[error("word data unavailable: {reason}")]
    DataUnavailable { reason: String },
    /// No gameplay word of the requested length. Pick another length.
    #[error("no words available with length {length}")]
    WordUnavailable { length: usize },
    #[error("{}", describe_format_issue(.0))]
    InvalidFormat(FormatIssue),
    #[error("Not a valid English word")]
    NotAWord { word: String },
    #[error(transparent)]
    MalformedGuess(#[from] GuessShapeError),
}

fn describe_format_issue(issue: &FormatIssue) -> String {
    match issue {
        FormatIssue::GameNotInProgress => "Game is not in progress".to_string(),
        FormatIssue::WrongLength { expected, .. } => {
            format!("Word must be {expected} letters long")
        }
        FormatIssue::NonLetter => "Word must contain only letters".to_string(),
    }
}

impl GameError {
    pub fn data_unavailable(reason: impl Into<String>) -> Self {
        GameError::DataUnavailable {
            reason: reason.into(),
        }
    }

    /// Rejections the player can fix by typing again; no attempt is consumed.
    pub fn is_guess_rejection(&self) -> bool {
        matches!(self, GameError::InvalidFormat(_) | GameError::NotAWord { .. })
    }
}
