//! Common types for Hangman: game errors, guess results and round status.

/// Result of submitting a guess to a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GuessResult {
    /// Guess revealed at least one position of the word.
    Hit,
    /// Guess matched no position and cost a life.
    Miss,
    /// Letter was already submitted; the round is unchanged.
    Repeat,
    /// Round is already over; the round is unchanged.
    GameOver,
}

/// Current status of a round. `Won` and `Lost` are absorbing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// Errors returned by round creation and guess submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// Selected word is empty, or contains no guessable letter.
    InvalidWord,
    /// Guess input is not a single recognized letter after normalization.
    InvalidGuess,
}

impl core::fmt::Display for GameError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GameError::InvalidWord => write!(f, "Word has no guessable letters"),
            GameError::InvalidGuess => write!(f, "Guess must be a single letter"),
        }
    }
}
