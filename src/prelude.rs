//! Commonly used types and utilities for ease of import.

pub use crate::{
    Difficulty, GameEngine, GameError, GameStatus, GuessResult, Round, RoundOptions, RoundView,
    WordList,
};

#[cfg(feature = "std")]
pub use crate::{init_logging, run_round, SessionStore};
