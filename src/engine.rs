//! Round creation: difficulty budget, word validation and the head start.

use rand::Rng;

use crate::common::GameError;
use crate::config::{Difficulty, RoundOptions};
use crate::round::Round;
use crate::words::WordList;

/// Stateless round factory holding the behavior switches.
///
/// All per-game state lives in the [`Round`] values it hands out; the
/// engine performs no I/O, takes no locks and is safe to share. The caller
/// owns each round and serializes access to it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GameEngine {
    options: RoundOptions,
}

impl GameEngine {
    /// Engine with default options: no head start, accent folding on.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: RoundOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> RoundOptions {
        self.options
    }

    /// Create a round over an already-chosen word, applying the head start
    /// when enabled.
    pub fn new_round<R: Rng>(
        &self,
        difficulty: Difficulty,
        word: &str,
        rng: &mut R,
    ) -> Result<Round, GameError> {
        let mut round = Round::new(word, difficulty, self.options)?;
        if self.options.reveal_head_start {
            round.apply_head_start(rng);
        }
        Ok(round)
    }

    /// Pick a word uniformly from `words` and start a round with it.
    pub fn start<R: Rng>(
        &self,
        difficulty: Difficulty,
        words: &WordList,
        rng: &mut R,
    ) -> Result<Round, GameError> {
        let word = words.pick(rng);
        self.new_round(difficulty, word, rng)
    }
}
