//! Round state: the mask, the used-letter set and the win/loss machine.

use alloc::collections::BTreeSet;
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use rand::Rng;

use crate::common::{GameError, GameStatus, GuessResult};
use crate::config::{Difficulty, RoundOptions};
use crate::letters::{is_separator, normalize};

/// Placeholder glyph shown for unrevealed positions.
pub const MASK_CHAR: char = '_';

/// One complete play-through from word selection to `Won`/`Lost`.
///
/// The secret is kept as parallel per-position vectors: the display
/// character preserving original casing, the normalized match key
/// (`None` for separators) and a revealed flag. Separator positions are
/// revealed at creation and never count toward the win condition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    display: Vec<char>,
    keys: Vec<Option<char>>,
    revealed: Vec<bool>,
    used: BTreeSet<char>,
    wrong: u8,
    max_wrong: u8,
    status: GameStatus,
    message: Option<String>,
    options: RoundOptions,
}

impl Round {
    /// Create a fresh round over `word` with the given difficulty budget.
    ///
    /// Fails with [`GameError::InvalidWord`] when the word is empty, has no
    /// guessable letter, or contains a character that is neither a letter
    /// nor a separator.
    pub fn new(
        word: &str,
        difficulty: Difficulty,
        options: RoundOptions,
    ) -> Result<Self, GameError> {
        let mut display = Vec::new();
        let mut keys = Vec::new();
        let mut revealed = Vec::new();
        for c in word.chars() {
            if is_separator(c) {
                keys.push(None);
                revealed.push(true);
            } else {
                let key = normalize(c, options.fold_accents).ok_or(GameError::InvalidWord)?;
                keys.push(Some(key));
                revealed.push(false);
            }
            display.push(c);
        }
        if !keys.iter().any(Option::is_some) {
            return Err(GameError::InvalidWord);
        }
        Ok(Self {
            display,
            keys,
            revealed,
            used: BTreeSet::new(),
            wrong: 0,
            max_wrong: difficulty.max_wrong(),
            status: GameStatus::InProgress,
            message: None,
            options,
        })
    }

    /// Pre-reveal `floor(letters / 2) - 1` guessable positions, chosen
    /// uniformly without replacement. The revealed letters are not added to
    /// the used set, and the round always stays in progress.
    pub(crate) fn apply_head_start<R: Rng>(&mut self, rng: &mut R) {
        let guessable: Vec<usize> = (0..self.keys.len())
            .filter(|&i| self.keys[i].is_some())
            .collect();
        let count = (guessable.len() / 2).saturating_sub(1);
        if count == 0 {
            return;
        }
        for picked in rand::seq::index::sample(rng, guessable.len(), count) {
            self.revealed[guessable[picked]] = true;
        }
    }

    /// Submit one guessed character.
    ///
    /// The input is normalized first; anything that is not a single
    /// recognized letter is [`GameError::InvalidGuess`] and the round is
    /// untouched. Repeats and post-terminal guesses are defined no-ops,
    /// reported through [`GuessResult`]. A hit reveals every matching
    /// position at once; the miss that exhausts the budget transitions to
    /// `Lost` and force-reveals the word.
    pub fn guess(&mut self, raw: char) -> Result<GuessResult, GameError> {
        let letter = normalize(raw, self.options.fold_accents).ok_or(GameError::InvalidGuess)?;
        if self.status != GameStatus::InProgress {
            return Ok(GuessResult::GameOver);
        }
        if self.used.contains(&letter) {
            return Ok(GuessResult::Repeat);
        }
        self.used.insert(letter);

        let mut hit = false;
        for (i, key) in self.keys.iter().enumerate() {
            if *key == Some(letter) {
                self.revealed[i] = true;
                hit = true;
            }
        }

        if hit {
            if self.all_guessable_revealed() {
                self.status = GameStatus::Won;
                self.message = Some(format!("You won! The word was \"{}\".", self.word()));
            }
            Ok(GuessResult::Hit)
        } else {
            self.wrong += 1;
            if self.wrong >= self.max_wrong {
                self.status = GameStatus::Lost;
                self.message = Some(format!("You lost. The word was \"{}\".", self.word()));
                // reveal everything so the full word can be displayed
                for slot in self.revealed.iter_mut() {
                    *slot = true;
                }
            }
            Ok(GuessResult::Miss)
        }
    }

    fn all_guessable_revealed(&self) -> bool {
        self.keys
            .iter()
            .zip(&self.revealed)
            .all(|(key, revealed)| key.is_none() || *revealed)
    }

    /// Current status of the round.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns `true` once the round is `Won` or `Lost`.
    pub fn is_finished(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    /// Count of incorrect distinct-letter guesses so far.
    pub fn wrong(&self) -> u8 {
        self.wrong
    }

    /// Life budget fixed at creation from the difficulty.
    pub fn max_wrong(&self) -> u8 {
        self.max_wrong
    }

    /// Wrong guesses left before the round is lost.
    pub fn lives_remaining(&self) -> u8 {
        self.max_wrong - self.wrong
    }

    /// Normalized letters already submitted, in sorted order.
    pub fn used_letters(&self) -> impl Iterator<Item = char> + '_ {
        self.used.iter().copied()
    }

    /// The secret word in its original casing.
    pub fn word(&self) -> String {
        self.display.iter().collect()
    }

    /// The word as shown to the player: revealed characters in original
    /// casing, separators always visible, everything else masked.
    pub fn masked_word(&self) -> String {
        self.display
            .iter()
            .zip(&self.revealed)
            .map(|(&c, &revealed)| if revealed { c } else { MASK_CHAR })
            .collect()
    }

    /// Outcome text, set only on the transition to a terminal status.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Behavior switches this round was created with.
    pub fn options(&self) -> RoundOptions {
        self.options
    }
}
