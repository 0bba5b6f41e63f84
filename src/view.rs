//! Read-only projection of a round, safe to hand to a presentation layer.

use alloc::string::String;
use alloc::vec::Vec;

use crate::round::Round;

/// Everything a player is allowed to see about a round.
///
/// Unrevealed secret characters never appear here: `word` is populated only
/// once the round is terminal, and the JSON form omits the field entirely
/// until then.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct RoundView {
    pub masked_word: String,
    pub used_letters: Vec<char>,
    pub lives_remaining: u8,
    pub finished: bool,
    #[cfg_attr(feature = "std", serde(skip_serializing_if = "Option::is_none"))]
    pub message: Option<String>,
    #[cfg_attr(feature = "std", serde(skip_serializing_if = "Option::is_none"))]
    pub word: Option<String>,
}

impl From<&Round> for RoundView {
    fn from(round: &Round) -> Self {
        let finished = round.is_finished();
        RoundView {
            masked_word: round.masked_word(),
            used_letters: round.used_letters().collect(),
            lives_remaining: round.lives_remaining(),
            finished,
            message: round.message().map(String::from),
            word: finished.then(|| round.word()),
        }
    }
}
