//! Difficulty table and per-round behavior switches.

/// Difficulty selector, mapped to the wrong-guess budget of a round.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", derive(clap::ValueEnum))]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl Difficulty {
    /// Life budget for this difficulty.
    pub fn max_wrong(self) -> u8 {
        match self {
            Difficulty::Easy => 8,
            Difficulty::Normal => 6,
            Difficulty::Hard => 5,
        }
    }

    /// Parse a difficulty name; unrecognized input falls back to `Normal`.
    pub fn from_name(name: &str) -> Self {
        if name.eq_ignore_ascii_case("easy") {
            Difficulty::Easy
        } else if name.eq_ignore_ascii_case("hard") {
            Difficulty::Hard
        } else {
            Difficulty::Normal
        }
    }
}

impl core::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "easy"),
            Difficulty::Normal => write!(f, "normal"),
            Difficulty::Hard => write!(f, "hard"),
        }
    }
}

/// Behavior switches fixed at round creation.
///
/// The head start and accent folding both varied between earlier
/// implementations of this game; they are explicit options here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundOptions {
    /// Pre-reveal `floor(letters / 2) - 1` positions when the round starts.
    pub reveal_head_start: bool,
    /// Strip diacritics before matching, so 'e' reveals an 'é' position.
    pub fold_accents: bool,
}

impl Default for RoundOptions {
    fn default() -> Self {
        Self {
            reveal_head_start: false,
            fold_accents: true,
        }
    }
}
