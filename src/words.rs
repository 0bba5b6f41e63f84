//! Word lists: the embedded default table and plain-text loading.

use alloc::string::String;
use alloc::vec::Vec;

use rand::Rng;

use crate::common::GameError;

/// Default word table, one round's secret is drawn from it when no list is
/// supplied.
const DEFAULT_WORDS: &[&str] = &[
    "MAISON", "VOITURE", "JARDIN", "TABLE", "CHAISE", "FENETRE", "PORTE", "CUISINE", "SALON",
    "LIVRE", "STYLO", "ORDINATEUR", "TELEPHONE", "BOUTEILLE", "VERRE", "ASSIETTE", "CUILLERE",
    "FOURCHETTE", "PAIN", "FROMAGE", "FRUIT", "LEGUME", "POMME", "BANANE", "ORANGE", "TOMATE",
    "CAROTTE", "CHOCOLAT", "CAFE", "THE", "EAU", "SOLEIL", "NUAGE", "PLUIE", "VENT", "NEIGE",
    "MER", "MONTAGNE", "FORET", "ARBRE", "FLEUR", "OISEAU", "CHAT", "CHIEN", "POISSON", "CHEVAL",
    "VOYAGE", "TRAIN", "AVION", "BUS", "ROUTE", "VILLE", "RUE", "ECOLE", "PROFESSEUR", "ELEVE",
    "AMITIE", "BONHEUR", "JOIE", "TRAVAIL", "SPORT", "MUSIQUE", "DANSE", "FILM", "PHOTO", "JEU",
];

/// Non-empty list of candidate secret words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    /// Build a list from newline-separated text. Surrounding whitespace is
    /// trimmed and blank lines are skipped; an empty result is
    /// [`GameError::InvalidWord`].
    pub fn parse(src: &str) -> Result<Self, GameError> {
        let words: Vec<String> = src
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect();
        if words.is_empty() {
            return Err(GameError::InvalidWord);
        }
        Ok(Self { words })
    }

    /// Load a list from a plain-text file, one word per line.
    #[cfg(feature = "std")]
    pub fn from_file(path: &std::path::Path) -> anyhow::Result<Self> {
        let src = std::fs::read_to_string(path)?;
        let list = Self::parse(&src).map_err(|e| anyhow::anyhow!("{}: {}", path.display(), e))?;
        log::info!("loaded {} words from {}", list.len(), path.display());
        Ok(list)
    }

    /// Number of candidate words; never zero.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Choose one word uniformly at random.
    pub fn pick<R: Rng>(&self, rng: &mut R) -> &str {
        &self.words[rng.random_range(0..self.words.len())]
    }
}

impl Default for WordList {
    fn default() -> Self {
        Self {
            words: DEFAULT_WORDS.iter().map(|w| String::from(*w)).collect(),
        }
    }
}
