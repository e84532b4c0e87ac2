//! Scored words and tie-aware top sets

use super::word::Word;
use std::fmt;

/// A word paired with the score it earned in one round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredWord {
    pub word: Word,
    pub score: u32,
}

impl ScoredWord {
    #[must_use]
    pub const fn new(word: Word, score: u32) -> Self {
        Self { word, score }
    }
}

impl fmt::Display for ScoredWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.word, self.score)
    }
}

/// Every word tied for the top score of a round, alphabetically ordered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopWords {
    pub score: u32,
    pub words: Vec<Word>,
}

impl TopWords {
    /// Number of tied words
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate the tied words paired with the shared top score
    pub fn iter(&self) -> impl Iterator<Item = (&Word, u32)> {
        self.words.iter().map(move |word| (word, self.score))
    }

    /// Check if `text` is one of the tied words
    #[must_use]
    pub fn contains(&self, text: &str) -> bool {
        self.words.iter().any(|w| w.text() == text)
    }
}
