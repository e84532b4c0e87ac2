//! Ordered word collections
//!
//! A `Corpus` holds either the possible answers or the words eligible to be guessed.

use super::word::{Word, WordError};
use rustc_hash::FxHashSet;
use std::ops::Deref;

/// An ordered, read-only collection of words
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
    words: Vec<Word>,
}

impl Corpus {
    #[must_use]
    pub const fn new(words: Vec<Word>) -> Self {
        Self { words }
    }

    /// Build a corpus from raw strings, rejecting the first malformed entry
    ///
    /// # Errors
    /// Returns the `WordError` of the first string that is not a valid word.
    ///
    /// # Examples
    /// ```
    /// use wordle_openers::core::Corpus;
    ///
    /// let corpus = Corpus::from_strs(&["apple", "amble"]).unwrap();
    /// assert_eq!(corpus.len(), 2);
    ///
    /// assert!(Corpus::from_strs(&["apple", "ample!"]).is_err());
    /// ```
    pub fn from_strs(texts: &[&str]) -> Result<Self, WordError> {
        texts
            .iter()
            .map(|&text| Word::new(text))
            .collect::<Result<Vec<_>, _>>()
            .map(Self::new)
    }

    /// Build the candidate corpus: answers first, then guess-only words
    ///
    /// Words appearing more than once keep only their first occurrence.
    #[must_use]
    pub fn candidates(answers: &Self, guesses: &Self) -> Self {
        let mut seen: FxHashSet<&Word> = FxHashSet::default();
        let words = answers
            .iter()
            .chain(guesses.iter())
            .filter(|word| seen.insert(*word))
            .cloned()
            .collect();

        Self { words }
    }
}

impl Deref for Corpus {
    type Target = [Word];

    fn deref(&self) -> &Self::Target {
        &self.words
    }
}

impl From<Vec<Word>> for Corpus {
    fn from(words: Vec<Word>) -> Self {
        Self::new(words)
    }
}

impl FromIterator<Word> for Corpus {
    fn from_iter<I: IntoIterator<Item = Word>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
