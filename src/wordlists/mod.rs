//! Word lists for opener ranking
//!
//! Answers and guesses come either from the embedded sample lists or from word list files.

mod embedded;
pub mod loader;

pub use embedded::{SAMPLE_ANSWERS, SAMPLE_ANSWERS_COUNT, SAMPLE_GUESSES, SAMPLE_GUESSES_COUNT};

use crate::core::Corpus;
use loader::{LoadError, load_from_file, words_from_tokens};
use std::convert::Infallible;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Answers file used by the full-size run
pub const LARGE_ANSWERS_FILE: &str = "answersLarge.txt";

/// Guesses file used by the full-size run
pub const LARGE_GUESSES_FILE: &str = "guessesLarge.txt";

/// Where a word list comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordSource {
    /// The embedded sample list
    Sample,
    /// A whitespace-delimited word list file
    File(PathBuf),
}

impl WordSource {
    /// Load this source, using `sample` for `WordSource::Sample`
    ///
    /// # Errors
    ///
    /// Returns a `LoadError` if the file cannot be read or holds a malformed word.
    pub fn load(&self, sample: &[&str]) -> Result<Corpus, LoadError> {
        let words = match self {
            Self::Sample => words_from_tokens(&self.to_string(), sample.iter().copied())?,
            Self::File(path) => load_from_file(path)?,
        };
        Ok(Corpus::new(words))
    }
}

impl From<&str> for WordSource {
    /// `"sample"` selects the embedded list; anything else is a file path
    fn from(s: &str) -> Self {
        match s {
            "sample" => Self::Sample,
            path => Self::File(PathBuf::from(path)),
        }
    }
}

impl FromStr for WordSource {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl fmt::Display for WordSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sample => write!(f, "sample list"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Loaded answer, guess and candidate corpora
#[derive(Debug, Clone)]
pub struct Corpora {
    pub answers: Corpus,
    pub guesses: Corpus,
    /// Answers followed by guess-only words, duplicates removed
    pub candidates: Corpus,
}

impl Corpora {
    /// Build corpora from already loaded answers and guesses
    #[must_use]
    pub fn new(answers: Corpus, guesses: Corpus) -> Self {
        let candidates = Corpus::candidates(&answers, &guesses);
        Self {
            answers,
            guesses,
            candidates,
        }
    }

    /// Load the answer and guess lists
    ///
    /// # Errors
    ///
    /// Returns the first `LoadError` hit while loading either list.
    pub fn load(answers: &WordSource, guesses: &WordSource) -> Result<Self, LoadError> {
        let corpora = Self::new(answers.load(SAMPLE_ANSWERS)?, guesses.load(SAMPLE_GUESSES)?);

        tracing::info!(
            answers = corpora.answers.len(),
            guesses = corpora.guesses.len(),
            candidates = corpora.candidates.len(),
            "word lists loaded"
        );

        Ok(corpora)
    }
}
