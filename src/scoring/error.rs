//! Errors raised while ranking words

use crate::core::WordError;
use std::fmt;

/// Precondition violations that end a ranking request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RankError {
    /// Nothing to rank, or nothing to rank against
    EmptyCorpus,
    /// A malformed word reached the core
    InvalidWord(WordError),
}

impl fmt::Display for RankError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyCorpus => write!(f, "Cannot rank words: corpus is empty"),
            Self::InvalidWord(e) => write!(f, "Invalid word: {e}"),
        }
    }
}

impl std::error::Error for RankError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::EmptyCorpus => None,
            Self::InvalidWord(e) => Some(e),
        }
    }
}

impl From<WordError> for RankError {
    fn from(e: WordError) -> Self {
        Self::InvalidWord(e)
    }
}
