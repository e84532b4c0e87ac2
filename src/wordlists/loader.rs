//! Word list loading utilities
//!
//! Word list files hold one word per whitespace-delimited token. Loading is strict: a
//! malformed token fails the whole list instead of being skipped, since dropping a word
//! would silently change the rankings.

use crate::core::{Word, WordError};
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

/// Error type for word list loading
#[derive(Debug)]
pub enum LoadError {
    /// The list could not be read
    Io { list: String, source: io::Error },
    /// A token in the list is not a valid word
    InvalidWord {
        list: String,
        token: String,
        source: WordError,
    },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { list, source } => write!(f, "Could not open {list} for reading: {source}"),
            Self::InvalidWord {
                list,
                token,
                source,
            } => write!(f, "Invalid word '{token}' in {list}: {source}"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::InvalidWord { source, .. } => Some(source),
        }
    }
}

/// Load words from a file
///
/// # Errors
///
/// Returns `LoadError::Io` if the file cannot be read, or `LoadError::InvalidWord` for the
/// first token that is not a 5-letter word.
///
/// # Examples
/// ```no_run
/// use wordle_openers::wordlists::loader::load_from_file;
///
/// let words = load_from_file("answersLarge.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, LoadError> {
    let path = path.as_ref();
    let list = path.display().to_string();

    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        list: list.clone(),
        source,
    })?;

    words_from_tokens(&list, content.split_whitespace())
}

/// Convert word tokens from the list named `list` into words
///
/// # Errors
///
/// Returns `LoadError::InvalidWord` for the first token that is not a 5-letter word.
///
/// # Examples
/// ```
/// use wordle_openers::wordlists::loader::words_from_tokens;
/// use wordle_openers::wordlists::SAMPLE_ANSWERS;
///
/// let words = words_from_tokens("sample", SAMPLE_ANSWERS.iter().copied()).unwrap();
/// assert_eq!(words.len(), SAMPLE_ANSWERS.len());
///
/// assert!(words_from_tokens("inline", ["crane", "cranes"]).is_err());
/// ```
pub fn words_from_tokens<'a, I>(list: &str, tokens: I) -> Result<Vec<Word>, LoadError>
where
    I: IntoIterator<Item = &'a str>,
{
    tokens
        .into_iter()
        .map(|token| {
            Word::new(token).map_err(|source| LoadError::InvalidWord {
                list: list.to_string(),
                token: token.to_string(),
                source,
            })
        })
        .collect()
}
