//! Letter-match scoring between two words
//!
//! A guess earns 3 points for each letter in the right position and 1 point for each
//! letter present elsewhere. Duplicate letters are handled by consuming each letter
//! instance at most once.

use super::error::RankError;
use crate::core::{Letters, Slots, WORD_LENGTH, Word};

/// Points for a letter in the same position in both words
pub const EXACT_POINTS: u32 = 3;

/// Points for a shared letter in a different position
pub const REPOSITIONED_POINTS: u32 = 1;

/// Highest score a single comparison can produce
pub const MAX_WORD_SCORE: u32 = EXACT_POINTS * WORD_LENGTH as u32;

/// How many letters matched in each pass of a comparison
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchCounts {
    pub exact: u32,
    pub repositioned: u32,
}

impl MatchCounts {
    #[inline]
    #[must_use]
    pub const fn score(self) -> u32 {
        self.exact * EXACT_POINTS + self.repositioned * REPOSITIONED_POINTS
    }
}

/// Match `original` against `candidate`, blanking every consumed slot in both
///
/// # Algorithm
/// 1. Exact pass: every position where both slots hold the same letter is consumed.
/// 2. Repositioned pass: each remaining `original` slot, left to right, consumes the
///    first remaining `candidate` slot holding the same letter.
///
/// All exact matches are resolved before any repositioned match is considered.
/// Blank slots never match.
pub(crate) fn consume(original: &mut Slots, candidate: &mut Slots) -> MatchCounts {
    let mut counts = MatchCounts::default();

    for (o, c) in original.iter_mut().zip(candidate.iter_mut()) {
        if o.is_some() && o == c {
            counts.exact += 1;
            *o = None;
            *c = None;
        }
    }

    for o in original.iter_mut() {
        let Some(letter) = *o else { continue };
        if let Some(c) = candidate.iter_mut().find(|c| **c == Some(letter)) {
            counts.repositioned += 1;
            *o = None;
            *c = None;
        }
    }

    counts
}

/// Count exact and repositioned matches without touching either word
#[must_use]
pub fn match_counts<O, C>(original: &O, candidate: &C) -> MatchCounts
where
    O: Letters + ?Sized,
    C: Letters + ?Sized,
{
    let mut original = original.slots();
    let mut candidate = candidate.slots();
    consume(&mut original, &mut candidate)
}

/// Score `original` (the word being evaluated) against `candidate` (an answer)
///
/// Always in `0..=15`. Callers pass the scored word first and the answer second: the
/// positions consumed in `candidate` depend on that order.
///
/// # Examples
/// ```
/// use wordle_openers::core::Word;
/// use wordle_openers::scoring::compare;
///
/// let original = Word::new("abcde").unwrap();
/// let candidate = Word::new("aefgh").unwrap();
///
/// // 'a' in place (3) + 'e' elsewhere (1)
/// assert_eq!(compare(&original, &candidate), 4);
/// assert_eq!(compare(&original, &original), 15);
/// ```
#[inline]
#[must_use]
pub fn compare<O, C>(original: &O, candidate: &C) -> u32
where
    O: Letters + ?Sized,
    C: Letters + ?Sized,
{
    match_counts(original, candidate).score()
}

/// Score two raw strings, validating both as words first
///
/// # Errors
/// Returns `RankError::InvalidWord` if either string is not a 5-letter word.
pub fn compare_texts(original: &str, candidate: &str) -> Result<u32, RankError> {
    Ok(compare(&Word::new(original)?, &Word::new(candidate)?))
}
