//! Tie-aware selection of the best-scoring words

use super::error::RankError;
use crate::core::{ScoredWord, TopWords};

/// Sort scores descending, breaking ties alphabetically
#[must_use]
pub fn rank(mut scored: Vec<ScoredWord>) -> Vec<ScoredWord> {
    scored.sort_unstable_by(|a, b| b.score.cmp(&a.score).then_with(|| a.word.cmp(&b.word)));
    scored
}

/// Collect every word tied for the top score of an already ranked list
///
/// # Errors
/// Returns `RankError::EmptyCorpus` if `ranked` is empty.
pub fn top_of_ranked(ranked: &[ScoredWord]) -> Result<TopWords, RankError> {
    let top_score = ranked.first().ok_or(RankError::EmptyCorpus)?.score;

    let words = ranked
        .iter()
        .take_while(|s| s.score == top_score)
        .map(|s| s.word.clone())
        .collect();

    Ok(TopWords {
        score: top_score,
        words,
    })
}

/// Select all words tied for the highest score
///
/// Ties are common, so every tied word is returned, alphabetically ordered.
///
/// # Errors
/// Returns `RankError::EmptyCorpus` if `scored` is empty.
///
/// # Examples
/// ```
/// use wordle_openers::core::{ScoredWord, Word};
/// use wordle_openers::scoring::select_top;
///
/// let scored = vec![
///     ScoredWord::new(Word::new("slate").unwrap(), 40),
///     ScoredWord::new(Word::new("crane").unwrap(), 40),
///     ScoredWord::new(Word::new("pudgy").unwrap(), 12),
/// ];
///
/// let top = select_top(scored).unwrap();
/// assert_eq!(top.score, 40);
/// assert_eq!(top.words[0].text(), "crane");
/// assert_eq!(top.words[1].text(), "slate");
/// ```
pub fn select_top(scored: Vec<ScoredWord>) -> Result<TopWords, RankError> {
    top_of_ranked(&rank(scored))
}
