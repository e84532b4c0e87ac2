//! Best first words command

use crate::core::TopWords;
use crate::scoring::{Search, SearchConfig};
use crate::wordlists::Corpora;
use anyhow::{Context, Result};
use std::time::{Duration, Instant};

/// Result of ranking first words
#[derive(Debug, Clone)]
pub struct FirstWordsReport {
    pub top: TopWords,
    pub answer_count: usize,
    pub candidate_count: usize,
    pub duration: Duration,
}

/// Rank every candidate as a first guess
///
/// # Errors
///
/// Returns an error if there are no candidate words.
pub fn find_first_words(corpora: &Corpora, config: &SearchConfig) -> Result<FirstWordsReport> {
    let start = Instant::now();
    let search = Search::new(&corpora.candidates, &corpora.answers, config.clone());
    let top = search
        .rank_first_words()
        .context("Failed to rank first words")?;
    let duration = start.elapsed();

    tracing::info!(
        top_score = top.score,
        tied = top.len(),
        elapsed_ms = duration.as_millis(),
        "first words ranked"
    );

    Ok(FirstWordsReport {
        top,
        answer_count: corpora.answers.len(),
        candidate_count: corpora.candidates.len(),
        duration,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Corpus, Word};

    fn corpora(answers: &[&str], guesses: &[&str]) -> Corpora {
        Corpora::new(
            Corpus::from_strs(answers).unwrap(),
            Corpus::from_strs(guesses).unwrap(),
        )
    }

    #[test]
    fn reports_top_words_and_counts() {
        let corpora = corpora(&["apple", "amble", "angle"], &["pudgy"]);

        let report = find_first_words(&corpora, &SearchConfig::default()).unwrap();

        assert_eq!(report.top.score, 33);
        let words: Vec<&str> = report.top.words.iter().map(Word::text).collect();
        assert_eq!(words, ["amble", "angle", "apple"]);
        assert_eq!(report.answer_count, 3);
        assert_eq!(report.candidate_count, 4);
    }

    #[test]
    fn empty_lists_fail() {
        let corpora = corpora(&[], &[]);
        let err = find_first_words(&corpora, &SearchConfig::default()).unwrap_err();
        assert!(err.to_string().contains("first words"));
    }
}
