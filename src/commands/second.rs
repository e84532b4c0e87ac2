//! Best first and second words command
//!
//! Runs both search rounds and shows progress through the second round, which scores
//! every candidate again once per top first word.

use crate::scoring::{OpenerPair, Search, SearchConfig, TraceEvent, top_of_ranked};
use crate::wordlists::Corpora;
use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Result of ranking first and second words
#[derive(Debug, Clone)]
pub struct SecondWordsReport {
    pub pairs: Vec<OpenerPair>,
    pub answer_count: usize,
    pub candidate_count: usize,
    pub duration: Duration,
}

/// Rank first words, then the best second words for each of them
///
/// # Errors
///
/// Returns an error if there are no candidate words.
pub fn find_second_words(corpora: &Corpora, config: &SearchConfig) -> Result<SecondWordsReport> {
    let pb = second_round_bar()?;

    let start = Instant::now();
    let search = Search::new(
        &corpora.candidates,
        &corpora.answers,
        with_progress(config, pb.clone()),
    );
    let pairs = search
        .rank_first_and_second_words()
        .context("Failed to rank first and second words");
    pb.finish_and_clear();
    let pairs = pairs?;
    let duration = start.elapsed();

    tracing::info!(
        first_words = pairs.len(),
        elapsed_ms = duration.as_millis(),
        "second words ranked"
    );

    Ok(SecondWordsReport {
        pairs,
        answer_count: corpora.answers.len(),
        candidate_count: corpora.candidates.len(),
        duration,
    })
}

/// Progress bar for the second rounds
///
/// Stays hidden until the first round reports how many first words tied.
fn second_round_bar() -> Result<ProgressBar> {
    let pb = ProgressBar::with_draw_target(None, ProgressDrawTarget::hidden());
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} second rounds | {msg}")
            .context("Invalid progress bar template")?
            .progress_chars("█▓▒░"),
    );
    Ok(pb)
}

/// Wrap `config` so every finished second round also advances `pb`
fn with_progress(config: &SearchConfig, pb: ProgressBar) -> SearchConfig {
    let inner = config.trace.clone();

    SearchConfig {
        trace: Some(Arc::new(move |event: &TraceEvent<'_>| {
            match event {
                TraceEvent::FirstRoundRanked { ranking } => {
                    let tied = top_of_ranked(ranking).map_or(0, |top| top.len());
                    pb.set_length(tied as u64);
                    pb.set_draw_target(ProgressDrawTarget::stderr());
                }
                TraceEvent::SecondRoundRanked { first, .. } => {
                    pb.set_message(first.to_string());
                    pb.inc(1);
                }
                TraceEvent::Discounted { .. } => {}
            }
            if let Some(inner) = &inner {
                inner(event);
            }
        })),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Corpus, Word};
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn corpora(answers: &[&str], guesses: &[&str]) -> Corpora {
        Corpora::new(
            Corpus::from_strs(answers).unwrap(),
            Corpus::from_strs(guesses).unwrap(),
        )
    }

    #[test]
    fn pairs_every_first_word_with_seconds() {
        let corpora = corpora(&["apple", "amble", "angle"], &[]);

        let report = find_second_words(&corpora, &SearchConfig::default()).unwrap();

        assert_eq!(report.pairs.len(), 3);
        let firsts: Vec<&str> = report.pairs.iter().map(|p| p.first.text()).collect();
        assert_eq!(firsts, ["amble", "angle", "apple"]);
        let seconds: Vec<&str> = report.pairs[2].seconds.words.iter().map(Word::text).collect();
        assert_eq!(seconds, ["amble", "angle"]);
    }

    #[test]
    fn progress_counts_second_rounds_and_keeps_caller_trace() {
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&calls);
        let config = SearchConfig::with_trace(move |_| {
            seen.fetch_add(1, Ordering::Relaxed);
        });
        let pb = ProgressBar::hidden();

        let corpora = corpora(&["apple", "amble", "angle"], &[]);
        let search = Search::new(
            &corpora.candidates,
            &corpora.answers,
            with_progress(&config, pb.clone()),
        );
        search.rank_first_and_second_words().unwrap();

        assert_eq!(pb.length(), Some(3));
        assert_eq!(pb.position(), 3);
        // One first round, then a discount and a second round per first word
        assert_eq!(calls.load(Ordering::Relaxed), 7);
    }

    #[test]
    fn bar_waits_for_first_round() {
        let pb = second_round_bar().unwrap();

        assert!(pb.is_hidden());
        assert_eq!(pb.length(), None);
    }

    #[test]
    fn progress_length_is_tied_first_word_count() {
        let pb = second_round_bar().unwrap();

        // crane, slane and slate tie at 21; pudgy trails
        let corpora = corpora(&["slate", "crane"], &["slane", "pudgy"]);
        let search = Search::new(
            &corpora.candidates,
            &corpora.answers,
            with_progress(&SearchConfig::default(), pb.clone()),
        );
        let pairs = search.rank_first_and_second_words().unwrap();

        assert_eq!(pairs.len(), 3);
        assert_eq!(pb.length(), Some(3));
        assert_eq!(pb.position(), 3);
    }

    #[test]
    fn empty_lists_fail() {
        let corpora = corpora(&[], &[]);
        assert!(find_second_words(&corpora, &SearchConfig::default()).is_err());
    }
}
