//! Two-round opener search
//!
//! Round 1 scores every candidate against the answers and keeps the words tied for the
//! top score. Round 2 runs once per top word: the answers are discounted by that word and
//! every candidate is scored again to find the best follow-up guesses.

use super::discount::discount;
use super::error::RankError;
use super::scorer::score_all;
use super::selector::{rank, top_of_ranked};
use crate::core::{Letters, MaskedWord, ScoredWord, TopWords, Word};
use rayon::prelude::*;
use std::fmt;
use std::sync::Arc;
use std::time::Instant;

/// Intermediate results a search reports to its trace sink
#[derive(Debug)]
pub enum TraceEvent<'a> {
    /// Full round 1 ranking, best first
    FirstRoundRanked { ranking: &'a [ScoredWord] },
    /// Answers after removing the letters claimed by a first word
    Discounted {
        claimed: &'a Word,
        answers: &'a [MaskedWord],
    },
    /// Full round 2 ranking for one first word, best first
    SecondRoundRanked {
        first: &'a Word,
        ranking: &'a [ScoredWord],
    },
}

/// Callback receiving trace events
///
/// Round 2 searches run in parallel, so events for different first words may arrive
/// interleaved and from several threads.
pub type TraceSink = Arc<dyn Fn(&TraceEvent<'_>) + Send + Sync>;

/// Options handed to a search
#[derive(Clone, Default)]
pub struct SearchConfig {
    pub trace: Option<TraceSink>,
}

impl SearchConfig {
    /// Config that reports every intermediate result to `sink`
    #[must_use]
    pub fn with_trace<F>(sink: F) -> Self
    where
        F: Fn(&TraceEvent<'_>) + Send + Sync + 'static,
    {
        Self {
            trace: Some(Arc::new(sink)),
        }
    }
}

impl fmt::Debug for SearchConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchConfig")
            .field("trace", &self.trace.is_some())
            .finish()
    }
}

/// A top first word with the best second words found after discounting it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenerPair {
    pub first: Word,
    pub first_score: u32,
    pub seconds: TopWords,
}

/// Opener search over a fixed candidate and answer corpus
pub struct Search<'a> {
    candidates: &'a [Word],
    answers: &'a [Word],
    config: SearchConfig,
}

impl<'a> Search<'a> {
    /// Create a search
    ///
    /// # Parameters
    /// - `candidates`: Every word that may be guessed (answers and guess-only words)
    /// - `answers`: Every possible secret answer
    #[must_use]
    pub fn new(candidates: &'a [Word], answers: &'a [Word], config: SearchConfig) -> Self {
        Self {
            candidates,
            answers,
            config,
        }
    }

    /// Best first words: every candidate tied for the top score against the answers
    ///
    /// # Errors
    /// Returns `RankError::EmptyCorpus` if there are no candidates.
    pub fn rank_first_words(&self) -> Result<TopWords, RankError> {
        if self.answers.is_empty() {
            tracing::warn!("answer corpus is empty, every candidate will score 0");
        }

        let start = Instant::now();
        let ranking = rank(score_all(self.candidates, self.answers));
        let top = top_of_ranked(&ranking)?;

        tracing::debug!(
            candidates = self.candidates.len(),
            answers = self.answers.len(),
            top_score = top.score,
            tied = top.len(),
            elapsed_ms = start.elapsed().as_millis(),
            "first round scored"
        );
        self.emit(&TraceEvent::FirstRoundRanked { ranking: &ranking });

        Ok(top)
    }

    /// Best second words after discounting the answers by `first`
    ///
    /// # Errors
    /// Returns `RankError::EmptyCorpus` if there are no candidates.
    pub fn rank_second_words(&self, first: &Word) -> Result<TopWords, RankError> {
        let start = Instant::now();
        let discounted = discount(self.answers, first);
        self.emit(&TraceEvent::Discounted {
            claimed: first,
            answers: &discounted,
        });

        let ranking = self.rank_against(&discounted);
        let top = top_of_ranked(&ranking)?;

        tracing::debug!(
            first = %first,
            top_score = top.score,
            tied = top.len(),
            elapsed_ms = start.elapsed().as_millis(),
            "second round scored"
        );
        self.emit(&TraceEvent::SecondRoundRanked {
            first,
            ranking: &ranking,
        });

        Ok(top)
    }

    /// Best first words, each paired with its best second words
    ///
    /// Pairs keep the alphabetical order of the tied first words. Each second round starts
    /// from the original answers; nothing is shared between them.
    ///
    /// # Errors
    /// Returns `RankError::EmptyCorpus` if there are no candidates.
    pub fn rank_first_and_second_words(&self) -> Result<Vec<OpenerPair>, RankError> {
        let firsts = self.rank_first_words()?;

        firsts
            .words
            .par_iter()
            .map(|first| -> Result<OpenerPair, RankError> {
                Ok(OpenerPair {
                    first: first.clone(),
                    first_score: firsts.score,
                    seconds: self.rank_second_words(first)?,
                })
            })
            .collect()
    }

    fn rank_against<A: Letters + Sync>(&self, answers: &[A]) -> Vec<ScoredWord> {
        rank(score_all(self.candidates, answers))
    }

    fn emit(&self, event: &TraceEvent<'_>) {
        if let Some(sink) = &self.config.trace {
            sink(event);
        }
    }
}

/// Best first words using the default configuration
///
/// # Errors
/// Returns `RankError::EmptyCorpus` if there are no candidates.
///
/// # Examples
/// ```
/// use wordle_openers::core::Corpus;
/// use wordle_openers::scoring::rank_first_words;
///
/// let answers = Corpus::from_strs(&["apple", "amble", "angle"]).unwrap();
/// let top = rank_first_words(&answers, &answers).unwrap();
///
/// // All three share a, l, e in place and tie at 9 + 9 + 15
/// assert_eq!(top.score, 33);
/// assert!(top.contains("amble") && top.contains("angle") && top.contains("apple"));
/// ```
pub fn rank_first_words(candidates: &[Word], answers: &[Word]) -> Result<TopWords, RankError> {
    Search::new(candidates, answers, SearchConfig::default()).rank_first_words()
}

/// Best first words and their best second words using the default configuration
///
/// # Errors
/// Returns `RankError::EmptyCorpus` if there are no candidates.
pub fn rank_first_and_second_words(
    candidates: &[Word],
    answers: &[Word],
) -> Result<Vec<OpenerPair>, RankError> {
    Search::new(candidates, answers, SearchConfig::default()).rank_first_and_second_words()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Corpus;
    use std::sync::Mutex;

    fn corpus(words: &[&str]) -> Corpus {
        Corpus::from_strs(words).unwrap()
    }

    fn texts(top: &TopWords) -> Vec<&str> {
        top.words.iter().map(Word::text).collect()
    }

    #[test]
    fn first_words_tie_alphabetically() {
        let answers = corpus(&["apple", "amble", "angle"]);

        let top = rank_first_words(&answers, &answers).unwrap();

        assert_eq!(top.score, 33);
        assert_eq!(texts(&top), ["amble", "angle", "apple"]);
    }

    #[test]
    fn guess_only_words_compete() {
        let answers = corpus(&["slate", "crane"]);
        let guesses = corpus(&["slane", "pudgy"]);
        let candidates = Corpus::candidates(&answers, &guesses);

        let top = rank_first_words(&candidates, &answers).unwrap();

        // slane: 12 + 9, slate: 15 + 6, crane: 6 + 15
        assert_eq!(top.score, 21);
        assert_eq!(texts(&top), ["crane", "slane", "slate"]);
    }

    #[test]
    fn ranks_by_total_over_all_answers() {
        let answers = corpus(&["crane", "trace", "react"]);
        let guesses = corpus(&["crate"]);
        let candidates = Corpus::candidates(&answers, &guesses);

        let top = rank_first_words(&candidates, &answers).unwrap();

        // trace: 10 + 15 + 9, crane: 15 + 10 + 6, crate: 12 + 11 + 7, react: 6 + 9 + 15
        assert_eq!(top.score, 34);
        assert_eq!(texts(&top), ["trace"]);
    }

    #[test]
    fn first_round_is_idempotent() {
        let answers = corpus(&["apple", "amble", "angle", "crane", "slate"]);
        let guesses = corpus(&["salet", "soare"]);
        let candidates = Corpus::candidates(&answers, &guesses);

        let first = rank_first_words(&candidates, &answers).unwrap();
        let second = rank_first_words(&candidates, &answers).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn empty_candidates_is_an_error() {
        let answers = corpus(&["apple"]);
        assert_eq!(
            rank_first_words(&[], &answers),
            Err(RankError::EmptyCorpus)
        );
        assert_eq!(
            rank_first_and_second_words(&[], &answers),
            Err(RankError::EmptyCorpus)
        );
    }

    #[test]
    fn empty_answers_tie_every_candidate() {
        let candidates = corpus(&["slate", "crane"]);

        let top = rank_first_words(&candidates, &[]).unwrap();

        assert_eq!(top.score, 0);
        assert_eq!(texts(&top), ["crane", "slate"]);
    }

    #[test]
    fn empty_answers_tie_every_second_word() {
        let candidates = corpus(&["slate", "crane", "pudgy"]);

        let pairs = rank_first_and_second_words(&candidates, &[]).unwrap();

        let firsts: Vec<&str> = pairs.iter().map(|p| p.first.text()).collect();
        assert_eq!(firsts, ["crane", "pudgy", "slate"]);
        for pair in &pairs {
            assert_eq!(pair.first_score, 0);
            assert_eq!(pair.seconds.score, 0);
            assert_eq!(texts(&pair.seconds), ["crane", "pudgy", "slate"]);
        }
    }

    #[test]
    fn second_words_for_each_first_word() {
        let answers = corpus(&["apple", "amble", "angle"]);

        let pairs = rank_first_and_second_words(&answers, &answers).unwrap();

        let firsts: Vec<&str> = pairs.iter().map(|p| p.first.text()).collect();
        assert_eq!(firsts, ["amble", "angle", "apple"]);
        assert!(pairs.iter().all(|p| p.first_score == 33));

        // Discounting by the first word leaves only the two letters it could not place
        assert_eq!(pairs[0].seconds.score, 6);
        assert_eq!(texts(&pairs[0].seconds), ["angle", "apple"]);
        assert_eq!(texts(&pairs[1].seconds), ["amble", "apple"]);
        assert_eq!(texts(&pairs[2].seconds), ["amble", "angle"]);
    }

    #[test]
    fn second_round_starts_from_original_answers() {
        let answers = corpus(&["apple", "amble", "angle"]);
        let search = Search::new(&answers, &answers, SearchConfig::default());
        let amble = Word::new("amble").unwrap();

        let before = search.rank_second_words(&amble).unwrap();
        let _ = search.rank_second_words(&Word::new("apple").unwrap()).unwrap();
        let after = search.rank_second_words(&amble).unwrap();

        assert_eq!(before, after);
        assert_eq!(answers, corpus(&["apple", "amble", "angle"]));
    }

    #[test]
    fn trace_sink_sees_every_round() {
        let events = Arc::new(Mutex::new(Vec::new()));
        let sink_events = Arc::clone(&events);
        let config = SearchConfig::with_trace(move |event| {
            let label = match event {
                TraceEvent::FirstRoundRanked { ranking } => format!("first:{}", ranking.len()),
                TraceEvent::Discounted { claimed, answers } => {
                    format!("discount:{claimed}:{}", answers.len())
                }
                TraceEvent::SecondRoundRanked { first, .. } => format!("second:{first}"),
            };
            sink_events.lock().unwrap().push(label);
        });

        let answers = corpus(&["apple", "amble", "angle"]);
        let search = Search::new(&answers, &answers, config);
        search.rank_first_and_second_words().unwrap();

        let mut seen = events.lock().unwrap().clone();
        seen.sort();
        assert_eq!(
            seen,
            [
                "discount:amble:3",
                "discount:angle:3",
                "discount:apple:3",
                "first:3",
                "second:amble",
                "second:angle",
                "second:apple",
            ]
        );
    }
}
