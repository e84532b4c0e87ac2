//! Command implementations

pub mod first;
pub mod menu;
pub mod second;

pub use first::{FirstWordsReport, find_first_words};
pub use menu::run_menu;
pub use second::{SecondWordsReport, find_second_words};

use crate::output::{print_corpus_summary, print_first_words, print_opener_pairs};
use crate::scoring::SearchConfig;
use crate::wordlists::{Corpora, WordSource};
use anyhow::{Context, Result};

/// Which rounds a search runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    /// Round 1 only
    FirstWords,
    /// Round 1, then round 2 for every top first word
    FirstAndSecondWords,
}

/// Load the word lists, run a search and print its report
///
/// # Errors
///
/// Returns an error if a word list cannot be loaded or ranking fails.
pub fn run_search(
    mode: SearchMode,
    answers: &WordSource,
    guesses: &WordSource,
    config: &SearchConfig,
) -> Result<()> {
    let corpora = Corpora::load(answers, guesses).context("Failed to load word lists")?;
    print_corpus_summary(&corpora, answers, guesses);

    match mode {
        SearchMode::FirstWords => print_first_words(&find_first_words(&corpora, config)?),
        SearchMode::FirstAndSecondWords => {
            print_opener_pairs(&find_second_words(&corpora, config)?);
        }
    }

    Ok(())
}
