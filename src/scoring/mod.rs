//! Opener scoring algorithms
//!
//! Leaves first: the letter comparator, corpus scoring, top-word selection, letter
//! discounting, and the two-round search that composes them.

pub mod comparator;
pub mod discount;
mod error;
pub mod scorer;
pub mod search;
pub mod selector;

pub use comparator::{MAX_WORD_SCORE, MatchCounts, compare, compare_texts, match_counts};
pub use discount::{discount, discount_word};
pub use error::RankError;
pub use scorer::{score_against_corpus, score_all};
pub use search::{
    OpenerPair, Search, SearchConfig, TraceEvent, TraceSink, rank_first_and_second_words,
    rank_first_words,
};
pub use selector::{rank, select_top, top_of_ranked};
