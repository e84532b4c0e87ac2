//! Terminal output formatting
//!
//! Display utilities for CLI results and debug traces.

pub mod display;
pub mod formatters;
pub mod trace;

pub use display::{print_corpus_summary, print_first_words, print_opener_pairs};
pub use trace::debug_trace_config;
