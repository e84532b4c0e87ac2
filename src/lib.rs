//! Wordle Openers
//!
//! Ranks Wordle guesses by how many letters they reveal, on average, across every possible
//! answer, then finds the best second guess after each top first guess.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_openers::core::Corpus;
//! use wordle_openers::scoring::{rank_first_and_second_words, rank_first_words};
//!
//! let answers = Corpus::from_strs(&["apple", "amble", "angle"]).unwrap();
//!
//! let firsts = rank_first_words(&answers, &answers).unwrap();
//! println!("Top score {}: {:?}", firsts.score, firsts.words);
//!
//! for pair in rank_first_and_second_words(&answers, &answers).unwrap() {
//!     println!("{} then {:?}", pair.first, pair.seconds.words);
//! }
//! ```

// Core domain types
pub mod core;

// Scoring algorithms
pub mod scoring;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
