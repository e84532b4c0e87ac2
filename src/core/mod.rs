//! Core domain types for opener ranking
//!
//! This module contains the fundamental domain types. All types here are pure values with
//! no I/O, safe to share across scoring threads.

mod corpus;
mod masked;
mod scored;
mod word;

pub use corpus::Corpus;
pub use masked::{Letters, MaskedWord, Slots};
pub use scored::{ScoredWord, TopWords};
pub use word::{WORD_LENGTH, Word, WordError};
