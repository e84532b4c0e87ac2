//! Embedded sample word lists
//!
//! Word lists compiled into the binary at build time.

include!(concat!(env!("OUT_DIR"), "/sample_answers.rs"));
include!(concat!(env!("OUT_DIR"), "/sample_guesses.rs"));
