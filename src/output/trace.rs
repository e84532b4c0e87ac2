//! Debug trace printing
//!
//! Prints every intermediate ranking and discounted answer list a search produces.

use crate::scoring::{SearchConfig, TraceEvent, top_of_ranked};
use std::fmt;

/// Search config that prints every trace event to stdout
#[must_use]
pub fn debug_trace_config() -> SearchConfig {
    SearchConfig::with_trace(|event| print!("{}", format_trace_event(event)))
}

/// Render one trace event as text
///
/// Events are rendered whole so parallel second rounds never interleave mid-event.
#[must_use]
pub fn format_trace_event(event: &TraceEvent<'_>) -> String {
    TraceListing(event).to_string()
}

/// Line-per-word listing of a trace event
pub struct TraceListing<'e, 'a>(pub &'e TraceEvent<'a>);

impl fmt::Display for TraceListing<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            TraceEvent::FirstRoundRanked { ranking } => {
                writeln!(f, "All words in descending order by score:")?;
                for scored in *ranking {
                    writeln!(f, "{} {}", scored.score, scored.word)?;
                }
                writeln!(f, "Top scoring words:")?;
                if let Ok(top) = top_of_ranked(ranking) {
                    for (word, score) in top.iter() {
                        writeln!(f, "{word} {score}")?;
                    }
                }
            }
            TraceEvent::Discounted { claimed, answers } => {
                writeln!(f, "Answers after letters from {claimed} removed:")?;
                for (i, masked) in answers.iter().enumerate() {
                    writeln!(f, "{i:2}. {masked}")?;
                }
            }
            TraceEvent::SecondRoundRanked { first, ranking } => {
                writeln!(f, "Second words and scores after {first}:")?;
                for scored in *ranking {
                    writeln!(f, "    {scored}")?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{MaskedWord, ScoredWord, Word};

    fn scored(text: &str, score: u32) -> ScoredWord {
        ScoredWord::new(Word::new(text).unwrap(), score)
    }

    #[test]
    fn first_round_lists_ranking_then_ties() {
        let ranking = [scored("amble", 33), scored("angle", 33), scored("pudgy", 0)];

        let text = format_trace_event(&TraceEvent::FirstRoundRanked {
            ranking: &ranking,
        });

        assert_eq!(
            text,
            "All words in descending order by score:\n\
             33 amble\n33 angle\n0 pudgy\n\
             Top scoring words:\n\
             amble 33\nangle 33\n"
        );
    }

    #[test]
    fn discounted_answers_are_numbered() {
        let claimed = Word::new("apple").unwrap();
        let answers = [
            MaskedWord::from_slots([None; 5]),
            MaskedWord::from(&Word::new("pudgy").unwrap()),
        ];

        let text = format_trace_event(&TraceEvent::Discounted {
            claimed: &claimed,
            answers: &answers,
        });

        assert_eq!(
            text,
            "Answers after letters from apple removed:\n 0. _____\n 1. pudgy\n"
        );
    }

    #[test]
    fn second_round_is_indented() {
        let first = Word::new("amble").unwrap();
        let ranking = [scored("angle", 6)];

        let text = format_trace_event(&TraceEvent::SecondRoundRanked {
            first: &first,
            ranking: &ranking,
        });

        assert_eq!(text, "Second words and scores after amble:\n    angle 6\n");
    }

    #[test]
    fn empty_first_round_has_no_top_words() {
        let text = format_trace_event(&TraceEvent::FirstRoundRanked { ranking: &[] });

        assert_eq!(
            text,
            "All words in descending order by score:\nTop scoring words:\n"
        );
    }

    #[test]
    fn listing_writes_into_formatter() {
        let ranking = [scored("crane", 21), scored("slate", 21), scored("pudgy", 3)];
        let event = TraceEvent::FirstRoundRanked { ranking: &ranking };

        let text = format!("{}", TraceListing(&event));

        assert!(text.ends_with("Top scoring words:\ncrane 21\nslate 21\n"));
    }
}
