//! Formatting utilities for terminal output

use crate::scoring::MAX_WORD_SCORE;

/// Highest total a word can score against `answer_count` answers
#[must_use]
pub fn max_corpus_score(answer_count: usize) -> u64 {
    u64::from(MAX_WORD_SCORE) * answer_count as u64
}

/// Score as a percentage of the highest possible score
#[must_use]
pub fn percent_of_max(score: u32, max: u64) -> f64 {
    if max == 0 {
        return 0.0;
    }
    f64::from(score) / max as f64 * 100.0
}

/// Create a bar showing `score` out of `max`
#[must_use]
pub fn score_bar(score: u32, max: u64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = (percent_of_max(score, max) / 100.0 * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_score_scales_with_answers() {
        assert_eq!(max_corpus_score(0), 0);
        assert_eq!(max_corpus_score(3), 45);
    }

    #[test]
    fn percent_handles_zero_max() {
        assert!((percent_of_max(10, 0) - 0.0).abs() < f64::EPSILON);
        assert!((percent_of_max(15, 60) - 25.0).abs() < 1e-9);
    }

    #[test]
    fn score_bar_empty() {
        assert_eq!(score_bar(0, 100, 10), "░░░░░░░░░░");
    }

    #[test]
    fn score_bar_full() {
        assert_eq!(score_bar(100, 100, 10), "██████████");
    }

    #[test]
    fn score_bar_half() {
        assert_eq!(score_bar(50, 100, 10), "█████░░░░░");
    }

    #[test]
    fn score_bar_without_answers() {
        assert_eq!(score_bar(7, 0, 4), "░░░░");
    }
}
