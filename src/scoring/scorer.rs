//! Scoring guesses against a whole answer corpus

use super::comparator::compare;
use crate::core::{Letters, ScoredWord, Word};
use rayon::prelude::*;

/// Total letter-match score of `word` against every answer
///
/// Higher means the guess reveals more letters on average.
///
/// # Examples
/// ```
/// use wordle_openers::core::Corpus;
/// use wordle_openers::scoring::score_against_corpus;
///
/// let answers = Corpus::from_strs(&["apple", "amble", "angle"]).unwrap();
/// // apple: 15 against itself, 9 against amble, 9 against angle
/// assert_eq!(score_against_corpus(&answers[0], &answers), 33);
/// ```
#[must_use]
pub fn score_against_corpus<A: Letters + Sync>(word: &Word, answers: &[A]) -> u32 {
    answers.iter().map(|answer| compare(word, answer)).sum()
}

/// Score every candidate independently against the same answers
///
/// Candidates are scored in parallel. The result keeps the order of `candidates`.
#[must_use]
pub fn score_all<A: Letters + Sync>(candidates: &[Word], answers: &[A]) -> Vec<ScoredWord> {
    candidates
        .par_iter()
        .map(|word| ScoredWord::new(word.clone(), score_against_corpus(word, answers)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Corpus, MaskedWord};

    #[test]
    fn sums_pairwise_scores() {
        let answers = Corpus::from_strs(&["apple", "amble", "angle"]).unwrap();
        let guess = Word::new("amble").unwrap();

        // amble vs apple: a, l, e in place (9) -> 9
        // amble vs amble: 15
        // amble vs angle: a, l, e in place (9) -> 9
        assert_eq!(score_against_corpus(&guess, &answers), 9 + 15 + 9);
    }

    #[test]
    fn empty_answers_score_zero() {
        let answers: Vec<Word> = Vec::new();
        let guess = Word::new("crane").unwrap();
        assert_eq!(score_against_corpus(&guess, &answers), 0);
    }

    #[test]
    fn score_all_preserves_candidate_order() {
        let candidates = Corpus::from_strs(&["zzzzz", "apple", "angle", "crane"]).unwrap();
        let answers = Corpus::from_strs(&["apple", "amble", "angle"]).unwrap();

        let scored = score_all(&candidates, &answers);

        let words: Vec<&str> = scored.iter().map(|s| s.word.text()).collect();
        assert_eq!(words, ["zzzzz", "apple", "angle", "crane"]);
        assert_eq!(scored[0].score, 0);
        for s in &scored {
            assert_eq!(s.score, score_against_corpus(&s.word, &answers));
        }
    }

    #[test]
    fn scores_against_masked_answers() {
        let guess = Word::new("apple").unwrap();
        let answers = vec![
            MaskedWord::from_slots([None, None, None, None, None]),
            MaskedWord::from_slots([Some(b'a'), None, None, None, None]),
        ];
        assert_eq!(score_against_corpus(&guess, &answers), 3);
    }
}
