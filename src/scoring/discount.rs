//! Removing letters already claimed by an earlier guess
//!
//! After a first guess, the letters it matched in each answer carry no new information.
//! Discounting blanks them out so a second guess is scored only on what it adds.

use super::comparator::consume;
use crate::core::{Letters, MaskedWord, Word};

/// Blank the letters of `answer` that `claimed` consumes when compared against it
///
/// Uses the comparator's pass order: exact positions first, then each remaining letter of
/// `claimed`, left to right, blanks the first matching letter left in `answer`.
///
/// # Examples
/// ```
/// use wordle_openers::core::Word;
/// use wordle_openers::scoring::discount_word;
///
/// let answer = Word::new("amble").unwrap();
/// let claimed = Word::new("apple").unwrap();
///
/// assert_eq!(discount_word(&answer, &claimed).to_string(), "_mb__");
/// ```
#[must_use]
pub fn discount_word(answer: &Word, claimed: &Word) -> MaskedWord {
    let mut claimed_slots = claimed.slots();
    let mut answer_slots = answer.slots();
    consume(&mut claimed_slots, &mut answer_slots);
    MaskedWord::from_slots(answer_slots)
}

/// Discount every answer against `claimed`
///
/// Returns a fresh corpus with the same length and order as `answers`; `answers` itself
/// is left untouched.
#[must_use]
pub fn discount(answers: &[Word], claimed: &Word) -> Vec<MaskedWord> {
    answers
        .iter()
        .map(|answer| discount_word(answer, claimed))
        .collect()
}
