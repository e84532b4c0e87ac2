//! Letter slots with blanks
//!
//! A `MaskedWord` is an answer word after discounting: some of its positions have been
//! blanked and can never match a letter again.

use super::word::{WORD_LENGTH, Word};
use std::fmt;

/// Fixed-length letter slots, `None` marking a blank
pub type Slots = [Option<u8>; WORD_LENGTH];

/// Anything that can be compared letter by letter
///
/// Implemented by full words and by discounted answers, so the comparator can score a
/// guess against either.
pub trait Letters {
    /// Copy of the letter slots
    fn slots(&self) -> Slots;
}

impl Letters for Word {
    #[inline]
    fn slots(&self) -> Slots {
        (*self.letters()).map(Some)
    }
}

/// An answer word with some positions blanked out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MaskedWord {
    slots: Slots,
}

impl MaskedWord {
    /// Blank placeholder used when displaying
    pub const BLANK: char = '_';

    #[must_use]
    pub const fn from_slots(slots: Slots) -> Self {
        Self { slots }
    }
}

impl Letters for MaskedWord {
    #[inline]
    fn slots(&self) -> Slots {
        self.slots
    }
}

impl From<&Word> for MaskedWord {
    fn from(word: &Word) -> Self {
        Self {
            slots: word.slots(),
        }
    }
}

impl fmt::Display for MaskedWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for slot in &self.slots {
            let c = slot.map_or(Self::BLANK, char::from);
            write!(f, "{c}")?;
        }
        Ok(())
    }
}
