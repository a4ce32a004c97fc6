use crate::results::GuessResult;
use crate::results::LetterResult;
use crate::word::{alphabet_slot, slot_letter, Word, ALPHABET_SIZE, WORD_LENGTH};
use thiserror::Error;

/// The first Hard Mode rule that a guess breaks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum HardModeViolation {
    /// The letter at `position` was revealed as `Correct` and must be reused there.
    #[error("Hard Mode: position {} must be '{}'", .position + 1, .letter.to_ascii_uppercase())]
    FixedPosition { position: usize, letter: char },
    /// The letter was revealed as `Present` at `position`, so it cannot be placed there again.
    #[error("Hard Mode: '{}' cannot be at position {}", .letter.to_ascii_uppercase(), .position + 1)]
    BannedPosition { letter: char, position: usize },
    /// The guess must contain at least `count` copies of the letter.
    #[error("Hard Mode: include {}× '{}'", .count, .letter.to_ascii_uppercase())]
    MinCount { letter: char, count: u8 },
}

/// Everything learned about the objective word from the guesses made so far.
///
/// Letter-keyed data is stored in arrays indexed by alphabet slot (`a` = 0). Knowledge only ever
/// grows: a letter's minimum count never decreases, and a letter that is known to be in the word
/// is never marked absent.
///
/// Deserialized knowledge is checked against these rules and rejected if it breaks them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "KnowledgeData")
)]
pub struct Knowledge {
    /// Letters that were revealed as `Correct`, by position.
    fixed_positions: [Option<char>; WORD_LENGTH],
    /// For each letter, a bit mask of the positions where it was revealed as `Present`.
    banned_positions: [u8; ALPHABET_SIZE],
    /// For each letter, the minimum number of times it appears in the word.
    min_counts: [u8; ALPHABET_SIZE],
    /// Bit mask of letters that do not appear in the word at all.
    absent_letters: u32,
}

/// The serialized fields of [`Knowledge`], before they are checked.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct KnowledgeData {
    fixed_positions: [Option<char>; WORD_LENGTH],
    banned_positions: [u8; ALPHABET_SIZE],
    min_counts: [u8; ALPHABET_SIZE],
    absent_letters: u32,
}

/// Why serialized [`Knowledge`] could not be restored.
#[cfg(feature = "serde")]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum InvalidKnowledge {
    #[error("unsupported letter '{0}' in fixed positions")]
    UnsupportedLetter(char),
    #[error("letter '{0}' is both required and absent")]
    RequiredLetterAbsent(char),
    #[error("banned positions of '{0}' are out of range")]
    BannedPositionOutOfRange(char),
    #[error("absent letters mask {0:#x} is out of range")]
    AbsentLettersOutOfRange(u32),
}

#[cfg(feature = "serde")]
impl TryFrom<KnowledgeData> for Knowledge {
    type Error = InvalidKnowledge;

    fn try_from(data: KnowledgeData) -> Result<Self, Self::Error> {
        let mut min_counts = data.min_counts;
        for letter in data.fixed_positions.iter().flatten() {
            let slot = alphabet_slot(*letter).ok_or(InvalidKnowledge::UnsupportedLetter(*letter))?;
            min_counts[slot] = min_counts[slot].max(1);
        }
        if data.absent_letters >> ALPHABET_SIZE != 0 {
            return Err(InvalidKnowledge::AbsentLettersOutOfRange(data.absent_letters));
        }
        for slot in 0..ALPHABET_SIZE {
            if data.banned_positions[slot] >> WORD_LENGTH != 0 {
                return Err(InvalidKnowledge::BannedPositionOutOfRange(slot_letter(slot)));
            }
            let required = min_counts[slot] > 0 || data.banned_positions[slot] != 0;
            if required && data.absent_letters & (1 << slot) != 0 {
                return Err(InvalidKnowledge::RequiredLetterAbsent(slot_letter(slot)));
            }
        }
        Ok(Knowledge {
            fixed_positions: data.fixed_positions,
            banned_positions: data.banned_positions,
            min_counts: data.min_counts,
            absent_letters: data.absent_letters,
        })
    }
}

impl Knowledge {
    /// Creates a `Knowledge` object with all letters unknown.
    pub fn new() -> Knowledge {
        Knowledge::default()
    }

    /// Returns the knowledge revealed by the given result alone.
    pub fn from_result(result: &GuessResult) -> Knowledge {
        let mut knowledge = Knowledge::new();
        knowledge.update(result);
        knowledge
    }

    /// Adds the knowledge arising from the given guess result.
    pub fn update(&mut self, guess_result: &GuessResult) {
        let mut seen = [0u8; ALPHABET_SIZE];
        for (position, slot) in guess_result.guess.slots().enumerate() {
            match guess_result.results[position] {
                LetterResult::Correct => {
                    self.fixed_positions[position] = Some(slot_letter(slot));
                    seen[slot] += 1;
                }
                LetterResult::Present => {
                    self.banned_positions[slot] |= 1 << position;
                    seen[slot] += 1;
                }
                LetterResult::Absent => {}
            }
        }
        for (slot, count) in seen.iter().enumerate() {
            if *count == 0 {
                continue;
            }
            self.min_counts[slot] = self.min_counts[slot].max(*count);
            self.absent_letters &= !(1 << slot);
        }
        // Counts must be settled first: an `Absent` copy of a letter that was also `Correct` or
        // `Present` in this guess only means there are no further copies.
        for (position, slot) in guess_result.guess.slots().enumerate() {
            if guess_result.results[position] == LetterResult::Absent && self.min_counts[slot] == 0
            {
                self.absent_letters |= 1 << slot;
            }
        }
    }

    /// Returns the letter known to be at the given position, if any.
    pub fn fixed_letter(&self, position: usize) -> Option<char> {
        self.fixed_positions.get(position).copied().flatten()
    }

    /// Returns `true` iff the letter is known to be in the word, but not at this position.
    pub fn is_banned(&self, letter: char, position: usize) -> bool {
        position < WORD_LENGTH
            && alphabet_slot(letter)
                .map_or(false, |slot| self.banned_positions[slot] & (1 << position) != 0)
    }

    /// Returns the positions where the letter was revealed as `Present`, in ascending order.
    pub fn banned_positions(&self, letter: char) -> impl Iterator<Item = usize> + '_ {
        let mask = alphabet_slot(letter).map_or(0, |slot| self.banned_positions[slot]);
        (0..WORD_LENGTH).filter(move |position| mask & (1 << position) != 0)
    }

    /// Returns the minimum number of times the letter appears in the word.
    pub fn min_count(&self, letter: char) -> u8 {
        alphabet_slot(letter).map_or(0, |slot| self.min_counts[slot])
    }

    /// Returns `true` iff the letter is known not to appear in the word at all.
    pub fn is_absent(&self, letter: char) -> bool {
        alphabet_slot(letter).map_or(false, |slot| self.absent_letters & (1 << slot) != 0)
    }

    /// Iterates over the letters known not to appear in the word, alphabetically.
    pub fn absent_letters(&self) -> impl Iterator<Item = char> + '_ {
        (0..ALPHABET_SIZE)
            .filter(|slot| self.absent_letters & (1 << slot) != 0)
            .map(slot_letter)
    }

    /// Returns `true` iff nothing has been learned yet.
    pub fn is_empty(&self) -> bool {
        *self == Knowledge::default()
    }

    /// Checks the guess against the Hard Mode rules.
    ///
    /// The rules are checked in a fixed order, and the first one broken is returned:
    ///
    /// 1. Every `Correct` letter is reused in its position (positions in ascending order).
    /// 2. No `Present` letter is placed where it was already revealed (letters `a` to `z`, then
    ///    positions in ascending order).
    /// 3. Each letter known to be in the word appears at least as often as has been revealed
    ///    (letters `a` to `z`).
    ///
    /// Absent letters are allowed by Hard Mode.
    pub fn check_hard_mode(&self, guess: &Word) -> Result<(), HardModeViolation> {
        for (position, fixed) in self.fixed_positions.iter().enumerate() {
            if let Some(letter) = fixed {
                if guess.letter(position) != *letter {
                    return Err(HardModeViolation::FixedPosition {
                        position,
                        letter: *letter,
                    });
                }
            }
        }
        for (slot, mask) in self.banned_positions.iter().enumerate() {
            if *mask == 0 {
                continue;
            }
            for (position, guess_slot) in guess.slots().enumerate() {
                if guess_slot == slot && *mask & (1 << position) != 0 {
                    return Err(HardModeViolation::BannedPosition {
                        letter: slot_letter(slot),
                        position,
                    });
                }
            }
        }
        let counts = guess.letter_counts();
        for (slot, min_count) in self.min_counts.iter().enumerate() {
            if counts[slot] < *min_count {
                return Err(HardModeViolation::MinCount {
                    letter: slot_letter(slot),
                    count: *min_count,
                });
            }
        }
        Ok(())
    }

    /// Returns `true` iff the given word could still be the objective word.
    ///
    /// This is the Hard Mode check plus the requirement that the word contains no absent letter.
    pub fn is_satisfied_by(&self, word: &Word) -> bool {
        word.slots()
            .all(|slot| self.absent_letters & (1 << slot) == 0)
            && self.check_hard_mode(word).is_ok()
    }
}
