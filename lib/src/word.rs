use crate::results::WordleError;
use std::fmt;
use std::str::FromStr;

/// The number of letters in every word of the game.
pub const WORD_LENGTH: usize = 5;

/// The number of letters in the supported alphabet, `a` through `z`.
pub const ALPHABET_SIZE: usize = 26;

/// A word of exactly [`WORD_LENGTH`] lower-case ASCII letters.
///
/// ```
/// use wordle_game::Word;
///
/// let word = Word::new(" Crane\n").unwrap();
/// assert_eq!(word.to_string(), "crane");
/// assert_eq!(word.letter(1), 'r');
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct Word(pub(crate) [u8; WORD_LENGTH]);

impl Word {
    /// Parses a word, ignoring surrounding whitespace and letter case.
    pub fn new(word: &str) -> Result<Word, WordleError> {
        let word = word.trim();
        let mut letters = [0u8; WORD_LENGTH];
        let mut length = 0;
        for letter in word.chars() {
            let lower = letter.to_ascii_lowercase();
            if !lower.is_ascii_lowercase() {
                return Err(WordleError::UnsupportedCharacter(letter));
            }
            if length < WORD_LENGTH {
                letters[length] = lower as u8;
            }
            length += 1;
        }
        if length != WORD_LENGTH {
            return Err(WordleError::WordLength(length));
        }
        Ok(Word(letters))
    }

    /// Returns the letter at the given zero-based position.
    ///
    /// Panics if `position >= WORD_LENGTH`.
    pub fn letter(&self, position: usize) -> char {
        self.0[position] as char
    }

    /// Iterates over the letters of the word in order.
    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.0.iter().map(|letter| *letter as char)
    }

    /// Returns `true` iff the word contains the given letter at least once.
    pub fn contains(&self, letter: char) -> bool {
        self.letters().any(|other| other == letter)
    }

    /// Returns how many times the given letter occurs in the word.
    pub fn count(&self, letter: char) -> u8 {
        self.letters().filter(|other| *other == letter).count() as u8
    }

    /// The alphabet slot of each letter, in word order.
    pub(crate) fn slots(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.iter().map(|letter| (letter - b'a') as usize)
    }

    /// Occurrences of every letter, indexed by alphabet slot.
    pub(crate) fn letter_counts(&self) -> [u8; ALPHABET_SIZE] {
        let mut counts = [0u8; ALPHABET_SIZE];
        for slot in self.slots() {
            counts[slot] += 1;
        }
        counts
    }
}

/// Returns the alphabet slot (`a` = 0) for a lower-case ASCII letter.
pub(crate) fn alphabet_slot(letter: char) -> Option<usize> {
    if letter.is_ascii_lowercase() {
        Some(letter as usize - 'a' as usize)
    } else {
        None
    }
}

/// Inverse of [`alphabet_slot`].
pub(crate) fn slot_letter(slot: usize) -> char {
    (b'a' + slot as u8) as char
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.letters() {
            write!(f, "{}", letter)?;
        }
        Ok(())
    }
}

impl FromStr for Word {
    type Err = WordleError;

    fn from_str(word: &str) -> Result<Self, Self::Err> {
        Word::new(word)
    }
}

impl TryFrom<&str> for Word {
    type Error = WordleError;

    fn try_from(word: &str) -> Result<Self, Self::Error> {
        Word::new(word)
    }
}

impl TryFrom<String> for Word {
    type Error = WordleError;

    fn try_from(word: String) -> Result<Self, Self::Error> {
        Word::new(&word)
    }
}

impl From<Word> for String {
    fn from(word: Word) -> Self {
        word.to_string()
    }
}

impl PartialEq<&str> for Word {
    fn eq(&self, other: &&str) -> bool {
        self.0.as_slice() == other.as_bytes()
    }
}
