use crate::restrictions::HardModeViolation;
use crate::word::{Word, WORD_LENGTH};
use std::io;
use thiserror::Error;

/// The result of a given letter at a specific location.
///
/// Results are ordered by how much they reveal: `Absent < Present < Correct`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LetterResult {
    /// The letter has no remaining unclaimed occurrence in the objective word.
    Absent,
    /// The letter is in the objective word, but not at this location.
    Present,
    /// The letter is at this exact location in the objective word.
    Correct,
}

impl LetterResult {
    /// Joins two results, keeping the more informative one. A keyboard key that was once shown as
    /// `Correct` stays `Correct` no matter what is revealed later.
    pub fn merge(self, other: LetterResult) -> LetterResult {
        self.max(other)
    }
}

/// The result of a single word guess.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GuessResult {
    pub guess: Word,
    /// The result of each letter, provided in the same letter order as in the guess.
    pub results: [LetterResult; WORD_LENGTH],
}

impl GuessResult {
    /// Returns `true` iff every letter was `Correct`.
    pub fn is_correct(&self) -> bool {
        self.results
            .iter()
            .all(|result| *result == LetterResult::Correct)
    }

    /// Iterates over `(position, letter, result)` for each letter of the guess.
    pub fn iter(&self) -> impl Iterator<Item = (usize, char, LetterResult)> + '_ {
        self.guess
            .letters()
            .zip(self.results.iter())
            .enumerate()
            .map(|(position, (letter, result))| (position, letter, *result))
    }
}

/// Determines the result of the given `guess` when applied to the given `objective`.
///
/// Exact matches are claimed first, and only the remaining occurrences of a letter can be marked
/// `Present`, so a repeated letter is never reported more often than it occurs in the objective.
///
/// ```
/// use wordle_game::*;
///
/// let objective = Word::new("allow").unwrap();
/// let guess = Word::new("hello").unwrap();
/// let result = get_result_for_guess(&objective, &guess);
/// assert_eq!(
///     result.results,
///     [
///         LetterResult::Absent,
///         LetterResult::Absent,
///         LetterResult::Correct,
///         LetterResult::Present,
///         LetterResult::Present,
///     ]
/// );
/// ```
pub fn get_result_for_guess(objective: &Word, guess: &Word) -> GuessResult {
    let mut available = objective.letter_counts();
    let mut results = [LetterResult::Absent; WORD_LENGTH];

    for (position, (guess_slot, objective_slot)) in
        guess.slots().zip(objective.slots()).enumerate()
    {
        if guess_slot == objective_slot {
            results[position] = LetterResult::Correct;
            available[guess_slot] -= 1;
        }
    }
    for (position, slot) in guess.slots().enumerate() {
        if results[position] == LetterResult::Correct {
            continue;
        }
        if available[slot] > 0 {
            results[position] = LetterResult::Present;
            available[slot] -= 1;
        }
    }

    GuessResult {
        guess: *guess,
        results,
    }
}

/// Indicates that an error occurred while reading words or playing the game.
///
/// None of these are fatal: a rejected guess leaves the game exactly as it was, and the player
/// may try again.
#[derive(Debug, Error)]
pub enum WordleError {
    /// A word did not have exactly five letters. Holds the length that was found.
    #[error("words must have exactly 5 letters, found {0}")]
    WordLength(usize),
    /// A word contained something other than the letters `a` to `z`.
    #[error("unsupported character '{0}'")]
    UnsupportedCharacter(char),
    /// The guess was submitted before every letter was entered.
    #[error("Not enough letters")]
    IncompleteGuess { letters: usize },
    /// The guess is neither an allowed word nor an answer word.
    #[error("Not in word list")]
    NotInVocabulary(Word),
    /// Hard Mode is on and the guess ignores a revealed clue.
    #[error(transparent)]
    HardMode(#[from] HardModeViolation),
    /// Hard Mode can no longer be toggled in this game.
    #[error("Hard Mode can only be changed before the first letter is entered")]
    ModeLocked,
    /// The game has already been won or lost.
    #[error("the game is already over")]
    GameOver,
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Whether the game was won or lost by the player.
#[derive(Debug, Eq, PartialEq)]
pub enum GameResult {
    /// Indicates that the player won the game, and provides the guesses that were given.
    Success(Vec<Word>),
    /// Indicates that the player ran out of attempts, and provides the guesses that were given.
    Failure(Vec<Word>),
}
