use crate::restrictions::Knowledge;
use crate::word::Word;
use rand::seq::SliceRandom;
use rand::Rng;
use rayon::prelude::*;
use std::collections::HashSet;

/// Strong opening words, offered as the hint before anything has been entered.
pub const STARTER_WORDS: [Word; 5] = [
    Word(*b"irate"),
    Word(*b"arise"),
    Word(*b"raise"),
    Word(*b"adieu"),
    Word(*b"aisle"),
];

/// Returns the words that have not been tried yet and that satisfy everything in `knowledge`,
/// in the same order as `all_words`.
pub fn candidate_words(
    knowledge: &Knowledge,
    tried: &HashSet<Word>,
    all_words: &[Word],
) -> Vec<Word> {
    all_words
        .par_iter()
        .filter(|word| !tried.contains(*word) && knowledge.is_satisfied_by(word))
        .copied()
        .collect()
}

/// Suggests a word that is consistent with everything revealed so far.
///
/// For the first guess this is a random word from [`STARTER_WORDS`]. Otherwise it is a random
/// word from [`candidate_words`], or `None` if no word fits.
pub fn generate_hint<R: Rng + ?Sized>(
    knowledge: &Knowledge,
    tried: &HashSet<Word>,
    all_words: &[Word],
    is_first_guess: bool,
    rng: &mut R,
) -> Option<Word> {
    if is_first_guess {
        return STARTER_WORDS.choose(rng).copied();
    }
    candidate_words(knowledge, tried, all_words).choose(rng).copied()
}
