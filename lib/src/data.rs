use crate::results::WordleError;
use crate::word::Word;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;
use std::io::BufRead;
use tracing::warn;

/// The objective word used when the bank has no words at all.
pub const FALLBACK_ANSWER: Word = Word(*b"about");

/// Contains all the words for this game: the words that may be chosen as the objective, and the
/// wider set of words that may be guessed.
#[derive(Clone, Debug, Default)]
pub struct WordBank {
    answer_words: Vec<Word>,
    allowed_words: Vec<Word>,
    all_words: Vec<Word>,
    vocabulary: HashSet<Word>,
}

impl WordBank {
    /// Constructs a new `WordBank` from already-parsed words. Duplicates are dropped, keeping the
    /// first occurrence.
    pub fn new(answer_words: Vec<Word>, allowed_words: Vec<Word>) -> Self {
        let answer_words = dedup(answer_words);
        let allowed_words = dedup(allowed_words);
        let all_words = dedup(
            answer_words
                .iter()
                .chain(allowed_words.iter())
                .copied()
                .collect(),
        );
        let vocabulary = all_words.iter().copied().collect();
        WordBank {
            answer_words,
            allowed_words,
            all_words,
            vocabulary,
        }
    }

    /// Constructs a new `WordBank` using the words from the given iterators.
    ///
    /// Each word is trimmed and converted to lower case. Empty entries are skipped.
    pub fn from_iterator(
        answer_words: impl IntoIterator<Item = impl AsRef<str>>,
        allowed_words: impl IntoIterator<Item = impl AsRef<str>>,
    ) -> Result<Self, WordleError> {
        Ok(WordBank::new(
            parse_words(answer_words)?,
            parse_words(allowed_words)?,
        ))
    }

    /// Constructs a new `WordBank` by reading words from the given readers.
    ///
    /// Each reader should provide one word per line. Each word is trimmed and converted to lower
    /// case. Blank lines are skipped.
    pub fn from_reader<A: BufRead, B: BufRead>(
        answer_reader: A,
        allowed_reader: B,
    ) -> Result<Self, WordleError> {
        Ok(WordBank::new(
            read_words(answer_reader)?,
            read_words(allowed_reader)?,
        ))
    }

    /// The words that may be chosen as the objective.
    pub fn answer_words(&self) -> &[Word] {
        &self.answer_words
    }

    /// The words that may be guessed, beyond the answer words.
    pub fn allowed_words(&self) -> &[Word] {
        &self.allowed_words
    }

    /// Every known word, answer words first, without duplicates.
    pub fn all_words(&self) -> &[Word] {
        &self.all_words
    }

    /// Returns `true` iff the word is either an answer word or an allowed word.
    pub fn contains(&self, word: &Word) -> bool {
        self.vocabulary.contains(word)
    }

    /// Returns the number of distinct words.
    pub fn len(&self) -> usize {
        self.all_words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.all_words.is_empty()
    }

    /// Chooses a random objective word.
    ///
    /// If there are no answer words, this falls back to a random allowed word, and then to
    /// [`FALLBACK_ANSWER`].
    pub fn choose_answer<R: Rng + ?Sized>(&self, rng: &mut R) -> Word {
        if let Some(word) = self.answer_words.choose(rng) {
            return *word;
        }
        warn!("no answer words available, falling back to the allowed words");
        self.allowed_words.choose(rng).copied().unwrap_or_else(|| {
            warn!(fallback = %FALLBACK_ANSWER, "no words available");
            FALLBACK_ANSWER
        })
    }
}

/// Reads one word per line, skipping blank lines.
pub fn read_words<R: BufRead>(reader: R) -> Result<Vec<Word>, WordleError> {
    let mut words = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        words.push(Word::new(&line)?);
    }
    Ok(words)
}

fn parse_words(words: impl IntoIterator<Item = impl AsRef<str>>) -> Result<Vec<Word>, WordleError> {
    words
        .into_iter()
        .filter(|word| !word.as_ref().trim().is_empty())
        .map(|word| Word::new(word.as_ref()))
        .collect()
}

fn dedup(words: Vec<Word>) -> Vec<Word> {
    let mut seen = HashSet::with_capacity(words.len());
    words.into_iter().filter(|word| seen.insert(*word)).collect()
}
