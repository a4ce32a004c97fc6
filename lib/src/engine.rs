use crate::config::GameConfig;
use crate::data::WordBank;
use crate::hints::generate_hint;
use crate::restrictions::Knowledge;
use crate::results::*;
use crate::word::{Word, WORD_LENGTH};
use rand::Rng;
use std::collections::HashSet;
use tracing::debug;

/// Where a game currently stands. `Won` and `Lost` are final.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameState {
    /// Waiting for the guess at zero-based `attempt`, with `input_len` letters entered so far.
    InProgress { attempt: usize, input_len: usize },
    /// The objective word was guessed in `attempts` guesses.
    Won { attempts: usize },
    /// Every attempt was used without guessing the objective word.
    Lost,
}

impl GameState {
    pub fn is_finished(&self) -> bool {
        !matches!(self, GameState::InProgress { .. })
    }
}

/// What happened when a guess was accepted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmitOutcome {
    /// The zero-based row that the guess was entered on.
    pub row: usize,
    pub result: GuessResult,
    /// The state of the game after this guess.
    pub state: GameState,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Outcome {
    Won,
    Lost,
}

/// A single game: the objective word, the letters typed so far, the accepted guesses, and the
/// [`Knowledge`] they revealed.
///
/// A new game is a new `GameSession`; sessions are never reset in place.
///
/// ```
/// use wordle_game::*;
///
/// let bank = WordBank::from_iterator(vec!["crane"], vec!["arise", "crone"]).unwrap();
/// let mut session = GameSession::new(Word::new("crane").unwrap(), &GameConfig::default());
///
/// session.enter_guess("arise", &bank).unwrap();
/// session.enter_guess("crone", &bank).unwrap();
/// let outcome = session.enter_guess("crane", &bank).unwrap();
///
/// assert_eq!(outcome.state, GameState::Won { attempts: 3 });
/// ```
#[derive(Clone, Debug)]
pub struct GameSession {
    answer: Word,
    max_attempts: usize,
    hard_mode: bool,
    mode_locked: bool,
    attempt: usize,
    input: String,
    guesses: Vec<GuessResult>,
    knowledge: Knowledge,
    outcome: Option<Outcome>,
}

impl GameSession {
    /// Starts a game with the given objective word.
    pub fn new(answer: Word, config: &GameConfig) -> GameSession {
        debug!(
            hard_mode = config.hard_mode,
            max_attempts = config.max_attempts,
            "starting game"
        );
        GameSession {
            answer,
            max_attempts: config.max_attempts.max(1),
            hard_mode: config.hard_mode,
            mode_locked: false,
            attempt: 0,
            input: String::with_capacity(WORD_LENGTH),
            guesses: Vec::new(),
            knowledge: Knowledge::new(),
            outcome: None,
        }
    }

    /// Starts a game with an objective word chosen at random from the bank.
    pub fn start<R: Rng + ?Sized>(bank: &WordBank, config: &GameConfig, rng: &mut R) -> Self {
        GameSession::new(bank.choose_answer(rng), config)
    }

    pub fn state(&self) -> GameState {
        match self.outcome {
            None => GameState::InProgress {
                attempt: self.attempt,
                input_len: self.input.len(),
            },
            Some(Outcome::Won) => GameState::Won {
                attempts: self.guesses.len(),
            },
            Some(Outcome::Lost) => GameState::Lost,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.outcome.is_some()
    }

    /// The objective word.
    pub fn answer(&self) -> &Word {
        &self.answer
    }

    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// The letters entered for the current guess.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// The accepted guesses, in order.
    pub fn guesses(&self) -> &[GuessResult] {
        &self.guesses
    }

    pub fn knowledge(&self) -> &Knowledge {
        &self.knowledge
    }

    pub fn hard_mode(&self) -> bool {
        self.hard_mode
    }

    /// Returns `true` once a letter has been entered, after which Hard Mode can't be changed.
    pub fn is_mode_locked(&self) -> bool {
        self.mode_locked
    }

    /// Turns Hard Mode on or off. Fails once any letter has been entered.
    pub fn set_hard_mode(&mut self, enabled: bool) -> Result<(), WordleError> {
        if self.mode_locked {
            return Err(WordleError::ModeLocked);
        }
        self.hard_mode = enabled;
        Ok(())
    }

    /// Adds a letter to the current guess. Letters beyond the fifth are ignored.
    pub fn type_letter(&mut self, letter: char) -> Result<(), WordleError> {
        if self.is_finished() {
            return Err(WordleError::GameOver);
        }
        let lower = letter.to_ascii_lowercase();
        if !lower.is_ascii_lowercase() {
            return Err(WordleError::UnsupportedCharacter(letter));
        }
        if self.input.len() >= WORD_LENGTH {
            return Ok(());
        }
        self.input.push(lower);
        self.mode_locked = true;
        Ok(())
    }

    /// Removes the last letter of the current guess, if there is one.
    pub fn backspace(&mut self) {
        if !self.is_finished() {
            self.input.pop();
        }
    }

    /// Submits the current guess.
    ///
    /// The guess is rejected, leaving the game unchanged, if it is incomplete, if it is not in the
    /// word bank, or if Hard Mode is on and it ignores a revealed clue. Otherwise it is scored, the
    /// knowledge is updated, and the game either ends or moves on to the next attempt.
    pub fn submit(&mut self, bank: &WordBank) -> Result<SubmitOutcome, WordleError> {
        if self.is_finished() {
            return Err(WordleError::GameOver);
        }
        if self.input.len() < WORD_LENGTH {
            return Err(WordleError::IncompleteGuess {
                letters: self.input.len(),
            });
        }
        let guess = Word::new(&self.input)?;
        if !bank.contains(&guess) && guess != self.answer {
            return Err(WordleError::NotInVocabulary(guess));
        }
        if self.hard_mode {
            self.knowledge.check_hard_mode(&guess)?;
        }

        let result = get_result_for_guess(&self.answer, &guess);
        self.knowledge.update(&result);
        self.guesses.push(result.clone());
        let row = self.attempt;
        if result.is_correct() {
            self.outcome = Some(Outcome::Won);
        } else if self.attempt + 1 >= self.max_attempts {
            self.outcome = Some(Outcome::Lost);
        } else {
            self.attempt += 1;
            self.input.clear();
        }
        debug!(%guess, row, state = ?self.state(), "accepted guess");

        Ok(SubmitOutcome {
            row,
            result,
            state: self.state(),
        })
    }

    /// Replaces the current input with `word`, entered letter by letter, and submits it.
    ///
    /// A word that is too long or holds anything but letters is rejected before the input is
    /// touched, so it neither replaces the input nor locks Hard Mode.
    pub fn enter_guess(
        &mut self,
        word: &str,
        bank: &WordBank,
    ) -> Result<SubmitOutcome, WordleError> {
        if self.is_finished() {
            return Err(WordleError::GameOver);
        }
        let word = word.trim();
        let length = word.chars().count();
        if length > WORD_LENGTH {
            return Err(WordleError::WordLength(length));
        }
        if let Some(letter) = word
            .chars()
            .find(|letter| !letter.to_ascii_lowercase().is_ascii_lowercase())
        {
            return Err(WordleError::UnsupportedCharacter(letter));
        }
        self.input.clear();
        for letter in word.chars() {
            self.type_letter(letter)?;
        }
        self.submit(bank)
    }

    /// Suggests a word that is consistent with everything revealed so far, or `None` if no word in
    /// the bank fits.
    pub fn hint<R: Rng + ?Sized>(&self, bank: &WordBank, rng: &mut R) -> Option<Word> {
        let tried: HashSet<Word> = self.guesses.iter().map(|result| result.guess).collect();
        let is_first_guess = self.attempt == 0 && self.guesses.is_empty() && self.input.is_empty();
        generate_hint(
            &self.knowledge,
            &tried,
            bank.all_words(),
            is_first_guess,
            rng,
        )
    }

    /// Returns the result of the game once it is finished.
    pub fn result(&self) -> Option<GameResult> {
        let guesses = self.guesses.iter().map(|result| result.guess).collect();
        match self.outcome? {
            Outcome::Won => Some(GameResult::Success(guesses)),
            Outcome::Lost => Some(GameResult::Failure(guesses)),
        }
    }
}
