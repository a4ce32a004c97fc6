use crate::config::GameConfig;
use crate::data::WordBank;
use crate::engine::{GameSession, GameState, SubmitOutcome};
use crate::results::{LetterResult, WordleError};
use crate::word::{alphabet_slot, Word, ALPHABET_SIZE};
use rand::Rng;
use std::time::{Duration, Instant};
use tracing::debug;

/// Receives everything the player should see. Implemented by the user interface.
pub trait PresentationSink {
    /// A tile of the board was revealed.
    fn on_tile_result(&mut self, row: usize, position: usize, letter: char, result: LetterResult);

    /// A keyboard key changed colour. Keys are only ever upgraded, following the order
    /// `Absent < Present < Correct`.
    fn on_key_result(&mut self, letter: char, result: LetterResult);

    /// The game ended. `attempts_used` is only given when the game was won.
    fn on_game_end(&mut self, won: bool, attempts_used: Option<usize>, answer: &Word);

    /// A guess was rejected; the game is unchanged.
    fn on_invalid_guess(&mut self, reason: &WordleError);

    /// A hint was requested. `None` means that no word fits what has been revealed.
    fn on_hint_produced(&mut self, hint: Option<&Word>);

    /// A short notice for the player, such as "New game started".
    fn on_message(&mut self, _message: &str) {}
}

/// The colour of every keyboard key, indexed by letter.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KeyboardState {
    keys: [Option<LetterResult>; ALPHABET_SIZE],
}

impl KeyboardState {
    /// Returns the best result revealed so far for the letter.
    pub fn get(&self, letter: char) -> Option<LetterResult> {
        alphabet_slot(letter).and_then(|slot| self.keys[slot])
    }

    /// Merges a newly revealed result into the key. Returns `true` iff the key changed.
    pub fn record(&mut self, letter: char, result: LetterResult) -> bool {
        let Some(slot) = alphabet_slot(letter) else {
            return false;
        };
        let merged = match self.keys[slot] {
            Some(current) => current.merge(result),
            None => result,
        };
        if self.keys[slot] == Some(merged) {
            return false;
        }
        self.keys[slot] = Some(merged);
        true
    }
}

/// Something to show the player once its delay has passed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RevealEvent {
    Tile {
        row: usize,
        position: usize,
        letter: char,
        result: LetterResult,
    },
    GameEnd {
        won: bool,
        attempts_used: Option<usize>,
        answer: Word,
    },
}

/// One step of the staged reveal of a guess.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RevealStep {
    /// The game this step belongs to. Steps from an earlier game are ignored.
    pub generation: u64,
    /// When to deliver this step, measured from the moment the guess was submitted.
    pub delay: Duration,
    pub event: RevealEvent,
}

/// Drives a sequence of games for a user interface.
///
/// Guesses are scored as soon as they are submitted. The returned [`RevealStep`]s only pace what
/// the player sees: the interface waits for each step's delay and passes it back to
/// [`Game::deliver`]. Starting a new game invalidates every step that hasn't been delivered yet.
pub struct Game<R> {
    bank: WordBank,
    config: GameConfig,
    rng: R,
    session: GameSession,
    generation: u64,
    keyboard: KeyboardState,
    hint_visible_until: Option<Instant>,
}

impl<R: Rng> Game<R> {
    /// Starts the first game.
    pub fn new(bank: WordBank, config: GameConfig, mut rng: R) -> Self {
        let session = GameSession::start(&bank, &config, &mut rng);
        Game {
            bank,
            config,
            rng,
            session,
            generation: 0,
            keyboard: KeyboardState::default(),
            hint_visible_until: None,
        }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn bank(&self) -> &WordBank {
        &self.bank
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Identifies the current game. Increases with every new game.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn keyboard(&self) -> &KeyboardState {
        &self.keyboard
    }

    /// Replaces the current game with a fresh one.
    ///
    /// The Hard Mode choice of the previous game carries over, and may be changed again until the
    /// first letter is entered.
    pub fn new_game<S: PresentationSink + ?Sized>(&mut self, sink: &mut S) {
        let config = GameConfig {
            hard_mode: self.session.hard_mode(),
            ..self.config.clone()
        };
        self.session = GameSession::start(&self.bank, &config, &mut self.rng);
        self.generation += 1;
        self.keyboard = KeyboardState::default();
        self.hint_visible_until = None;
        debug!(generation = self.generation, "new game");
        sink.on_message("New game started");
    }

    pub fn set_hard_mode(&mut self, enabled: bool) -> Result<(), WordleError> {
        self.session.set_hard_mode(enabled)
    }

    /// Enters a letter. Ignored once the game is finished.
    pub fn press_letter(&mut self, letter: char) -> Result<(), WordleError> {
        if self.session.is_finished() {
            return Ok(());
        }
        self.session.type_letter(letter)
    }

    pub fn press_backspace(&mut self) {
        self.session.backspace();
    }

    /// Submits the current guess.
    ///
    /// Rejected guesses are reported to `sink` and produce no steps. An accepted guess produces one
    /// step per tile, `flip_ms` apart, followed by the end of the game if this guess ended it.
    pub fn press_enter<S: PresentationSink + ?Sized>(&mut self, sink: &mut S) -> Vec<RevealStep> {
        if self.session.is_finished() {
            return Vec::new();
        }
        match self.session.submit(&self.bank) {
            Ok(outcome) => self.reveal_plan(&outcome),
            Err(err) => {
                sink.on_invalid_guess(&err);
                Vec::new()
            }
        }
    }

    fn reveal_plan(&self, outcome: &SubmitOutcome) -> Vec<RevealStep> {
        let flip = self.config.flip_interval();
        let mut steps: Vec<RevealStep> = outcome
            .result
            .iter()
            .map(|(position, letter, result)| RevealStep {
                generation: self.generation,
                delay: flip * position as u32,
                event: RevealEvent::Tile {
                    row: outcome.row,
                    position,
                    letter,
                    result,
                },
            })
            .collect();
        let game_end = match outcome.state {
            GameState::Won { attempts } => Some((true, Some(attempts))),
            GameState::Lost => Some((false, None)),
            GameState::InProgress { .. } => None,
        };
        if let Some((won, attempts_used)) = game_end {
            steps.push(RevealStep {
                generation: self.generation,
                delay: flip * steps.len() as u32,
                event: RevealEvent::GameEnd {
                    won,
                    attempts_used,
                    answer: *self.session.answer(),
                },
            });
        }
        steps
    }

    /// Shows a reveal step. Returns `false`, showing nothing, if the step belongs to an earlier
    /// game.
    pub fn deliver<S: PresentationSink + ?Sized>(
        &mut self,
        step: &RevealStep,
        sink: &mut S,
    ) -> bool {
        if step.generation != self.generation {
            debug!(
                step_generation = step.generation,
                generation = self.generation,
                "dropping stale reveal step"
            );
            return false;
        }
        match &step.event {
            RevealEvent::Tile {
                row,
                position,
                letter,
                result,
            } => {
                sink.on_tile_result(*row, *position, *letter, *result);
                if self.keyboard.record(*letter, *result) {
                    if let Some(merged) = self.keyboard.get(*letter) {
                        sink.on_key_result(*letter, merged);
                    }
                }
            }
            RevealEvent::GameEnd {
                won,
                attempts_used,
                answer,
            } => sink.on_game_end(*won, *attempts_used, answer),
        }
        true
    }

    /// Produces a hint, unless the game is over or the previous hint is still showing at `now`.
    pub fn request_hint<S: PresentationSink + ?Sized>(
        &mut self,
        now: Instant,
        sink: &mut S,
    ) -> Option<Word> {
        if self.session.is_finished() {
            return None;
        }
        if self.hint_visible_until.map_or(false, |until| now < until) {
            return None;
        }
        let hint = self.session.hint(&self.bank, &mut self.rng);
        sink.on_hint_produced(hint.as_ref());
        if hint.is_some() {
            self.hint_visible_until = Some(now + self.config.hint_duration());
        }
        hint
    }
}
