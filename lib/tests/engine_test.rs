#[macro_use]
extern crate assert_matches;

use rand::rngs::StdRng;
use rand::SeedableRng;
use wordle_game::*;

fn create_word_bank() -> WordBank {
    WordBank::from_iterator(
        vec!["crane", "allow", "train", "array"],
        vec![
            "arise", "crone", "hello", "world", "pilot", "error", "radar", "fizzy", "brace",
            "trace", "grace", "irate", "raise", "adieu", "aisle",
        ],
    )
    .unwrap()
}

fn session_for(answer: &str) -> GameSession {
    GameSession::new(Word::new(answer).unwrap(), &GameConfig::default())
}

fn hard_session_for(answer: &str) -> GameSession {
    let config = GameConfig {
        hard_mode: true,
        ..GameConfig::default()
    };
    GameSession::new(Word::new(answer).unwrap(), &config)
}

#[test]
fn full_game_is_won_on_third_guess() -> Result<(), WordleError> {
    let bank = create_word_bank();
    let mut session = session_for("crane");

    let first = session.enter_guess("arise", &bank)?;
    assert_eq!(first.row, 0);
    assert_eq!(
        first.state,
        GameState::InProgress {
            attempt: 1,
            input_len: 0
        }
    );

    let second = session.enter_guess("crone", &bank)?;
    assert_eq!(second.row, 1);
    assert_matches!(second.state, GameState::InProgress { attempt: 2, .. });

    let third = session.enter_guess("crane", &bank)?;
    assert_eq!(third.row, 2);
    assert!(third.result.is_correct());
    assert_eq!(third.state, GameState::Won { attempts: 3 });
    assert!(session.is_finished());
    assert_eq!(
        session.result(),
        Some(GameResult::Success(vec![
            Word::new("arise")?,
            Word::new("crone")?,
            Word::new("crane")?,
        ]))
    );
    Ok(())
}

#[test]
fn game_is_lost_after_max_attempts() -> Result<(), WordleError> {
    let bank = create_word_bank();
    let config = GameConfig {
        max_attempts: 2,
        ..GameConfig::default()
    };
    let mut session = GameSession::new(Word::new("crane")?, &config);

    session.enter_guess("fizzy", &bank)?;
    let last = session.enter_guess("hello", &bank)?;

    assert_eq!(last.state, GameState::Lost);
    assert_matches!(session.result(), Some(GameResult::Failure(guesses)) if guesses.len() == 2);
    assert_matches!(session.enter_guess("crane", &bank), Err(WordleError::GameOver));
    assert_matches!(session.type_letter('a'), Err(WordleError::GameOver));
    Ok(())
}

#[test]
fn incomplete_guess_is_rejected_without_change() -> Result<(), WordleError> {
    let bank = create_word_bank();
    let mut session = session_for("crane");

    for letter in "cra".chars() {
        session.type_letter(letter)?;
    }

    assert_matches!(
        session.submit(&bank),
        Err(WordleError::IncompleteGuess { letters: 3 })
    );
    assert_eq!(
        session.state(),
        GameState::InProgress {
            attempt: 0,
            input_len: 3
        }
    );
    assert!(session.guesses().is_empty());
    assert!(session.knowledge().is_empty());
    Ok(())
}

#[test]
fn unknown_word_is_rejected_without_change() -> Result<(), WordleError> {
    let bank = create_word_bank();
    let mut session = session_for("crane");

    assert_matches!(
        session.enter_guess("zzzzz", &bank),
        Err(WordleError::NotInVocabulary(word)) if word == "zzzzz"
    );
    assert_eq!(session.input(), "zzzzz");
    assert!(session.guesses().is_empty());
    assert!(session.knowledge().is_empty());
    Ok(())
}

#[test]
fn too_long_guess_is_rejected() {
    let bank = create_word_bank();
    let mut session = session_for("crane");

    assert_matches!(
        session.enter_guess("cranes", &bank),
        Err(WordleError::WordLength(6))
    );
}

#[test]
fn guess_with_unsupported_character_is_rejected_without_change() -> Result<(), WordleError> {
    let bank = create_word_bank();
    let mut session = session_for("crane");

    assert_matches!(
        session.enter_guess("ab1de", &bank),
        Err(WordleError::UnsupportedCharacter('1'))
    );
    assert_eq!(session.input(), "");
    assert!(!session.is_mode_locked());
    session.set_hard_mode(true)?;
    assert!(session.hard_mode());

    // A partial guess that was already typed is kept.
    session.type_letter('c')?;
    assert_matches!(
        session.enter_guess("cr-ne", &bank),
        Err(WordleError::UnsupportedCharacter('-'))
    );
    assert_eq!(session.input(), "c");
    Ok(())
}

#[test]
fn answer_is_always_a_valid_guess() -> Result<(), WordleError> {
    let bank = WordBank::default();
    let mut rng = StdRng::seed_from_u64(1);
    let mut session = GameSession::start(&bank, &GameConfig::default(), &mut rng);

    assert_eq!(*session.answer(), FALLBACK_ANSWER);
    let outcome = session.enter_guess("about", &bank)?;
    assert_eq!(outcome.state, GameState::Won { attempts: 1 });
    Ok(())
}

#[test]
fn typing_is_capped_and_backspace_removes_letters() -> Result<(), WordleError> {
    let mut session = session_for("crane");

    for letter in "CRANES".chars() {
        session.type_letter(letter)?;
    }
    assert_eq!(session.input(), "crane");

    session.backspace();
    session.backspace();
    assert_eq!(session.input(), "cra");
    assert_matches!(
        session.type_letter('3'),
        Err(WordleError::UnsupportedCharacter('3'))
    );
    assert_eq!(session.input(), "cra");
    Ok(())
}

#[test]
fn hard_mode_locks_on_first_letter() -> Result<(), WordleError> {
    let mut session = session_for("crane");

    session.set_hard_mode(true)?;
    session.set_hard_mode(false)?;
    session.set_hard_mode(true)?;
    assert!(!session.is_mode_locked());

    session.type_letter('c')?;
    assert!(session.is_mode_locked());
    assert_matches!(session.set_hard_mode(false), Err(WordleError::ModeLocked));
    assert!(session.hard_mode());

    // Deleting the letter does not unlock the mode.
    session.backspace();
    assert_matches!(session.set_hard_mode(false), Err(WordleError::ModeLocked));
    Ok(())
}

#[test]
fn hard_mode_rejects_guess_dropping_correct_letter() -> Result<(), WordleError> {
    let bank = create_word_bank();
    let mut session = hard_session_for("allow");

    session.enter_guess("hello", &bank)?;
    let knowledge_before = session.knowledge().clone();

    assert_matches!(
        session.enter_guess("world", &bank),
        Err(WordleError::HardMode(HardModeViolation::FixedPosition {
            position: 2,
            letter: 'l'
        }))
    );
    assert_eq!(*session.knowledge(), knowledge_before);
    assert_eq!(session.guesses().len(), 1);

    let outcome = session.enter_guess("allow", &bank)?;
    assert_eq!(outcome.state, GameState::Won { attempts: 2 });
    Ok(())
}

#[test]
fn hard_mode_violation_message() -> Result<(), WordleError> {
    let bank = create_word_bank();
    let mut session = hard_session_for("allow");

    session.enter_guess("hello", &bank)?;
    let err = session.enter_guess("pilot", &bank).unwrap_err();

    assert_eq!(err.to_string(), "Hard Mode: include 2× 'L'");
    Ok(())
}

#[test]
fn normal_mode_accepts_inconsistent_guesses() -> Result<(), WordleError> {
    let bank = create_word_bank();
    let mut session = session_for("allow");

    session.enter_guess("hello", &bank)?;
    let outcome = session.enter_guess("world", &bank)?;

    assert_matches!(outcome.state, GameState::InProgress { attempt: 2, .. });
    Ok(())
}

#[test]
fn knowledge_is_updated_after_each_guess() -> Result<(), WordleError> {
    let bank = create_word_bank();
    let mut session = session_for("train");

    session.enter_guess("error", &bank)?;

    let knowledge = session.knowledge();
    assert_eq!(knowledge.fixed_letter(1), Some('r'));
    assert_eq!(knowledge.min_count('r'), 1);
    assert!(!knowledge.is_absent('r'));
    assert!(knowledge.is_absent('e'));
    assert!(knowledge.is_absent('o'));
    Ok(())
}

#[test]
fn first_hint_is_a_starter_word() {
    let bank = create_word_bank();
    let session = session_for("crane");
    let mut rng = StdRng::seed_from_u64(3);

    for _ in 0..20 {
        let hint = session.hint(&bank, &mut rng);
        assert!(hint.map_or(false, |hint| STARTER_WORDS.contains(&hint)));
    }
}

#[test]
fn hint_after_guess_is_consistent_and_untried() -> Result<(), WordleError> {
    let bank = create_word_bank();
    let mut session = session_for("crane");
    let mut rng = StdRng::seed_from_u64(3);

    session.enter_guess("arise", &bank)?;

    for _ in 0..20 {
        let hint = session.hint(&bank, &mut rng).unwrap();
        assert!(session.knowledge().is_satisfied_by(&hint));
        assert!(hint != "arise");
        assert!(["crane", "brace", "trace", "grace"].iter().any(|word| hint == *word));
    }
    Ok(())
}

#[test]
fn typed_letters_end_the_starter_hints() -> Result<(), WordleError> {
    let bank = create_word_bank();
    let mut session = session_for("crane");
    let mut rng = StdRng::seed_from_u64(3);

    session.type_letter('x')?;

    // Nothing is known yet, so any word in the bank may be suggested.
    let hint = session.hint(&bank, &mut rng).unwrap();
    assert!(bank.contains(&hint));
    Ok(())
}
