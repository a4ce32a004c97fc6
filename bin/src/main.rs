use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Instant;
use tracing::{debug, info};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use wordle_game::*;

/// Play Wordle in the terminal.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Path to a file of words that may be chosen as the answer, with one word on each line.
    #[arg(short = 'f', long)]
    answers_file: String,

    /// Path to a file of extra words that may be guessed, with one word on each line.
    #[arg(short = 'a', long)]
    allowed_file: Option<String>,

    /// How many guesses the player gets.
    #[arg(long, default_value_t = 6)]
    max_attempts: usize,

    /// The delay between revealing consecutive tiles, in milliseconds.
    #[arg(long, default_value_t = 300)]
    flip_ms: u64,

    /// How long a hint stays on screen before another one can be requested, in milliseconds.
    #[arg(long, default_value_t = 2000)]
    hint_ms: u64,

    /// Start in Hard Mode: revealed clues must be used in every later guess.
    #[arg(long)]
    hard: bool,

    /// Seed for choosing answers and hints, to replay the same games.
    #[arg(long)]
    seed: Option<u64>,
}

const HELP: &str = "Type a 5-letter word and press enter to guess it.\n\
     \x20 ?      show a hint\n\
     \x20 :hard  toggle Hard Mode (only before the first letter)\n\
     \x20 :new   start a new game\n\
     \x20 :quit  exit";

fn main() -> Result<(), Box<dyn Error>> {
    init_logging();
    let args = Args::parse();

    let answers = io::BufReader::new(File::open(&args.answers_file)?);
    let bank = match &args.allowed_file {
        Some(path) => WordBank::from_reader(answers, io::BufReader::new(File::open(path)?))?,
        None => WordBank::from_reader(answers, io::empty())?,
    };
    info!(words = bank.len(), answers = bank.answer_words().len(), "loaded word bank");

    let config = GameConfig {
        max_attempts: args.max_attempts,
        flip_ms: args.flip_ms,
        hint_ms: args.hint_ms,
        hard_mode: args.hard,
    };
    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut game = Game::new(bank, config, rng);
    let mut screen = Terminal;
    println!("{}\n", HELP);
    print_status(&game);

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        match line.trim() {
            "" => {}
            ":quit" | ":q" => break,
            ":new" => game.new_game(&mut screen),
            ":hard" => {
                let enabled = !game.session().hard_mode();
                match game.set_hard_mode(enabled) {
                    Ok(()) => println!("Hard Mode {}", if enabled { "on" } else { "off" }),
                    Err(err) => println!("{}", err),
                }
            }
            "?" => {
                game.request_hint(Instant::now(), &mut screen);
            }
            word => play_guess(&mut game, word, &mut screen),
        }
        print_status(&game);
    }
    Ok(())
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr).compact())
        .init();
}

/// Types the word into the game and plays back the reveal at its own pace.
fn play_guess<R: Rng>(game: &mut Game<R>, word: &str, screen: &mut Terminal) {
    if game.session().is_finished() {
        println!("The game is over. Type :new to play again.");
        return;
    }
    let length = word.chars().count();
    if length > WORD_LENGTH {
        println!("{}", WordleError::WordLength(length));
        return;
    }
    while !game.session().input().is_empty() {
        game.press_backspace();
    }
    for letter in word.chars() {
        if let Err(err) = game.press_letter(letter) {
            println!("{}", err);
            return;
        }
    }

    let submitted_at = Instant::now();
    for step in game.press_enter(screen) {
        let elapsed = submitted_at.elapsed();
        if step.delay > elapsed {
            thread::sleep(step.delay - elapsed);
        }
        game.deliver(&step, screen);
    }
}

/// Prints the keyboard and the attempt counter while the game is running.
fn print_status<R: Rng>(game: &Game<R>) {
    let session = game.session();
    if session.is_finished() {
        return;
    }
    let keys: String = ('a'..='z')
        .map(|letter| match game.keyboard().get(letter) {
            Some(LetterResult::Correct) => letter.to_ascii_uppercase(),
            Some(LetterResult::Present) => letter,
            Some(LetterResult::Absent) => '.',
            None => '_',
        })
        .collect();
    println!(
        "[{}] guess {}/{}{}",
        keys,
        session.guesses().len() + 1,
        session.max_attempts(),
        if session.hard_mode() { " (hard)" } else { "" }
    );
}

/// Prints the board and messages to stdout.
struct Terminal;

impl PresentationSink for Terminal {
    fn on_tile_result(&mut self, _row: usize, position: usize, letter: char, result: LetterResult) {
        let tile = match result {
            LetterResult::Correct => format!("[{}]", letter.to_ascii_uppercase()),
            LetterResult::Present => format!("({})", letter),
            LetterResult::Absent => format!(" {} ", letter),
        };
        print!("{}", tile);
        if position + 1 == WORD_LENGTH {
            println!();
        }
        let _ = io::stdout().flush();
    }

    fn on_key_result(&mut self, letter: char, result: LetterResult) {
        debug!(%letter, ?result, "key updated");
    }

    fn on_game_end(&mut self, won: bool, attempts_used: Option<usize>, answer: &Word) {
        match (won, attempts_used) {
            (true, Some(1)) => println!("Solved it in 1 guess!"),
            (true, Some(attempts)) => println!("Solved it in {} guesses!", attempts),
            _ => println!("Out of guesses. The word was {}.", answer.to_string().to_uppercase()),
        }
        println!("Type :new to play again.");
    }

    fn on_invalid_guess(&mut self, reason: &WordleError) {
        println!("{}", reason);
    }

    fn on_hint_produced(&mut self, hint: Option<&Word>) {
        match hint {
            Some(word) => println!("Hint: try {}", word.to_string().to_uppercase()),
            None => println!("No words match the clues so far."),
        }
    }

    fn on_message(&mut self, message: &str) {
        println!("{}", message);
    }
}
