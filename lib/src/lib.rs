mod config;
mod data;
mod engine;
mod game;
mod hints;
mod restrictions;
mod results;
mod word;

pub use config::GameConfig;
pub use data::*;
pub use engine::*;
pub use game::*;
pub use hints::*;
pub use restrictions::*;
pub use results::*;
pub use word::{Word, ALPHABET_SIZE, WORD_LENGTH};
