use std::time::Duration;

/// Settings for a game.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct GameConfig {
    /// How many guesses the player gets.
    pub max_attempts: usize,
    /// The delay between revealing consecutive tiles of a guess, in milliseconds.
    pub flip_ms: u64,
    /// How long a hint stays on screen, in milliseconds. No new hint is produced meanwhile.
    pub hint_ms: u64,
    /// Whether new games start in Hard Mode.
    pub hard_mode: bool,
}

impl GameConfig {
    pub fn flip_interval(&self) -> Duration {
        Duration::from_millis(self.flip_ms)
    }

    pub fn hint_duration(&self) -> Duration {
        Duration::from_millis(self.hint_ms)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            max_attempts: 6,
            flip_ms: 300,
            hint_ms: 2000,
            hard_mode: false,
        }
    }
}
